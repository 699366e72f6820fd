// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-family event naming.
//!
//! Every family names the same [`EventKind`] differently. Instance-scoped
//! families receive the key of their constants table; Teemo publishes on the
//! shared environment bus under a chain-qualified name.

use neodapi_core::{EventKind, ProviderFamily};

/// How a family names its events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventNaming {
    /// Listeners go on the instance, keyed by `<prefix>.<KIND>`.
    ConstantsTable(&'static str),
    /// Listeners go on the shared bus as `<family>.<chain>.<KIND>`.
    SharedBus,
}

/// Where a subscription for one event is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRoute {
    /// Register on the selected instance under this native name.
    Instance(String),
    /// Register on the environment's bus under this name.
    Bus(String),
}

/// The naming scheme of a family. Unknown families use NEOLine's.
pub fn event_naming(family: &ProviderFamily) -> EventNaming {
    match family {
        ProviderFamily::O3 => EventNaming::ConstantsTable("Constants.EventName"),
        ProviderFamily::NeoLine => EventNaming::ConstantsTable("EVENT"),
        ProviderFamily::Teemo => EventNaming::SharedBus,
        ProviderFamily::Other(_) => EventNaming::ConstantsTable("EVENT"),
    }
}

/// Route `kind` for `family` on `chain`.
pub fn route(family: &ProviderFamily, kind: EventKind, chain: &str) -> EventRoute {
    match event_naming(family) {
        EventNaming::ConstantsTable(prefix) => EventRoute::Instance(format!("{prefix}.{kind}")),
        EventNaming::SharedBus => EventRoute::Bus(format!("{family}.{chain}.{kind}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use strum::IntoEnumIterator;

    #[test]
    fn o3_uses_its_constants_table() {
        assert_eq!(
            route(&ProviderFamily::O3, EventKind::AccountChanged, "NEO"),
            EventRoute::Instance("Constants.EventName.ACCOUNT_CHANGED".to_string())
        );
    }

    #[test]
    fn neoline_uses_event_table() {
        assert_eq!(
            route(&ProviderFamily::NeoLine, EventKind::Ready, "NEO"),
            EventRoute::Instance("EVENT.READY".to_string())
        );
    }

    #[test]
    fn teemo_goes_to_the_bus_with_chain() {
        assert_eq!(
            route(&ProviderFamily::Teemo, EventKind::BlockHeightChanged, "NEO"),
            EventRoute::Bus("Teemo.NEO.BLOCK_HEIGHT_CHANGED".to_string())
        );
        assert_eq!(
            route(&ProviderFamily::Teemo, EventKind::Ready, "NEO2"),
            EventRoute::Bus("Teemo.NEO2.READY".to_string())
        );
    }

    #[test]
    fn unknown_family_falls_back_to_neoline_scheme() {
        let other = ProviderFamily::Other("OneGate".to_string());
        for kind in EventKind::iter() {
            assert_eq!(
                route(&other, kind, "NEO"),
                route(&ProviderFamily::NeoLine, kind, "NEO")
            );
        }
    }
}
