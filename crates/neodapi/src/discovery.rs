// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider discovery.
//!
//! Searches the host environment for every enabled registry entry and returns
//! the providers actually present, in registry order.

use neodapi_core::{DiscoverySource, Environment, ProviderDescriptor};
use neodapi_registry::ProviderRegistry;

/// Return a descriptor for each enabled registry entry found in `env`.
///
/// Both the global binding and the module are looked up; the global binding
/// wins when both are present. Absent providers are omitted.
pub fn discover(registry: &ProviderRegistry, env: &dyn Environment) -> Vec<ProviderDescriptor> {
    let mut found = Vec::new();

    for entry in registry.enabled() {
        let global = env.global_binding(&entry.global_binding);
        let module = env.resolve_module(&entry.module_name);

        let hit = match (global, module) {
            (Some(object), _) => Some((object, DiscoverySource::Global)),
            (None, Some(object)) => Some((object, DiscoverySource::Module)),
            (None, None) => None,
        };

        match hit {
            Some((object, source)) => {
                tracing::debug!(
                    provider = %entry.provider_name,
                    source = %source,
                    "provider found"
                );
                found.push(ProviderDescriptor::new(&entry.provider_name, object, source));
            }
            None => {
                tracing::debug!(
                    provider = %entry.provider_name,
                    global_binding = %entry.global_binding,
                    module = %entry.module_name,
                    "provider not present"
                );
            }
        }
    }

    tracing::info!(
        checked = registry.enabled().count(),
        found = found.len(),
        "provider discovery complete"
    );
    found
}
