// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in provider catalog.
//!
//! Returns hardcoded registry entries for the wallet providers neodapi knows
//! how to adapt. Configuration can override or extend these.

use crate::registry::{ProviderRegistry, ProviderRegistryEntry};

/// Returns entries for all built-in providers, in discovery order.
///
/// - O3 (`neo3Dapi` / `neo3-dapi`)
/// - NEOLine (`NEOLineN3` / `neoline-n3`)
/// - Teemo (`Teemo` / `teemo-dapi`)
pub fn builtin_catalog() -> Vec<ProviderRegistryEntry> {
    vec![
        ProviderRegistryEntry::new("O3", "neo3Dapi", "neo3-dapi"),
        ProviderRegistryEntry::new("NEOLine", "NEOLineN3", "neoline-n3"),
        ProviderRegistryEntry::new("Teemo", "Teemo", "teemo-dapi"),
    ]
}

/// A registry holding the built-in catalog.
pub fn builtin_registry() -> ProviderRegistry {
    ProviderRegistry::from_entries(builtin_catalog())
}

#[cfg(test)]
mod tests {
    use super::*;

    use neodapi_core::ProviderFamily;

    #[test]
    fn builtin_catalog_returns_three_entries() {
        assert_eq!(builtin_catalog().len(), 3);
    }

    #[test]
    fn builtin_catalog_covers_every_known_family() {
        let families: Vec<ProviderFamily> = builtin_catalog().iter().map(|e| e.family()).collect();
        assert_eq!(
            families,
            vec![ProviderFamily::O3, ProviderFamily::NeoLine, ProviderFamily::Teemo]
        );
    }

    #[test]
    fn builtin_entries_are_enabled_with_names() {
        for entry in builtin_catalog() {
            assert!(entry.is_enabled());
            assert!(!entry.global_binding.is_empty());
            assert!(!entry.module_name.is_empty());
        }
    }

    #[test]
    fn builtin_registry_preserves_catalog_order() {
        let registry = builtin_registry();
        let names: Vec<&str> = registry.iter().map(|e| e.provider_name.as_str()).collect();
        assert_eq!(names, vec!["O3", "NEOLine", "Teemo"]);
    }
}
