// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry bootstrap from configuration.
//!
//! Starts from the built-in catalog and applies each `[providers.<Name>]`
//! table: known names are patched field by field, unknown names are appended
//! as new providers in name order.

use neodapi_config::{NeodapiConfig, ProviderOverride};
use neodapi_core::DapiError;
use neodapi_registry::{ProviderRegistry, ProviderRegistryEntry, builtin_registry};

/// Build the provider registry described by `config`.
pub fn initialize_registry(config: &NeodapiConfig) -> Result<ProviderRegistry, DapiError> {
    let mut registry = builtin_registry();

    for (name, overrides) in &config.providers {
        if let Some(entry) = registry.get_mut(name) {
            apply_bindings(entry, overrides);
            apply_enabled(&mut registry, name, overrides)?;
            tracing::debug!(provider = %name, "applied provider override");
            continue;
        }

        let (Some(global_binding), Some(module_name)) =
            (&overrides.global_binding, &overrides.module_name)
        else {
            return Err(DapiError::Config(format!(
                "provider `{name}` is not built in and needs both global_binding and module_name"
            )));
        };

        registry.register(ProviderRegistryEntry::new(name, global_binding, module_name));
        apply_enabled(&mut registry, name, overrides)?;
    }

    tracing::info!(
        providers = registry.len(),
        enabled = registry.enabled().count(),
        "provider registry initialized"
    );
    Ok(registry)
}

fn apply_bindings(entry: &mut ProviderRegistryEntry, overrides: &ProviderOverride) {
    if let Some(binding) = &overrides.global_binding {
        entry.global_binding = binding.clone();
    }
    if let Some(module) = &overrides.module_name {
        entry.module_name = module.clone();
    }
}

fn apply_enabled(
    registry: &mut ProviderRegistry,
    name: &str,
    overrides: &ProviderOverride,
) -> Result<(), DapiError> {
    match overrides.enabled {
        Some(enabled) => registry.set_enabled(name, enabled),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neodapi_registry::ProviderStatus;

    fn config_with(name: &str, overrides: ProviderOverride) -> NeodapiConfig {
        let mut config = NeodapiConfig::default();
        config.providers.insert(name.to_string(), overrides);
        config
    }

    #[test]
    fn default_config_yields_builtin_catalog() {
        let registry = initialize_registry(&NeodapiConfig::default()).unwrap();
        let names: Vec<&str> = registry.iter().map(|e| e.provider_name.as_str()).collect();
        assert_eq!(names, vec!["O3", "NEOLine", "Teemo"]);
    }

    #[test]
    fn override_patches_only_given_fields() {
        let config = config_with(
            "O3",
            ProviderOverride {
                module_name: Some("o3-dapi-neo".to_string()),
                ..Default::default()
            },
        );

        let registry = initialize_registry(&config).unwrap();
        let o3 = registry.get("O3").unwrap();
        assert_eq!(o3.global_binding, "neo3Dapi");
        assert_eq!(o3.module_name, "o3-dapi-neo");
        assert!(o3.is_enabled());
    }

    #[test]
    fn override_can_disable_builtin() {
        let config = config_with(
            "Teemo",
            ProviderOverride {
                enabled: Some(false),
                ..Default::default()
            },
        );

        let registry = initialize_registry(&config).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.enabled().count(), 2);
        assert_eq!(registry.get("Teemo").unwrap().status, ProviderStatus::Disabled);
    }

    #[test]
    fn new_provider_can_start_disabled() {
        let config = config_with(
            "OneGate",
            ProviderOverride {
                global_binding: Some("OneGate".to_string()),
                module_name: Some("onegate-dapi".to_string()),
                enabled: Some(false),
            },
        );

        let registry = initialize_registry(&config).unwrap();
        let onegate = registry.get("OneGate").unwrap();
        assert_eq!(onegate.status, ProviderStatus::Disabled);
        assert!(registry.enabled().all(|e| e.provider_name != "OneGate"));
    }

    #[test]
    fn new_provider_is_appended() {
        let config = config_with(
            "OneGate",
            ProviderOverride {
                global_binding: Some("OneGate".to_string()),
                module_name: Some("onegate-dapi".to_string()),
                enabled: None,
            },
        );

        let registry = initialize_registry(&config).unwrap();
        let last = registry.iter().last().unwrap();
        assert_eq!(last.provider_name, "OneGate");
        assert_eq!(last.module_name, "onegate-dapi");
    }

    #[test]
    fn new_provider_without_module_is_rejected() {
        let config = config_with(
            "OneGate",
            ProviderOverride {
                global_binding: Some("OneGate".to_string()),
                ..Default::default()
            },
        );

        let err = initialize_registry(&config).unwrap_err();
        assert!(matches!(err, DapiError::Config(msg) if msg.contains("OneGate")));
    }
}
