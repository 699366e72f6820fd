// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks the constraints serde attributes cannot express: known log levels,
//! a usable chain namespace, and non-blank provider names.

use crate::diagnostic::ConfigError;
use crate::model::NeodapiConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &NeodapiConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.facade.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "facade.log_level `{}` is not one of {}",
                config.facade.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    // The chain is a path segment of bus event names (`Teemo.<chain>.READY`).
    let chain = &config.facade.chain;
    if chain.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "facade.chain must not be empty".to_string(),
        });
    } else if chain.contains(['.', ' ', '\t']) {
        errors.push(ConfigError::Validation {
            message: format!("facade.chain `{chain}` must not contain dots or whitespace"),
        });
    }

    for (name, entry) in &config.providers {
        if name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "provider names must not be empty".to_string(),
            });
        }
        if entry.global_binding.as_deref().is_some_and(|b| b.trim().is_empty()) {
            errors.push(ConfigError::Validation {
                message: format!("providers.{name}.global_binding must not be blank"),
            });
        }
        if entry.module_name.as_deref().is_some_and(|m| m.trim().is_empty()) {
            errors.push(ConfigError::Validation {
                message: format!("providers.{name}.module_name must not be blank"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::ProviderOverride;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config(&NeodapiConfig::default()).is_ok());
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = NeodapiConfig::default();
        config.facade.log_level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut config = NeodapiConfig::default();
        config.facade.log_level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("facade.log_level"));
    }

    #[test]
    fn rejects_dotted_chain() {
        let mut config = NeodapiConfig::default();
        config.facade.chain = "NEO.N3".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].to_string().contains("must not contain dots"));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = NeodapiConfig::default();
        config.facade.log_level = "loud".to_string();
        config.facade.chain = String::new();
        config.providers.insert(
            "Custom".to_string(),
            ProviderOverride {
                global_binding: Some(" ".to_string()),
                module_name: Some(String::new()),
                enabled: None,
            },
        );

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
