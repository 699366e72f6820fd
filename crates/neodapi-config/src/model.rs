// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the neodapi facade.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level neodapi configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NeodapiConfig {
    /// Facade behavior settings.
    #[serde(default)]
    pub facade: FacadeConfig,

    /// Per-provider overrides of the built-in catalog, keyed by provider name.
    ///
    /// A name that is not in the catalog adds a new provider family and must
    /// then set both `global_binding` and `module_name`.
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderOverride>,
}

/// Facade behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FacadeConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Chain namespace used by namespaced providers, both for locating the
    /// instance and for naming events on the shared bus.
    #[serde(default = "default_chain")]
    pub chain: String,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            chain: default_chain(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_chain() -> String {
    "NEO".to_string()
}

/// Override of one provider registry entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderOverride {
    /// Global binding the provider injects itself under.
    #[serde(default)]
    pub global_binding: Option<String>,

    /// Importable module name of the provider.
    #[serde(default)]
    pub module_name: Option<String>,

    /// Whether discovery looks up this provider. Unset keeps the catalog default.
    #[serde(default)]
    pub enabled: Option<bool>,
}
