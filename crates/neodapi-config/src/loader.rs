// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./neodapi.toml` > `~/.config/neodapi/neodapi.toml` > `/etc/neodapi/neodapi.toml`
//! with environment variable overrides via `NEODAPI_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::NeodapiConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/neodapi/neodapi.toml` (system-wide)
/// 3. `~/.config/neodapi/neodapi.toml` (user XDG config)
/// 4. `./neodapi.toml` (local directory)
/// 5. `NEODAPI_*` environment variables
pub fn load_config() -> Result<NeodapiConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<NeodapiConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NeodapiConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<NeodapiConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NeodapiConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(NeodapiConfig::default()))
        .merge(Toml::file("/etc/neodapi/neodapi.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("neodapi/neodapi.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("neodapi.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `NEODAPI_FACADE_LOG_LEVEL` must map to `facade.log_level`,
/// not `facade.log.level`.
///
/// Only `[facade]` keys can be overridden from the environment. Provider
/// names are case-sensitive (`NEOLine`) and cannot survive an environment
/// variable name, so `NEODAPI_PROVIDERS_*` variables are ignored; provider
/// overrides belong in a TOML file.
fn env_provider() -> Env {
    Env::prefixed("NEODAPI_")
        .filter(|key| is_facade_key(key.as_str()))
        .map(|key| {
            // figment lowercases after mapping, so match case-insensitively here.
            // Example: NEODAPI_FACADE_LOG_LEVEL -> "facade.log_level"
            let key = key.as_str().to_ascii_lowercase();
            key.replacen("facade_", "facade.", 1).into()
        })
}

fn is_facade_key(key: &str) -> bool {
    key.to_ascii_lowercase().starts_with("facade_")
}
