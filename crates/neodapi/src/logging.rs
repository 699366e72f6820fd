// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tracing subscriber setup for hosts that do not install their own.

use neodapi_config::NeodapiConfig;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered at `log_level` for neodapi crates.
///
/// `RUST_LOG` takes precedence when set. Returns `false` if a global
/// subscriber was already installed.
pub fn init_tracing(log_level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("neodapi={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .try_init()
        .is_ok()
}

/// Install the subscriber at the `[facade] log_level` from `config`.
pub fn init_tracing_from_config(config: &NeodapiConfig) -> bool {
    init_tracing(&config.facade.log_level)
}
