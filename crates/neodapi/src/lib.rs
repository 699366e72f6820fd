// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A single dAPI surface over the NEO wallet providers found in the host.
//!
//! # Usage
//!
//! ```ignore
//! let dapi = UnifiedDapi::from_config(&config, env)?;
//! let candidates = dapi.discover();
//! if let Some(wallet) = candidates.into_iter().next() {
//!     dapi.select(wallet)?;
//!     let account = dapi.get_account()?.await?;
//! }
//! ```

pub mod bootstrap;
pub mod construction;
pub mod discovery;
pub mod facade;
pub mod logging;
pub mod naming;

pub use bootstrap::initialize_registry;
pub use facade::{DEFAULT_CHAIN, UnifiedDapi};
pub use logging::{init_tracing, init_tracing_from_config};

pub use neodapi_core::{
    DapiCall, DapiError, DapiInstance, DiscoverySource, Environment, EventBus, EventKind,
    EventListener, ProviderDescriptor, ProviderError, ProviderErrorKind, ProviderFamily,
    ProviderObject, payload,
};
pub use neodapi_registry::{ProviderRegistry, ProviderRegistryEntry, ProviderStatus};
