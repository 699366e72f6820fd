// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider registry and built-in catalog.
//!
//! The registry is static configuration: for every provider family it names
//! the global binding and the importable module the provider may appear under.
//! Discovery reads it; nothing mutates it after startup.

pub mod catalog;
pub mod registry;

pub use catalog::{builtin_catalog, builtin_registry};
pub use registry::{ProviderRegistry, ProviderRegistryEntry, ProviderStatus};
