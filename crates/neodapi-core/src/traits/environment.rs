// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only view of the host runtime that discovery and event routing use.

use std::sync::Arc;

use crate::traits::bus::EventBus;
use crate::traits::object::ProviderObject;

/// The host environment wallet providers inject themselves into.
///
/// Lookups report absence as `None`. A module that cannot be resolved is an
/// ordinary outcome, not an error.
pub trait Environment: Send + Sync + 'static {
    /// Looks up a binding on the global environment object.
    fn global_binding(&self, name: &str) -> Option<Arc<dyn ProviderObject>>;

    /// Resolves an importable module by name.
    fn resolve_module(&self, name: &str) -> Option<Arc<dyn ProviderObject>>;

    /// The shared event bus of this environment.
    fn event_bus(&self) -> Arc<dyn EventBus>;
}
