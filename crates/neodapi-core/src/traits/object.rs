// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The raw object discovery finds in the environment.

use std::sync::Arc;

use crate::traits::dapi::DapiInstance;

/// A provider object as found on a global binding or an importable module.
///
/// Provider families reach their callable instance through different entry
/// points. Each entry point is optional; the selecting facade decides which one
/// to use from the provider's family and reports an error when the object does
/// not offer it.
pub trait ProviderObject: Send + Sync + 'static {
    /// The object itself, when it already is a dAPI instance.
    fn into_dapi(self: Arc<Self>) -> Option<Arc<dyn DapiInstance>> {
        None
    }

    /// Runs the object's initializer and returns the instance it constructs.
    fn initialize(&self) -> Option<Arc<dyn DapiInstance>> {
        None
    }

    /// The instance published under a chain namespace (for example `NEO`).
    fn namespace(&self, chain: &str) -> Option<Arc<dyn DapiInstance>> {
        let _ = chain;
        None
    }
}
