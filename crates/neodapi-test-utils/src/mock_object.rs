// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider objects that need construction before they yield a dAPI instance.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use neodapi_core::{DapiInstance, ProviderObject};

use crate::lock;
use crate::mock_dapi::MockDapi;

/// A provider object exposing an initializer, like an NEOLine binding.
pub struct MockFactory {
    instance: Arc<MockDapi>,
    initializations: AtomicUsize,
}

impl MockFactory {
    /// A factory whose initializer yields `instance`.
    pub fn new(instance: Arc<MockDapi>) -> Self {
        Self {
            instance,
            initializations: AtomicUsize::new(0),
        }
    }

    /// The instance the initializer hands out.
    pub fn instance(&self) -> &Arc<MockDapi> {
        &self.instance
    }

    /// How many times the initializer has run.
    pub fn initializations(&self) -> usize {
        self.initializations.load(Ordering::SeqCst)
    }
}

impl ProviderObject for MockFactory {
    fn initialize(&self) -> Option<Arc<dyn DapiInstance>> {
        self.initializations.fetch_add(1, Ordering::SeqCst);
        Some(self.instance.clone())
    }
}

/// A provider object holding one dAPI instance per chain, like a Teemo binding.
#[derive(Default)]
pub struct MockNamespace {
    chains: HashMap<String, Arc<MockDapi>>,
    requested: std::sync::Mutex<Vec<String>>,
}

impl MockNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expose `instance` under the `chain` namespace.
    pub fn with_chain(mut self, chain: impl Into<String>, instance: Arc<MockDapi>) -> Self {
        self.chains.insert(chain.into(), instance);
        self
    }

    pub fn chain(&self, chain: &str) -> Option<&Arc<MockDapi>> {
        self.chains.get(chain)
    }

    /// Chain names looked up so far, in order.
    pub fn requested(&self) -> Vec<String> {
        lock(&self.requested).clone()
    }
}

impl ProviderObject for MockNamespace {
    fn namespace(&self, chain: &str) -> Option<Arc<dyn DapiInstance>> {
        lock(&self.requested).push(chain.to_string());
        let instance = self.chains.get(chain)?;
        Some(instance.clone())
    }
}

/// A provider object with no usable entry point.
pub struct OpaqueObject;

impl ProviderObject for OpaqueObject {}
