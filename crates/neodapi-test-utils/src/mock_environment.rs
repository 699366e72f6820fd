// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock host environment and shared event bus.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use neodapi_core::{DiscoverySource, Environment, EventBus, EventListener, ProviderObject};

use crate::lock;

/// In-memory event bus with subscription inspection.
#[derive(Default)]
pub struct MockEventBus {
    subscriptions: Mutex<Vec<(String, EventListener)>>,
}

impl MockEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names with at least one subscription, in subscription order.
    pub fn subscribed_names(&self) -> Vec<String> {
        lock(&self.subscriptions)
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Deliver `payload` to every subscriber of `name`; returns the count.
    pub fn emit(&self, name: &str, payload: &serde_json::Value) -> usize {
        let targets: Vec<EventListener> = lock(&self.subscriptions)
            .iter()
            .filter(|(subscribed, _)| subscribed == name)
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in &targets {
            listener.call(payload);
        }
        targets.len()
    }
}

impl EventBus for MockEventBus {
    fn subscribe(&self, name: &str, listener: EventListener) {
        lock(&self.subscriptions).push((name.to_string(), listener));
    }

    fn unsubscribe(&self, name: &str, listener: Option<&EventListener>) {
        lock(&self.subscriptions).retain(|(subscribed, registered)| {
            subscribed != name || listener.is_some_and(|l| l != registered)
        });
    }
}

/// A host environment assembled from explicit global bindings and modules.
///
/// Every lookup is logged so tests can assert which bindings discovery
/// touched.
pub struct MockEnvironment {
    globals: HashMap<String, Arc<dyn ProviderObject>>,
    modules: HashMap<String, Arc<dyn ProviderObject>>,
    bus: Arc<MockEventBus>,
    lookups: Mutex<Vec<(DiscoverySource, String)>>,
}

impl MockEnvironment {
    /// An environment with no bindings and no modules.
    pub fn new() -> Self {
        Self {
            globals: HashMap::new(),
            modules: HashMap::new(),
            bus: Arc::new(MockEventBus::new()),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Bind `object` on the global environment object under `name`.
    pub fn with_global(mut self, name: &str, object: Arc<dyn ProviderObject>) -> Self {
        self.globals.insert(name.to_string(), object);
        self
    }

    /// Make `object` importable as module `name`.
    pub fn with_module(mut self, name: &str, object: Arc<dyn ProviderObject>) -> Self {
        self.modules.insert(name.to_string(), object);
        self
    }

    /// The shared bus returned by [`Environment::event_bus`].
    pub fn bus(&self) -> &Arc<MockEventBus> {
        &self.bus
    }

    /// Every lookup made so far, in order.
    pub fn lookups(&self) -> Vec<(DiscoverySource, String)> {
        lock(&self.lookups).clone()
    }

    /// Module names discovery tried to resolve.
    pub fn module_lookups(&self) -> Vec<String> {
        self.lookups_from(DiscoverySource::Module)
    }

    /// Global binding names discovery tried to read.
    pub fn global_lookups(&self) -> Vec<String> {
        self.lookups_from(DiscoverySource::Global)
    }

    fn lookups_from(&self, source: DiscoverySource) -> Vec<String> {
        lock(&self.lookups)
            .iter()
            .filter(|(kind, _)| *kind == source)
            .map(|(_, name)| name.clone())
            .collect()
    }
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for MockEnvironment {
    fn global_binding(&self, name: &str) -> Option<Arc<dyn ProviderObject>> {
        lock(&self.lookups).push((DiscoverySource::Global, name.to_string()));
        self.globals.get(name).cloned()
    }

    fn resolve_module(&self, name: &str) -> Option<Arc<dyn ProviderObject>> {
        lock(&self.lookups).push((DiscoverySource::Module, name.to_string()));
        self.modules.get(name).cloned()
    }

    fn event_bus(&self) -> Arc<dyn EventBus> {
        self.bus.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::mock_object::OpaqueObject;

    #[test]
    fn lookups_are_logged_per_source() {
        let env = MockEnvironment::new()
            .with_global("neo3Dapi", Arc::new(OpaqueObject))
            .with_module("teemo-dapi", Arc::new(OpaqueObject));

        assert!(env.global_binding("neo3Dapi").is_some());
        assert!(env.global_binding("NEOLineN3").is_none());
        assert!(env.resolve_module("teemo-dapi").is_some());

        assert_eq!(env.global_lookups(), vec!["neo3Dapi", "NEOLineN3"]);
        assert_eq!(env.module_lookups(), vec!["teemo-dapi"]);
    }

    #[test]
    fn bus_delivers_until_unsubscribed() {
        let env = MockEnvironment::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let listener = {
            let hits = hits.clone();
            EventListener::new(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        env.event_bus().subscribe("Teemo.NEO.READY", listener.clone());
        assert_eq!(env.bus().emit("Teemo.NEO.READY", &serde_json::Value::Null), 1);

        env.event_bus().unsubscribe("Teemo.NEO.READY", Some(&listener));
        assert_eq!(env.bus().emit("Teemo.NEO.READY", &serde_json::Value::Null), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(env.bus().subscribed_names().is_empty());
    }
}
