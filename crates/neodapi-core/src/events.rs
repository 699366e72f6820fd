// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Event listener handles.

use std::fmt;
use std::sync::Arc;

/// A callback registered for a provider event.
///
/// Listeners compare by identity: two handles are equal only when they are
/// clones of the same registration, which is what removal matches on.
#[derive(Clone)]
pub struct EventListener {
    callback: Arc<dyn Fn(&serde_json::Value) + Send + Sync>,
}

impl EventListener {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&serde_json::Value) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Invoke the callback with an event payload.
    pub fn call(&self, payload: &serde_json::Value) {
        (self.callback)(payload)
    }
}

impl PartialEq for EventListener {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }
}

impl Eq for EventListener {}

impl fmt::Debug for EventListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListener")
            .field("callback", &Arc::as_ptr(&self.callback))
            .finish()
    }
}
