// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-wide event bus used by providers that do not emit events on
//! their own instance.

use crate::events::EventListener;

/// A shared, name-keyed event bus (the host window's event target).
pub trait EventBus: Send + Sync + 'static {
    /// Registers `listener` for events published under `name`.
    fn subscribe(&self, name: &str, listener: EventListener);

    /// Removes `listener`, or every listener for `name` when `None`.
    fn unsubscribe(&self, name: &str, listener: Option<&EventListener>);
}
