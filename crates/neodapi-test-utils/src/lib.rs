// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for neodapi integration tests.
//!
//! Provides mock wallets and host environments for fast, deterministic tests
//! without a browser or installed wallet extensions.
//!
//! # Components
//!
//! - [`MockDapi`] - Mock dAPI instance with canned responses and call capture
//! - [`MockFactory`] / [`MockNamespace`] - Wallet objects needing construction
//! - [`MockEnvironment`] - Host environment with globals, modules and a bus
//! - [`TestHarness`] - Environment preloaded with the built-in wallets

use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod harness;
pub mod mock_dapi;
pub mod mock_environment;
pub mod mock_object;

pub use harness::{Exposure, TestHarness};
pub use mock_dapi::{MockDapi, RecordedCall};
pub use mock_environment::{MockEnvironment, MockEventBus};
pub use mock_object::{MockFactory, MockNamespace, OpaqueObject};

/// Lock a mock's state, ignoring poison left by a panicking test thread.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
