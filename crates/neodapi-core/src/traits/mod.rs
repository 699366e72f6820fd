// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability traits at the seams between the facade and its collaborators.
//!
//! Wallet adapters implement [`DapiInstance`] (and [`ProviderObject`] for the
//! shape they are discovered in); hosts implement [`Environment`] and
//! [`EventBus`].

pub mod bus;
pub mod dapi;
pub mod environment;
pub mod object;

pub use bus::EventBus;
pub use dapi::DapiInstance;
pub use environment::Environment;
pub use object::ProviderObject;
