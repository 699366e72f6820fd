// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by discovery, selection, and dispatch.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::ProviderError;
use crate::traits::object::ProviderObject;

/// A pending call forwarded to a wallet provider.
///
/// The future owns everything it needs, so it stays valid after the facade
/// switches to another provider.
pub type DapiCall<T> = BoxFuture<'static, Result<T, ProviderError>>;

/// One wallet provider implementation, identified by its registry name.
///
/// Construction and event-naming rules are keyed by this value. Names that do
/// not match a known family parse into [`ProviderFamily::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
pub enum ProviderFamily {
    /// Exposes a ready-to-use dAPI object.
    #[strum(serialize = "O3")]
    O3,
    /// Exposes a constructor that yields the dAPI object.
    #[strum(serialize = "NEOLine")]
    NeoLine,
    /// Exposes per-chain namespaces and emits events on the shared bus.
    #[strum(serialize = "Teemo")]
    Teemo,
    #[strum(default)]
    Other(String),
}

impl ProviderFamily {
    /// Resolve the family for a registry name.
    pub fn from_name(name: &str) -> Self {
        name.parse()
            .unwrap_or_else(|_| ProviderFamily::Other(name.to_string()))
    }

    /// The registry name of this family.
    pub fn as_str(&self) -> &str {
        match self {
            ProviderFamily::O3 => "O3",
            ProviderFamily::NeoLine => "NEOLine",
            ProviderFamily::Teemo => "Teemo",
            ProviderFamily::Other(name) => name,
        }
    }
}

impl fmt::Display for ProviderFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain events normalized across all provider families.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Ready,
    AccountChanged,
    NetworkChanged,
    Connected,
    Disconnected,
    BlockHeightChanged,
    TransactionConfirmed,
}

/// Where discovery found a provider object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DiscoverySource {
    /// A binding on the global environment object.
    Global,
    /// An importable module.
    Module,
}

/// A discovered wallet provider, ready to be handed to `select`.
pub struct ProviderDescriptor {
    name: String,
    object: Arc<dyn ProviderObject>,
    source: DiscoverySource,
}

impl ProviderDescriptor {
    pub fn new(
        name: impl Into<String>,
        object: Arc<dyn ProviderObject>,
        source: DiscoverySource,
    ) -> Self {
        Self {
            name: name.into(),
            object,
            source,
        }
    }

    /// Registry name of the provider.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> ProviderFamily {
        ProviderFamily::from_name(&self.name)
    }

    pub fn source(&self) -> DiscoverySource {
        self.source
    }

    pub fn into_parts(self) -> (String, Arc<dyn ProviderObject>) {
        (self.name, self.object)
    }
}

impl fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("name", &self.name)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
