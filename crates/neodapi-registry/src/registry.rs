// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of known wallet provider families.
//!
//! The `ProviderRegistry` stores one `ProviderRegistryEntry` per provider name,
//! in registration order. Discovery walks the enabled entries in that order, so
//! iteration is deterministic for a fixed registry.

use neodapi_core::{DapiError, ProviderFamily};

/// Status of a provider in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderStatus {
    /// Provider is looked up during discovery.
    Enabled,
    /// Provider is known but skipped by discovery.
    Disabled,
}

impl std::fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderStatus::Enabled => write!(f, "enabled"),
            ProviderStatus::Disabled => write!(f, "disabled"),
        }
    }
}

/// Where a provider family can be found in the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRegistryEntry {
    /// Registry name, also the family key (e.g. "O3", "NEOLine").
    pub provider_name: String,
    /// Name of the binding on the global environment object.
    pub global_binding: String,
    /// Name of the importable module.
    pub module_name: String,
    pub status: ProviderStatus,
}

impl ProviderRegistryEntry {
    pub fn new(
        provider_name: impl Into<String>,
        global_binding: impl Into<String>,
        module_name: impl Into<String>,
    ) -> Self {
        Self {
            provider_name: provider_name.into(),
            global_binding: global_binding.into(),
            module_name: module_name.into(),
            status: ProviderStatus::Enabled,
        }
    }

    pub fn with_status(mut self, status: ProviderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn family(&self) -> ProviderFamily {
        ProviderFamily::from_name(&self.provider_name)
    }

    pub fn is_enabled(&self) -> bool {
        self.status == ProviderStatus::Enabled
    }
}

/// Ordered registry of provider entries keyed by provider name.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    entries: Vec<ProviderRegistryEntry>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from entries, in the given order.
    pub fn from_entries(entries: impl IntoIterator<Item = ProviderRegistryEntry>) -> Self {
        let mut registry = Self::new();
        for entry in entries {
            registry.register(entry);
        }
        registry
    }

    /// Register an entry.
    ///
    /// An entry with the same name is replaced in place and keeps its
    /// position; otherwise the entry is appended.
    pub fn register(&mut self, entry: ProviderRegistryEntry) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.provider_name == entry.provider_name)
        {
            Some(existing) => {
                tracing::debug!(provider = %entry.provider_name, "replacing registry entry");
                *existing = entry;
            }
            None => self.entries.push(entry),
        }
    }

    /// Get an entry by provider name.
    pub fn get(&self, name: &str) -> Option<&ProviderRegistryEntry> {
        self.entries.iter().find(|e| e.provider_name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ProviderRegistryEntry> {
        self.entries.iter_mut().find(|e| e.provider_name == name)
    }

    /// All entries, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &ProviderRegistryEntry> {
        self.entries.iter()
    }

    /// Enabled entries, in registry order.
    pub fn enabled(&self) -> impl Iterator<Item = &ProviderRegistryEntry> {
        self.entries.iter().filter(|e| e.is_enabled())
    }

    /// Toggle a provider's status.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<(), DapiError> {
        let entry = self
            .get_mut(name)
            .ok_or_else(|| DapiError::Config(format!("unknown provider `{name}`")))?;
        entry.status = if enabled {
            ProviderStatus::Enabled
        } else {
            ProviderStatus::Disabled
        };
        Ok(())
    }

    /// Returns the number of registered providers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no providers are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
