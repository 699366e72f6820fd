// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the neodapi facade.
//!
//! Two families of failure are kept apart: [`DapiError`] is raised by the
//! facade itself (usage and setup faults), while [`ProviderError`] is whatever
//! the wallet provider rejected with. The facade never converts one into the
//! other.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

/// Faults raised by the facade itself.
#[derive(Debug, Error)]
pub enum DapiError {
    /// An operation or subscription was attempted before any provider was selected.
    #[error("no wallet provider selected; call select() with a discovered provider first")]
    NoProviderSelected,

    /// The discovered object does not expose the entry point its family requires.
    #[error("provider `{provider}` does not expose {entry_point}")]
    UnsupportedShape { provider: String, entry_point: String },

    /// Configuration errors (invalid registry overrides, missing names).
    #[error("configuration error: {0}")]
    Config(String),
}

/// Error categories defined by the NEO dAPI standard.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderErrorKind {
    NoProvider,
    ConnectionDenied,
    RpcError,
    MalformedInput,
    Canceled,
    InsufficientFunds,
    /// Any category a provider reports that the standard does not name.
    #[serde(other, rename = "UNKNOWN_ERROR")]
    #[strum(serialize = "UNKNOWN_ERROR")]
    Unknown,
}

/// A rejection reported by a wallet provider.
///
/// Mirrors the `{ type, description, data }` record providers reject with.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{kind}{}", format_description(.description))]
pub struct ProviderError {
    #[serde(rename = "type")]
    pub kind: ProviderErrorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

fn format_description(description: &Option<String>) -> String {
    description
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind) -> Self {
        Self {
            kind,
            description: None,
            data: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_display_includes_description() {
        let err = ProviderError::new(ProviderErrorKind::Canceled).with_description("user closed popup");
        assert_eq!(err.to_string(), "CANCELED: user closed popup");

        let bare = ProviderError::new(ProviderErrorKind::RpcError);
        assert_eq!(bare.to_string(), "RPC_ERROR");
    }

    #[test]
    fn provider_error_parses_wire_record() {
        let json = r#"{"type":"INSUFFICIENT_FUNDS","description":"not enough GAS","data":{"need":"1"}}"#;
        let err: ProviderError = serde_json::from_str(json).unwrap();
        assert_eq!(err.kind, ProviderErrorKind::InsufficientFunds);
        assert_eq!(err.description.as_deref(), Some("not enough GAS"));
        assert_eq!(err.data, Some(serde_json::json!({"need": "1"})));
    }

    #[test]
    fn unrecognized_kind_maps_to_unknown() {
        let err: ProviderError = serde_json::from_str(r#"{"type":"CHAIN_NOT_MATCH"}"#).unwrap();
        assert_eq!(err.kind, ProviderErrorKind::Unknown);
    }

    #[test]
    fn no_provider_selected_message_is_actionable() {
        let msg = DapiError::NoProviderSelected.to_string();
        assert!(msg.contains("select()"));
    }
}
