// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rich diagnostics for configuration failures.
//!
//! Figment extraction errors are turned into [`ConfigError`] values that miette
//! can render with the offending TOML line highlighted and, for misspelled
//! keys, a "did you mean" hint.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity for a key to be offered as a correction.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration problem, ready for miette rendering.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// A key the model does not know about.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(neodapi::config::unknown_key),
        help("{}", unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        key: String,
        /// Closest valid key, if one is similar enough.
        suggestion: Option<String>,
        /// Comma-separated keys accepted at this position.
        valid_keys: String,
        #[label("not a recognized key")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A value of the wrong TOML type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(neodapi::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        detail: String,
        expected: String,
        #[label("wrong type here")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A required key is absent.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(neodapi::config::missing_key),
        help("add `{key} = <value>` to your neodapi.toml")
    )]
    MissingKey { key: String },

    /// A value that parsed but is not acceptable.
    #[error("validation error: {message}")]
    #[diagnostic(code(neodapi::config::validation))]
    Validation { message: String },

    #[error("configuration error: {0}")]
    #[diagnostic(code(neodapi::config::other))]
    Other(String),
}

fn unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid keys: {valid_keys}"),
        None => format!("valid keys: {valid_keys}"),
    }
}

/// Convert every error carried by a `figment::Error` into a [`ConfigError`].
///
/// `toml_sources` pairs file paths with their contents so unknown keys can be
/// pointed at in the original file.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| match &error.kind {
            Kind::UnknownField(field, expected) => {
                let suggestion = suggest_key(field, expected);
                let (span, src) = locate_key(&error, field, toml_sources);
                ConfigError::UnknownKey {
                    key: field.clone(),
                    suggestion,
                    valid_keys: expected.join(", "),
                    span,
                    src,
                }
            }
            Kind::MissingField(field) => ConfigError::MissingKey {
                key: field.clone().into_owned(),
            },
            Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                key: error.path.join("."),
                detail: format!("found {actual}, expected {expected}"),
                expected: expected.to_string(),
                span: None,
                src: None,
            },
            _ => ConfigError::Other(error.to_string()),
        })
        .collect()
}

/// Find the source and byte span an unknown key came from.
///
/// When the error metadata names a file, only that file is searched. Inline
/// sources carry no file, so every given source is searched instead.
fn locate_key(
    error: &figment::error::Error,
    field: &str,
    toml_sources: &[(String, String)],
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let file = match error.metadata.as_ref().and_then(|m| m.source.as_ref()) {
        Some(figment::Source::File(path)) => Some(path.display().to_string()),
        _ => None,
    };

    // figment appends the offending key itself to the error path.
    let table = match error.path.split_last() {
        Some((last, parent)) if last == field => parent,
        _ => &error.path[..],
    };

    toml_sources
        .iter()
        .filter(|(name, _)| file.as_ref().is_none_or(|f| f == name))
        .find_map(|(name, content)| {
            let offset = find_key_offset(content, table, field)?;
            Some((
                SourceSpan::new(offset.into(), field.len()),
                NamedSource::new(name, content.clone()),
            ))
        })
        .map_or((None, None), |(span, src)| (Some(span), Some(src)))
}

/// Byte offset of `field` in TOML `content`, searched after the table header
/// named by `path`.
///
/// `path = ["providers", "O3"]` looks under `[providers.O3]`; an empty path
/// searches from the top of the document.
pub fn find_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let search_start = if path.is_empty() {
        0
    } else {
        let header = format!("[{}]", path.join("."));
        content.find(&header)? + header.len()
    };

    let mut offset = search_start;
    for line in content[search_start..].split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(field) {
            if rest.starts_with([' ', '\t', '=']) {
                return Some(offset + (line.len() - trimmed.len()));
            }
        }
        offset += line.len();
    }

    None
}

/// Best Jaro-Winkler match for `unknown` among `valid_keys`, if any clears
/// the threshold.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|&key| (strsim::jaro_winkler(unknown, key), key))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, key)| key.to_string())
}

/// Render diagnostics to stderr using miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        match handler.render_report(&mut buf, error as &dyn Diagnostic) {
            Ok(()) => eprint!("{buf}"),
            Err(_) => eprintln!("Error: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_chian_for_chain() {
        let valid = &["log_level", "chain"];
        assert_eq!(suggest_key("chian", valid), Some("chain".to_string()));
    }

    #[test]
    fn suggest_modul_name_for_module_name() {
        let valid = &["global_binding", "module_name", "enabled"];
        assert_eq!(
            suggest_key("modul_name", valid),
            Some("module_name".to_string())
        );
    }

    #[test]
    fn no_suggestion_for_distant_typo() {
        let valid = &["log_level", "chain"];
        assert_eq!(suggest_key("zzzzzz", valid), None);
    }

    #[test]
    fn find_key_offset_in_section() {
        let content = "[facade]\nchian = \"NEO\"\n";
        let path = vec!["facade".to_string()];
        let o = find_key_offset(content, &path, "chian").unwrap();
        assert_eq!(&content[o..o + 5], "chian");
    }

    #[test]
    fn find_key_offset_in_nested_table() {
        let content = "[facade]\nchain = \"NEO\"\n\n[providers.O3]\n  modul_name = \"x\"\n";
        let path = vec!["providers".to_string(), "O3".to_string()];
        let o = find_key_offset(content, &path, "modul_name").unwrap();
        assert_eq!(&content[o..o + 10], "modul_name");
    }

    #[test]
    fn find_key_offset_missing_section() {
        let content = "[facade]\nchain = \"NEO\"\n";
        let path = vec!["providers".to_string(), "O3".to_string()];
        assert!(find_key_offset(content, &path, "chain").is_none());
    }

    #[test]
    fn unknown_key_help_lists_suggestion_first() {
        assert_eq!(
            unknown_key_help(Some("chain"), "log_level, chain"),
            "did you mean `chain`? Valid keys: log_level, chain"
        );
        assert_eq!(unknown_key_help(None, "chain"), "valid keys: chain");
    }
}
