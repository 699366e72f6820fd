// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the neodapi configuration system.

use neodapi_config::diagnostic::ConfigError;
use neodapi_config::model::{NeodapiConfig, ProviderOverride};
use neodapi_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
[facade]
log_level = "debug"
chain = "NEO3"

[providers.O3]
global_binding = "o3dapi"
module_name = "o3-dapi-neo"
enabled = false

[providers.OneGate]
global_binding = "OneGate"
module_name = "onegate-dapi"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.facade.log_level, "debug");
    assert_eq!(config.facade.chain, "NEO3");
    assert_eq!(
        config.providers["O3"],
        ProviderOverride {
            global_binding: Some("o3dapi".to_string()),
            module_name: Some("o3-dapi-neo".to_string()),
            enabled: Some(false),
        }
    );
    assert_eq!(
        config.providers["OneGate"].module_name.as_deref(),
        Some("onegate-dapi")
    );
}

/// Empty TOML falls back to defaults.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.facade.log_level, "info");
    assert_eq!(config.facade.chain, "NEO");
    assert!(config.providers.is_empty());
}

/// A partial override keeps the unset fields empty so the catalog fills them.
#[test]
fn partial_provider_override() {
    let toml = r#"
[providers.Teemo]
enabled = false
"#;

    let config = load_config_from_str(toml).expect("partial override should parse");
    let teemo = &config.providers["Teemo"];
    assert_eq!(teemo.enabled, Some(false));
    assert!(teemo.global_binding.is_none());
    assert!(teemo.module_name.is_none());
}

/// Env-style dotted keys override TOML values.
#[test]
fn dotted_override_replaces_chain() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: NeodapiConfig = Figment::new()
        .merge(Serialized::defaults(NeodapiConfig::default()))
        .merge(Toml::string("[facade]\nchain = \"from-toml\"\n"))
        .merge(("facade.chain", "from-env"))
        .extract()
        .expect("should merge override");

    assert_eq!(config.facade.chain, "from-env");
}

/// Missing config files are silently skipped.
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: NeodapiConfig = Figment::new()
        .merge(Serialized::defaults(NeodapiConfig::default()))
        .merge(Toml::file("/nonexistent/path/neodapi.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    assert_eq!(config.facade.chain, "NEO");
}

/// Unknown field in [facade] is rejected.
#[test]
fn unknown_field_in_facade_produces_error() {
    let toml = r#"
[facade]
chian = "NEO"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("chian"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[wallets]
default = "O3"
"#;

    let err = load_config_from_str(toml).expect_err("unknown top-level section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("wallets"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Misspelled key in [facade] yields an UnknownKey diagnostic with a suggestion.
#[test]
fn diagnostic_chian_suggests_chain() {
    let toml = r#"
[facade]
chian = "NEO"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    let has_unknown_key = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "chian"
                && suggestion.as_deref() == Some("chain")
                && valid_keys.contains("log_level")
        })
    });
    assert!(
        has_unknown_key,
        "should have UnknownKey error for 'chian' with suggestion 'chain', got: {errors:?}"
    );
}

/// Misspelled key inside a provider table is reported with a suggestion too.
#[test]
fn diagnostic_provider_typo_suggests_module_name() {
    let toml = r#"
[providers.NEOLine]
modul_name = "neoline"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { key, suggestion, .. }
            if key == "modul_name" && suggestion.as_deref() == Some("module_name")
    )));
}

/// Invalid type (table where string expected) produces a clear message.
#[test]
fn diagnostic_invalid_type_message() {
    let toml = r#"
[providers.O3]
enabled = "yes"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("enabled"),
        "error should mention type mismatch, got: {err_str}"
    );
}

/// ConfigError renders through miette with its help text.
#[test]
fn config_error_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "chian".to_string(),
        suggestion: Some("chain".to_string()),
        valid_keys: "log_level, chain".to_string(),
        span: None,
        src: None,
    };

    assert!(error.code().is_some(), "should have diagnostic code");
    let help = error.help().expect("should have help text").to_string();
    assert!(help.contains("did you mean `chain`"), "got: {help}");

    let mut buf = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(buf.contains("chian"), "rendered report should mention the key");
}

/// load_and_validate_str with valid TOML returns Ok config.
#[test]
fn load_and_validate_valid_toml() {
    let config = load_and_validate_str("[facade]\nlog_level = \"warn\"\n")
        .expect("valid TOML should validate");
    assert_eq!(config.facade.log_level, "warn");
}

/// Validation errors surface through load_and_validate_str.
#[test]
fn validation_catches_blank_module_name() {
    let toml = r#"
[providers.O3]
module_name = ""
"#;

    let errors = load_and_validate_str(toml).expect_err("blank module name should fail");
    let has_validation_error = errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("providers.O3.module_name"))
    });
    assert!(has_validation_error, "got: {errors:?}");
}

/// `NEODAPI_FACADE_*` variables override the file; provider variables are
/// ignored instead of failing the whole load.
#[test]
fn env_overrides_facade_and_ignores_provider_keys() {
    use neodapi_config::load_config_from_path;

    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "neodapi.toml",
            "[facade]\nchain = \"from-file\"\n\n[providers.O3]\nmodule_name = \"o3-dapi-neo\"\n",
        )?;
        jail.set_env("NEODAPI_FACADE_CHAIN", "NEO2");
        jail.set_env("NEODAPI_FACADE_LOG_LEVEL", "debug");
        jail.set_env("NEODAPI_PROVIDERS_O3_ENABLED", "false");

        let config = load_config_from_path(std::path::Path::new("neodapi.toml"))?;
        assert_eq!(config.facade.chain, "NEO2");
        assert_eq!(config.facade.log_level, "debug");
        assert_eq!(
            config.providers["O3"],
            ProviderOverride {
                module_name: Some("o3-dapi-neo".to_string()),
                ..Default::default()
            }
        );
        Ok(())
    });
}

/// Unknown keys in inline TOML are located in the inline source.
#[test]
fn inline_unknown_key_carries_span() {
    let errors = load_and_validate_str("[facade]\nlog_level = \"info\"\nchian = \"NEO\"\n")
        .expect_err("should produce errors");

    let located = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, span: Some(span), src: Some(_), .. }
            if key == "chian" && span.offset() == 28 && span.len() == 5)
    });
    assert!(located, "inline unknown key should carry a span, got: {errors:?}");
}
