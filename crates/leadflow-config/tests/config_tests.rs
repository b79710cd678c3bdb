// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Leadflow configuration system.

use leadflow_config::diagnostic::{suggest_key, ConfigError};
use leadflow_config::model::LeadflowConfig;
use leadflow_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_leadflow_config() {
    let toml = r#"
[widget]
name = "studio-bot"
log_level = "debug"
greeting_suggestions = 6

[typing]
delay_ms = 800
progress_step = 20

[links]
booking_url = "https://calendly.com/studio/intro"
whatsapp_url = "https://wa.me/15550100"

[analytics]
enabled = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.widget.name, "studio-bot");
    assert_eq!(config.widget.log_level, "debug");
    assert_eq!(config.widget.greeting_suggestions, 6);
    assert_eq!(config.typing.delay_ms, 800);
    assert_eq!(config.typing.progress_step, 20);
    assert_eq!(config.links.booking_url, "https://calendly.com/studio/intro");
    assert_eq!(config.links.whatsapp_url, "https://wa.me/15550100");
    assert!(!config.analytics.enabled);
}

/// Unknown field in [typing] section produces an UnknownField error.
#[test]
fn unknown_field_in_typing_produces_error() {
    let toml = r#"
[typing]
delay_m = 500
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    // Figment wraps serde's deny_unknown_fields error
    assert!(
        err_str.contains("unknown field") || err_str.contains("delay_m"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let toml = "";
    let config = load_config_from_str(toml).expect("empty TOML should use defaults");

    assert_eq!(config.widget.name, "leadflow");
    assert_eq!(config.widget.log_level, "info");
    assert_eq!(config.widget.greeting_suggestions, 4);
    assert_eq!(config.typing.delay_ms, 1500);
    assert_eq!(config.typing.progress_step, 10);
    assert!(config.links.booking_url.starts_with("https://calendly.com/"));
    assert!(config.links.whatsapp_url.starts_with("https://wa.me/"));
    assert!(config.analytics.enabled);
}

/// A dotted override (how LEADFLOW_TYPING_DELAY_MS lands after env mapping)
/// takes precedence over the TOML value.
#[test]
fn env_style_override_wins_over_toml() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let toml_content = r#"
[typing]
delay_ms = 1500
"#;

    let config: LeadflowConfig = Figment::new()
        .merge(Serialized::defaults(LeadflowConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("typing.delay_ms", 250u64))
        .extract()
        .expect("should merge env override");

    assert_eq!(config.typing.delay_ms, 250);
}

/// Underscore-containing keys map via dot notation (typing.delay_ms, not
/// typing.delay.ms).
#[test]
fn env_var_maps_underscore_keys_correctly() {
    use figment::{providers::Serialized, Figment};

    let config: LeadflowConfig = Figment::new()
        .merge(Serialized::defaults(LeadflowConfig::default()))
        .merge(("links.booking_url", "https://example.com/book"))
        .extract()
        .expect("should set booking_url via dot notation");

    assert_eq!(config.links.booking_url, "https://example.com/book");
}

/// Missing config files are silently skipped (Figment's Toml::file() behavior).
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let config: LeadflowConfig = Figment::new()
        .merge(Serialized::defaults(LeadflowConfig::default()))
        .merge(Toml::file("/nonexistent/path/leadflow.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    // Should just get defaults
    assert_eq!(config.widget.name, "leadflow");
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[chatbot]
name = "x"
"#;

    let err =
        load_config_from_str(toml).expect_err("unknown top-level section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("chatbot"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// load_and_validate_str surfaces validation errors as diagnostics.
#[test]
fn validation_errors_surface_as_diagnostics() {
    let toml = r#"
[typing]
progress_step = 33
"#;

    let errors = load_and_validate_str(toml).expect_err("33 does not divide 100");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("progress_step"))
    ));
}

/// Typo in a known section gets a fuzzy-match suggestion.
#[test]
fn typo_gets_suggestion() {
    assert_eq!(
        suggest_key("progres_step", &["delay_ms", "progress_step"]),
        Some("progress_step".to_string())
    );
}
