// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Leadflow engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Leadflow configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LeadflowConfig {
    /// Widget identity and behavior settings.
    #[serde(default)]
    pub widget: WidgetConfig,

    /// Typing-simulation settings.
    #[serde(default)]
    pub typing: TypingConfig,

    /// Outbound link targets for action buttons.
    #[serde(default)]
    pub links: LinksConfig,

    /// Analytics emission settings.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// Widget identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WidgetConfig {
    /// Display name of the assistant.
    #[serde(default = "default_widget_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// How many smart suggestions to surface on the greeting message.
    #[serde(default = "default_greeting_suggestions")]
    pub greeting_suggestions: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            name: default_widget_name(),
            log_level: default_log_level(),
            greeting_suggestions: default_greeting_suggestions(),
        }
    }
}

fn default_widget_name() -> String {
    "leadflow".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_greeting_suggestions() -> usize {
    4
}

/// Typing-simulation configuration.
///
/// The simulator reports progress 0..=100 in `progress_step` increments,
/// each separated by `delay_ms / (100 / progress_step)` milliseconds, then
/// pauses one further full `delay_ms` before the reply is appended.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TypingConfig {
    /// Total typing delay in milliseconds. Zero disables the delay entirely
    /// (used by tests).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Progress increment per tick. Must evenly divide 100.
    #[serde(default = "default_progress_step")]
    pub progress_step: u8,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            progress_step: default_progress_step(),
        }
    }
}

fn default_delay_ms() -> u64 {
    1500
}

fn default_progress_step() -> u8 {
    10
}

/// Outbound link targets opened by the `book_call` and `whatsapp` action
/// buttons. Navigation is performed by the host, not the engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LinksConfig {
    /// Scheduling page opened by the consultation action button.
    #[serde(default = "default_booking_url")]
    pub booking_url: String,

    /// Messaging deep link opened by the WhatsApp action button.
    #[serde(default = "default_whatsapp_url")]
    pub whatsapp_url: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            booking_url: default_booking_url(),
            whatsapp_url: default_whatsapp_url(),
        }
    }
}

fn default_booking_url() -> String {
    "https://calendly.com/adilgfx/consultation".to_string()
}

fn default_whatsapp_url() -> String {
    "https://wa.me/1234567890?text=Hi%20Adil!%20I%20want%20to%20discuss%20my%20project."
        .to_string()
}

/// Analytics emission configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyticsConfig {
    /// Enable analytics event emission. When false the engine uses a no-op
    /// sink.
    #[serde(default = "default_analytics_enabled")]
    pub enabled: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: default_analytics_enabled(),
        }
    }
}

fn default_analytics_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_deserialize_with_partial_toml() {
        let toml_str = r#"
[typing]
delay_ms = 250
"#;
        let config: LeadflowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.typing.delay_ms, 250);
        // Untouched sections fall back to defaults.
        assert_eq!(config.typing.progress_step, 10);
        assert_eq!(config.widget.name, "leadflow");
    }

    #[test]
    fn sections_deny_unknown_fields() {
        let toml_str = r#"
[links]
booking_url = "https://example.com"
telegram_url = "https://t.me/x"
"#;
        let result = toml::from_str::<LeadflowConfig>(toml_str);
        assert!(result.is_err());
    }
}
