// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as progress-step divisibility and link URL schemes.

use crate::diagnostic::ConfigError;
use crate::model::LeadflowConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &LeadflowConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate widget name is not empty
    if config.widget.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "widget.name must not be empty".to_string(),
        });
    }

    // Validate progress_step is in range and evenly divides 100
    let step = config.typing.progress_step;
    if step == 0 || step > 100 {
        errors.push(ConfigError::Validation {
            message: format!("typing.progress_step must be in 1..=100, got {step}"),
        });
    } else if 100 % step != 0 {
        errors.push(ConfigError::Validation {
            message: format!("typing.progress_step must evenly divide 100, got {step}"),
        });
    }

    // Validate link targets look like web URLs
    for (key, url) in [
        ("links.booking_url", &config.links.booking_url),
        ("links.whatsapp_url", &config.links.whatsapp_url),
    ] {
        if url.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty"),
            });
        } else if !url.starts_with("http://") && !url.starts_with("https://") {
            errors.push(ConfigError::Validation {
                message: format!("{key} must be an http(s) URL, got `{url}`"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
