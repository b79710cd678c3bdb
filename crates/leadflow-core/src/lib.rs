// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Leadflow lead-capture engine.
//!
//! This crate provides the error type, the message and lead data model, and
//! the analytics sink trait used throughout the Leadflow workspace.

pub mod error;
pub mod lead;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::LeadflowError;
pub use lead::{LeadData, LeadStep};
pub use traits::AnalyticsSink;
pub use types::{
    ActionButton, ActionId, AnalyticsEvent, ButtonVariant, Message, MessageKind, Sender,
    SessionId,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_has_all_variants() {
        let _config = LeadflowError::Config("test".into());
        let _analytics = LeadflowError::Analytics {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _action = LeadflowError::UnknownAction("unknown".into());
        let _internal = LeadflowError::Internal("test".into());
    }

    #[test]
    fn error_display_messages() {
        let err = LeadflowError::Config("bad delay".into());
        assert_eq!(err.to_string(), "configuration error: bad delay");

        let err = LeadflowError::UnknownAction("launch_rocket".into());
        assert_eq!(err.to_string(), "unknown action: launch_rocket");
    }

    #[test]
    fn analytics_sink_is_object_safe() {
        fn _assert_object_safe(_: &dyn AnalyticsSink) {}
    }
}
