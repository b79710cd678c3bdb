// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end session testing.
//!
//! `SessionHarness` assembles a complete chat session with the default
//! catalog, a recording analytics sink, and zero typing delay, so tests
//! drive the full pipeline deterministically and instantly.

use std::sync::Arc;

use leadflow_catalog::ResponseCatalog;
use leadflow_config::LeadflowConfig;
use leadflow_core::{AnalyticsSink, LeadflowError, Message};
use leadflow_engine::ChatSession;

use crate::mock_analytics::RecordingAnalytics;

/// Builder for creating test sessions with configurable options.
pub struct SessionHarnessBuilder {
    catalog: Option<ResponseCatalog>,
    config: Option<LeadflowConfig>,
    failing_analytics: bool,
}

impl SessionHarnessBuilder {
    fn new() -> Self {
        Self {
            catalog: None,
            config: None,
            failing_analytics: false,
        }
    }

    /// Use a custom catalog instead of the default one.
    pub fn with_catalog(mut self, catalog: ResponseCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use a custom configuration. The typing delay is still forced to
    /// zero so tests stay instant.
    pub fn with_config(mut self, config: LeadflowConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Make the analytics sink fail every call (it still records).
    pub fn with_failing_analytics(mut self) -> Self {
        self.failing_analytics = true;
        self
    }

    /// Build the harness, creating the session with the greeting seeded.
    pub fn build(self) -> SessionHarness {
        let mut config = self.config.unwrap_or_default();
        config.typing.delay_ms = 0;

        let catalog = Arc::new(self.catalog.unwrap_or_default());
        let analytics = Arc::new(if self.failing_analytics {
            RecordingAnalytics::failing()
        } else {
            RecordingAnalytics::new()
        });

        let session = ChatSession::new(
            &config,
            catalog.clone(),
            analytics.clone() as Arc<dyn AnalyticsSink>,
        );

        SessionHarness {
            session,
            analytics,
            catalog,
            config,
        }
    }
}

/// A complete test environment around one chat session.
pub struct SessionHarness {
    /// The session under test, greeting already seeded.
    pub session: ChatSession,
    /// The recording analytics sink for event assertions.
    pub analytics: Arc<RecordingAnalytics>,
    /// The catalog the session was built with.
    pub catalog: Arc<ResponseCatalog>,
    /// The configuration the session was built with (typing delay zeroed).
    pub config: LeadflowConfig,
}

impl SessionHarness {
    /// Create a new builder for configuring the harness.
    pub fn builder() -> SessionHarnessBuilder {
        SessionHarnessBuilder::new()
    }

    /// Build a harness with all defaults.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Send one user turn through the full pipeline and return the bot
    /// reply.
    pub async fn send(&mut self, text: &str) -> Result<Message, LeadflowError> {
        self.session.handle_input(text).await
    }
}

impl Default for SessionHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn harness_seeds_greeting() {
        let harness = SessionHarness::new();
        let messages = harness.session.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_bot());
        assert_eq!(messages[0].id, 1);
    }

    #[tokio::test]
    async fn send_returns_bot_reply() {
        let mut harness = SessionHarness::new();
        let reply = harness.send("hello there").await.unwrap();
        assert!(reply.is_bot());
        // Greeting, user message, bot reply.
        assert_eq!(harness.session.messages().len(), 3);
    }

    #[tokio::test]
    async fn failing_analytics_does_not_block_send() {
        let mut harness = SessionHarness::builder().with_failing_analytics().build();
        let reply = harness.send("hello").await;
        assert!(reply.is_ok());
        // Both events were still attempted.
        assert_eq!(harness.analytics.event_count().await, 2);
    }
}
