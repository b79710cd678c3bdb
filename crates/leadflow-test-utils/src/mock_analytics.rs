// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recording analytics sink for deterministic testing.
//!
//! `RecordingAnalytics` implements `AnalyticsSink`, capturing every tracked
//! event for assertion in tests. A failure mode is available to verify that
//! the engine treats sink errors as non-fatal.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use leadflow_core::{AnalyticsEvent, AnalyticsSink, LeadflowError};

/// A mock analytics sink that records every event it receives.
///
/// With `failing()`, every `track` call still records the event but then
/// returns an error, so tests can assert both that the engine attempted
/// delivery and that the failure did not block the reply.
pub struct RecordingAnalytics {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
    fail: bool,
}

impl RecordingAnalytics {
    /// Create a sink that records and succeeds.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Create a sink that records and then fails every call.
    pub fn failing() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// All events tracked so far, in order.
    pub async fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().await.clone()
    }

    /// Count of tracked events.
    pub async fn event_count(&self) -> usize {
        self.events.lock().await.len()
    }

    /// Events with the given name, in order.
    pub async fn events_named(&self, name: &str) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .await
            .iter()
            .filter(|e| e.name == name)
            .cloned()
            .collect()
    }

    /// Clear all recorded events.
    pub async fn clear(&self) {
        self.events.lock().await.clear();
    }
}

impl Default for RecordingAnalytics {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsSink for RecordingAnalytics {
    fn name(&self) -> &str {
        "recording"
    }

    async fn track(&self, event: AnalyticsEvent) -> Result<(), LeadflowError> {
        self.events.lock().await.push(event);
        if self.fail {
            return Err(LeadflowError::Analytics {
                message: "injected failure".to_string(),
                source: None,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadflow_core::MessageKind;

    #[tokio::test]
    async fn records_events_in_order() {
        let sink = RecordingAnalytics::new();
        sink.track(AnalyticsEvent::user_message(5)).await.unwrap();
        sink.track(AnalyticsEvent::bot_response(MessageKind::Plain))
            .await
            .unwrap();

        let events = sink.events().await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "user_message");
        assert_eq!(events[1].name, "chatbot_response");
    }

    #[tokio::test]
    async fn failing_sink_still_records() {
        let sink = RecordingAnalytics::failing();
        let result = sink.track(AnalyticsEvent::user_message(1)).await;
        assert!(result.is_err());
        assert_eq!(sink.event_count().await, 1);
    }

    #[tokio::test]
    async fn events_named_filters() {
        let sink = RecordingAnalytics::new();
        sink.track(AnalyticsEvent::user_message(1)).await.unwrap();
        sink.track(AnalyticsEvent::user_message(2)).await.unwrap();
        sink.track(AnalyticsEvent::bot_response(MessageKind::Plain))
            .await
            .unwrap();

        assert_eq!(sink.events_named("user_message").await.len(), 2);
        assert_eq!(sink.events_named("chatbot_response").await.len(), 1);

        sink.clear().await;
        assert_eq!(sink.event_count().await, 0);
    }
}
