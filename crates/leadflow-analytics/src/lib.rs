// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Analytics sink implementations.
//!
//! Two sinks ship with Leadflow: [`TracingAnalytics`] forwards events as
//! structured `tracing` events, and [`NullAnalytics`] drops them. Both are
//! infallible; the engine treats sink failures as non-fatal either way.

use async_trait::async_trait;
use tracing::info;

use leadflow_core::{AnalyticsEvent, AnalyticsSink, LeadflowError};

/// Sink that records analytics events as structured tracing events under
/// the `leadflow::analytics` target.
#[derive(Debug, Default)]
pub struct TracingAnalytics;

impl TracingAnalytics {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AnalyticsSink for TracingAnalytics {
    fn name(&self) -> &str {
        "tracing"
    }

    async fn track(&self, event: AnalyticsEvent) -> Result<(), LeadflowError> {
        let attributes = event
            .attributes
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(",");
        info!(
            target: "leadflow::analytics",
            event = event.name.as_str(),
            attributes = attributes.as_str(),
            "analytics event"
        );
        Ok(())
    }
}

/// Sink that discards every event. Used when analytics are disabled by
/// configuration.
#[derive(Debug, Default)]
pub struct NullAnalytics;

impl NullAnalytics {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AnalyticsSink for NullAnalytics {
    fn name(&self) -> &str {
        "null"
    }

    async fn track(&self, _event: AnalyticsEvent) -> Result<(), LeadflowError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadflow_core::MessageKind;

    #[tokio::test]
    async fn tracing_sink_accepts_events() {
        let sink = TracingAnalytics::new();
        let result = sink
            .track(AnalyticsEvent::bot_response(MessageKind::Pricing))
            .await;
        assert!(result.is_ok());
        assert_eq!(sink.name(), "tracing");
    }

    #[tokio::test]
    async fn null_sink_discards_events() {
        let sink = NullAnalytics::new();
        let result = sink.track(AnalyticsEvent::user_message(12)).await;
        assert!(result.is_ok());
        assert_eq!(sink.name(), "null");
    }
}
