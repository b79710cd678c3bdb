// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Analytics sink trait for fire-and-forget event emission.

use async_trait::async_trait;

use crate::error::LeadflowError;
use crate::types::AnalyticsEvent;

/// Sink for conversation analytics events.
///
/// The engine emits an event when a user message is sent and when a bot
/// response is appended. Delivery is fire-and-forget: a failing sink must
/// never block or abort message delivery, so callers log errors from
/// `track` and continue.
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    /// Human-readable name of this sink instance.
    fn name(&self) -> &str;

    /// Records a single analytics event.
    async fn track(&self, event: AnalyticsEvent) -> Result<(), LeadflowError>;
}
