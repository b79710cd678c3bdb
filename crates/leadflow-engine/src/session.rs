// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-session chat engine that wires the classifier, catalog, lead
//! collector, typing simulator, and analytics sink together.
//!
//! One `ChatSession` backs one widget instance and owns its state
//! exclusively: all mutation happens sequentially on message-send events,
//! with the typing delay as the only suspension point. Quick replies are
//! literal text -- selecting one is identical to typing that exact string,
//! so there is a single [`ChatSession::handle_input`] entry point for both.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use leadflow_catalog::{Intent, IntentClassifier, ResponseCatalog, ResponseTemplate};
use leadflow_config::LeadflowConfig;
use leadflow_core::{
    ActionId, AnalyticsEvent, AnalyticsSink, LeadData, LeadStep, LeadflowError, Message, Sender,
    SessionId,
};

use crate::collector::LeadCollector;
use crate::store::{MessageDraft, MessageStore};
use crate::typing::{TypingSimulator, TypingState};

/// Result of resolving an action button.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// The host should navigate to this URL (out-of-band side effect; not
    /// part of the conversational contract).
    OpenLink(String),
    /// The action was a shortcut: it re-entered the pipeline as quick-reply
    /// text and this bot message was appended.
    Replied(Message),
}

/// Outbound link targets for the two navigation action buttons.
#[derive(Debug, Clone)]
struct LinkTargets {
    booking_url: String,
    whatsapp_url: String,
}

/// A single conversation session driving the lead-capture chat widget.
pub struct ChatSession {
    session_id: SessionId,
    store: MessageStore,
    catalog: Arc<ResponseCatalog>,
    classifier: IntentClassifier,
    collector: LeadCollector,
    typing: TypingSimulator,
    analytics: Arc<dyn AnalyticsSink>,
    links: LinkTargets,
}

impl ChatSession {
    /// Create a session and seed the greeting as its first message.
    ///
    /// The catalog is injected so tests and localized deployments construct
    /// their own; the session never mutates it.
    pub fn new(
        config: &LeadflowConfig,
        catalog: Arc<ResponseCatalog>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        let session_id = SessionId(uuid::Uuid::new_v4().to_string());
        let typing = TypingSimulator::new(
            Duration::from_millis(config.typing.delay_ms),
            config.typing.progress_step,
        );

        let mut store = MessageStore::new();
        let surfaced = config
            .widget
            .greeting_suggestions
            .min(catalog.suggestions().len());
        let mut greeting = draft_from_template(catalog.greeting());
        greeting.suggestions = catalog.suggestions()[..surfaced].to_vec();
        store.append(Sender::Bot, greeting);

        info!(
            session_id = session_id.0.as_str(),
            sink = analytics.name(),
            "chat session created"
        );

        Self {
            session_id,
            store,
            catalog,
            classifier: IntentClassifier::new(),
            collector: LeadCollector::new(),
            typing,
            analytics,
            links: LinkTargets {
                booking_url: config.links.booking_url.clone(),
                whatsapp_url: config.links.whatsapp_url.clone(),
            },
        }
    }

    /// Handle one user turn (typed text or a clicked quick reply -- the two
    /// are indistinguishable by design) and return the appended bot reply.
    pub async fn handle_input(&mut self, text: &str) -> Result<Message, LeadflowError> {
        self.store.append(Sender::User, MessageDraft::text(text));
        self.emit(AnalyticsEvent::user_message(text.chars().count()))
            .await;

        let reply = if self.collector.is_active() {
            self.collect_turn(text)?
        } else {
            self.classify_turn(text)
        };

        // The delay sequence always runs to completion; closing the widget
        // does not cancel an in-flight response.
        self.typing.run().await;

        let kind = reply.kind;
        let message = self.store.append(Sender::Bot, reply).clone();
        self.typing.clear();

        self.emit(AnalyticsEvent::bot_response(kind)).await;

        debug!(
            session_id = self.session_id.0.as_str(),
            message_id = message.id,
            kind = %message.kind,
            collecting = self.collector.is_active(),
            "bot reply appended"
        );

        Ok(message)
    }

    /// Resolve an action button.
    ///
    /// `BookCall` and `WhatsApp` are outbound navigation; the remaining ids
    /// are shortcuts that re-enter the pipeline with their canonical
    /// quick-reply text.
    pub async fn handle_action(&mut self, action: ActionId) -> Result<ActionOutcome, LeadflowError> {
        match action {
            ActionId::BookCall => Ok(ActionOutcome::OpenLink(self.links.booking_url.clone())),
            ActionId::WhatsApp => Ok(ActionOutcome::OpenLink(self.links.whatsapp_url.clone())),
            ActionId::SmartQuote => self.shortcut("Get Smart Quote").await,
            ActionId::Portfolio => self.shortcut("Show Portfolio").await,
            ActionId::Booking => self.shortcut("Book Consultation").await,
            ActionId::GrowthStrategy => self.shortcut("Growth Strategy").await,
        }
    }

    /// Route one turn through the lead state machine while collection is
    /// active.
    fn collect_turn(&mut self, text: &str) -> Result<MessageDraft, LeadflowError> {
        let transition = self.collector.accept(text);
        if transition.next.is_complete() {
            let summary = render_template(self.catalog.summary(), &transition.data);
            return Ok(summary);
        }

        let prompt = self.catalog.lead_prompt(transition.next).ok_or_else(|| {
            LeadflowError::Internal(format!(
                "catalog has no prompt for step {}",
                transition.next
            ))
        })?;
        Ok(render_template(prompt, &transition.data))
    }

    /// Classify one turn outside collection mode and pick the reply.
    fn classify_turn(&mut self, text: &str) -> MessageDraft {
        let intent = self.classifier.classify(text);
        debug!(
            session_id = self.session_id.0.as_str(),
            intent = %intent,
            "input classified"
        );

        if intent == Intent::StartLead {
            self.collector.start();
            return draft_from_template(self.catalog.lead_intro());
        }

        draft_from_template(self.catalog.template(intent))
    }

    async fn shortcut(&mut self, text: &str) -> Result<ActionOutcome, LeadflowError> {
        let message = self.handle_input(text).await?;
        Ok(ActionOutcome::Replied(message))
    }

    /// Fire-and-forget analytics emission: failures are logged and dropped,
    /// never propagated into the conversation path.
    async fn emit(&self, event: AnalyticsEvent) {
        if let Err(e) = self.analytics.track(event).await {
            debug!(error = %e, "analytics event dropped");
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// The full transcript in append order.
    pub fn messages(&self) -> &[Message] {
        self.store.messages()
    }

    /// True while input is routed to the lead state machine.
    pub fn is_collecting(&self) -> bool {
        self.collector.is_active()
    }

    /// The current lead step, if collection has ever started.
    pub fn lead_step(&self) -> Option<LeadStep> {
        self.collector.step()
    }

    /// The accumulated lead fields.
    pub fn lead_data(&self) -> &LeadData {
        self.collector.data()
    }

    /// Subscribe to typing-indicator updates for rendering.
    pub fn typing_updates(&self) -> watch::Receiver<TypingState> {
        self.typing.subscribe()
    }
}

/// Turn a catalog template into a message draft verbatim.
fn draft_from_template(template: &ResponseTemplate) -> MessageDraft {
    MessageDraft {
        text: template.text.clone(),
        quick_replies: template.quick_replies.clone(),
        kind: template.kind,
        suggestions: template.suggestions.clone(),
        actions: template.actions.clone(),
    }
}

/// Substitute `{field}` placeholders with collected lead values. Missing
/// fields render as empty strings.
fn render_template(template: &ResponseTemplate, data: &LeadData) -> MessageDraft {
    let mut draft = draft_from_template(template);
    for (placeholder, value) in [
        ("{name}", &data.name),
        ("{email}", &data.email),
        ("{whatsapp}", &data.whatsapp),
        ("{project}", &data.project),
        ("{budget}", &data.budget),
        ("{timeline}", &data.timeline),
    ] {
        if draft.text.contains(placeholder) {
            draft.text = draft
                .text
                .replace(placeholder, value.as_deref().unwrap_or_default());
        }
    }
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadflow_catalog::ResponseTemplate;

    #[test]
    fn render_substitutes_collected_fields() {
        let tpl = ResponseTemplate::new("Hi {name}, we'll email {email}.");
        let data = LeadData::default().with_name("Sara").with_email("s@x.com");
        let draft = render_template(&tpl, &data);
        assert_eq!(draft.text, "Hi Sara, we'll email s@x.com.");
    }

    #[test]
    fn render_leaves_missing_fields_empty() {
        let tpl = ResponseTemplate::new("Hi {name}!");
        let draft = render_template(&tpl, &LeadData::default());
        assert_eq!(draft.text, "Hi !");
    }

    #[test]
    fn draft_copies_template_verbatim() {
        let tpl = ResponseTemplate::new("body").with_quick_replies(["x", "y"]);
        let draft = draft_from_template(&tpl);
        assert_eq!(draft.text, "body");
        assert_eq!(draft.quick_replies, vec!["x", "y"]);
    }
}
