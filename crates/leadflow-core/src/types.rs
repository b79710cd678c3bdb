// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the chat engine, catalog, and analytics sinks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a conversation session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum Sender {
    Bot,
    User,
}

/// Rendering hint attached to a message, mirroring the catalog template
/// that produced it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Plain,
    Pricing,
    Portfolio,
    Booking,
}

/// Visual weight of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
}

/// Identifiers for action buttons attached to bot messages.
///
/// `BookCall` and `WhatsApp` resolve to outbound links; the rest are
/// shortcuts that re-enter the conversation as quick-reply text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    SmartQuote,
    Portfolio,
    Booking,
    GrowthStrategy,
    BookCall,
    #[strum(serialize = "whatsapp")]
    #[serde(rename = "whatsapp")]
    WhatsApp,
}

/// A clickable action button on a bot message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButton {
    pub label: String,
    pub action: ActionId,
    pub variant: ButtonVariant,
}

impl ActionButton {
    pub fn new(label: impl Into<String>, action: ActionId, variant: ButtonVariant) -> Self {
        Self {
            label: label.into(),
            action,
            variant,
        }
    }
}

/// One exchanged chat message. Immutable once appended to the store.
///
/// The `id` is assigned by the message store and strictly increases within
/// a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub quick_replies: Vec<String>,
    #[serde(default)]
    pub kind: MessageKind,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub actions: Vec<ActionButton>,
}

impl Message {
    /// Returns true if the message was produced by the bot.
    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

/// A fire-and-forget analytics event: a name plus flat string attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl AnalyticsEvent {
    /// Event emitted when a bot response is appended to the store.
    pub fn bot_response(kind: MessageKind) -> Self {
        Self {
            name: "chatbot_response".to_string(),
            attributes: vec![("message_type".to_string(), kind.to_string())],
        }
    }

    /// Event emitted when a user message is sent.
    pub fn user_message(length: usize) -> Self {
        Self {
            name: "user_message".to_string(),
            attributes: vec![("message_length".to_string(), length.to_string())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn action_id_snake_case_strings() {
        assert_eq!(ActionId::SmartQuote.to_string(), "smart_quote");
        assert_eq!(ActionId::BookCall.to_string(), "book_call");
        assert_eq!(ActionId::WhatsApp.to_string(), "whatsapp");
        assert_eq!(
            ActionId::from_str("growth_strategy").unwrap(),
            ActionId::GrowthStrategy
        );
    }

    #[test]
    fn message_kind_defaults_to_plain() {
        assert_eq!(MessageKind::default(), MessageKind::Plain);
        assert_eq!(MessageKind::Pricing.to_string(), "pricing");
    }

    #[test]
    fn analytics_event_constructors() {
        let e = AnalyticsEvent::bot_response(MessageKind::Booking);
        assert_eq!(e.name, "chatbot_response");
        assert_eq!(
            e.attributes,
            vec![("message_type".to_string(), "booking".to_string())]
        );

        let e = AnalyticsEvent::user_message(42);
        assert_eq!(e.name, "user_message");
        assert_eq!(
            e.attributes,
            vec![("message_length".to_string(), "42".to_string())]
        );
    }

    #[test]
    fn message_serialization_round_trip() {
        let msg = Message {
            id: 7,
            text: "hello".to_string(),
            sender: Sender::User,
            timestamp: Utc::now(),
            quick_replies: vec!["Get Smart Quote".to_string()],
            kind: MessageKind::Plain,
            suggestions: Vec::new(),
            actions: vec![ActionButton::new(
                "Book Consultation",
                ActionId::BookCall,
                ButtonVariant::Primary,
            )],
        };
        let json = serde_json::to_string(&msg).expect("should serialize");
        let parsed: Message = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(msg, parsed);
    }
}
