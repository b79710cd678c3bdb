// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only per-session message store.
//!
//! The store owns message identity: every append assigns the next value of
//! a monotonically increasing counter, so ids strictly increase within a
//! session. There is no removal API; the store is bounded by session
//! lifetime, not by count.

use chrono::Utc;

use leadflow_core::{ActionButton, Message, MessageKind, Sender};

/// The parts of a message the caller controls; id and timestamp are
/// assigned by the store at append time.
#[derive(Debug, Clone, Default)]
pub struct MessageDraft {
    pub text: String,
    pub quick_replies: Vec<String>,
    pub kind: MessageKind,
    pub suggestions: Vec<String>,
    pub actions: Vec<ActionButton>,
}

impl MessageDraft {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Ordered, append-only sequence of exchanged messages.
#[derive(Debug, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
    next_id: u64,
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a message, assigning the next id. Returns a reference to the
    /// stored (now immutable) message.
    pub fn append(&mut self, sender: Sender, draft: MessageDraft) -> &Message {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            text: draft.text,
            sender,
            timestamp: Utc::now(),
            quick_replies: draft.quick_replies,
            kind: draft.kind,
            suggestions: draft.suggestions,
            actions: draft.actions,
        });
        self.messages.last().expect("just pushed")
    }

    /// All messages in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recently appended message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_strictly_increase() {
        let mut store = MessageStore::new();
        store.append(Sender::Bot, MessageDraft::text("hello"));
        store.append(Sender::User, MessageDraft::text("hi"));
        store.append(Sender::Bot, MessageDraft::text("how can I help?"));

        let ids: Vec<u64> = store.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        for pair in store.messages().windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    #[test]
    fn append_preserves_draft_fields() {
        let mut store = MessageStore::new();
        let msg = store.append(
            Sender::Bot,
            MessageDraft {
                text: "pick one".to_string(),
                quick_replies: vec!["a".to_string(), "b".to_string()],
                kind: MessageKind::Pricing,
                suggestions: vec!["try this".to_string()],
                actions: Vec::new(),
            },
        );
        assert_eq!(msg.text, "pick one");
        assert_eq!(msg.quick_replies, vec!["a", "b"]);
        assert_eq!(msg.kind, MessageKind::Pricing);
        assert!(msg.is_bot());
    }

    #[test]
    fn store_never_discards() {
        let mut store = MessageStore::new();
        for i in 0..100 {
            store.append(Sender::User, MessageDraft::text(format!("msg {i}")));
        }
        assert_eq!(store.len(), 100);
        assert_eq!(store.messages()[0].text, "msg 0");
        assert_eq!(store.last().unwrap().id, 100);
    }
}
