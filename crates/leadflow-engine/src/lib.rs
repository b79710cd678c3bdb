// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat session engine for the Leadflow lead-capture widget.
//!
//! The [`ChatSession`] is the per-widget coordinator that:
//! - Appends every exchanged message to an append-only [`MessageStore`]
//! - Routes input to the intent classifier or, while collection is active,
//!   to the lead-collection state machine
//! - Runs the typing-simulation delay before each bot reply
//! - Emits fire-and-forget analytics events
//!
//! Sessions own their state exclusively; there is no shared mutable state
//! across sessions and no locking.

pub mod collector;
pub mod session;
pub mod store;
pub mod typing;

pub use collector::{advance, LeadCollector, LeadTransition};
pub use session::{ActionOutcome, ChatSession};
pub use store::{MessageDraft, MessageStore};
pub use typing::{TypingSimulator, TypingState};
