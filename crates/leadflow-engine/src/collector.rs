// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The lead-collection state machine.
//!
//! Collects six fields in strict order, one user turn per field. Any text
//! is accepted verbatim as an answer; no format checking is performed on
//! email or phone values at this layer. The machine is forward-only: there
//! is no backward transition and no correction path once a step has
//! advanced.
//!
//! Transitions are pure: [`advance`] consumes the current step and
//! accumulator and returns the next step and a new accumulator, leaving
//! mutation to the [`LeadCollector`] wrapper that owns the cursor.

use leadflow_core::{LeadData, LeadStep};

/// Result of one collection transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadTransition {
    /// The step the machine moves to. `Complete` means the summary should
    /// be emitted and collection mode exited.
    pub next: LeadStep,
    /// The accumulator with this turn's answer stored.
    pub data: LeadData,
}

/// Advance the machine one step: store `input` under the current step's
/// field and move forward.
///
/// `Complete` is absorbing; calling `advance` on it stores nothing.
pub fn advance(step: LeadStep, data: LeadData, input: &str) -> LeadTransition {
    let (next, data) = match step {
        LeadStep::Name => (LeadStep::Email, data.with_name(input)),
        LeadStep::Email => (LeadStep::Whatsapp, data.with_email(input)),
        LeadStep::Whatsapp => (LeadStep::Project, data.with_whatsapp(input)),
        LeadStep::Project => (LeadStep::Budget, data.with_project(input)),
        LeadStep::Budget => (LeadStep::Timeline, data.with_budget(input)),
        LeadStep::Timeline => (LeadStep::Complete, data.with_timeline(input)),
        LeadStep::Complete => (LeadStep::Complete, data),
    };
    LeadTransition { next, data }
}

/// Owns the collection-mode flag, the current step, and the accumulator
/// for one session.
#[derive(Debug, Default)]
pub struct LeadCollector {
    active: bool,
    step: Option<LeadStep>,
    data: LeadData,
}

impl LeadCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter collection mode at the `Name` step. Previously collected
    /// fields are kept and will be overwritten as their steps are
    /// revisited.
    pub fn start(&mut self) {
        self.active = true;
        self.step = Some(LeadStep::Name);
    }

    /// Feed one user turn into the machine. Returns the transition taken.
    /// When the machine reaches `Complete`, collection mode is exited.
    ///
    /// Must only be called while active.
    pub fn accept(&mut self, input: &str) -> LeadTransition {
        let step = self.step.unwrap_or(LeadStep::Name);
        let transition = advance(step, std::mem::take(&mut self.data), input);
        self.data = transition.data.clone();
        self.step = Some(transition.next);
        if transition.next.is_complete() {
            self.active = false;
        }
        transition
    }

    /// True while input should be routed here instead of the classifier.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The current step, if collection has ever started.
    pub fn step(&self) -> Option<LeadStep> {
        self.step
    }

    /// The accumulated lead fields.
    pub fn data(&self) -> &LeadData {
        &self.data
    }
}
