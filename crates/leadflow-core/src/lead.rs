// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lead-collection data types: the step cursor and the field accumulator.
//!
//! `LeadStep` advances strictly forward; there is no backward transition.
//! `LeadData` is an immutable accumulator: each `with_*` method consumes
//! the old value and returns a new one, so the state machine threads a
//! value through transitions instead of mutating in place.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The six collection steps plus the terminal `Complete` state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LeadStep {
    Name,
    Email,
    Whatsapp,
    Project,
    Budget,
    Timeline,
    Complete,
}

impl LeadStep {
    /// The step that follows this one. `Complete` is terminal and maps to
    /// itself.
    pub fn next(self) -> LeadStep {
        match self {
            LeadStep::Name => LeadStep::Email,
            LeadStep::Email => LeadStep::Whatsapp,
            LeadStep::Whatsapp => LeadStep::Project,
            LeadStep::Project => LeadStep::Budget,
            LeadStep::Budget => LeadStep::Timeline,
            LeadStep::Timeline => LeadStep::Complete,
            LeadStep::Complete => LeadStep::Complete,
        }
    }

    /// Returns true for the terminal state.
    pub fn is_complete(self) -> bool {
        self == LeadStep::Complete
    }
}

/// Accumulated lead fields. Filled strictly in step order; never cleared.
///
/// No validation is performed on any field: whatever text the user sent is
/// stored verbatim, including for email and phone steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
    pub project: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
}

impl LeadData {
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    pub fn with_email(self, email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..self
        }
    }

    pub fn with_whatsapp(self, whatsapp: impl Into<String>) -> Self {
        Self {
            whatsapp: Some(whatsapp.into()),
            ..self
        }
    }

    pub fn with_project(self, project: impl Into<String>) -> Self {
        Self {
            project: Some(project.into()),
            ..self
        }
    }

    pub fn with_budget(self, budget: impl Into<String>) -> Self {
        Self {
            budget: Some(budget.into()),
            ..self
        }
    }

    pub fn with_timeline(self, timeline: impl Into<String>) -> Self {
        Self {
            timeline: Some(timeline.into()),
            ..self
        }
    }

    /// Returns true once all six fields have been stored.
    pub fn is_filled(&self) -> bool {
        self.name.is_some()
            && self.email.is_some()
            && self.whatsapp.is_some()
            && self.project.is_some()
            && self.budget.is_some()
            && self.timeline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_advance_in_fixed_order() {
        let order = [
            LeadStep::Name,
            LeadStep::Email,
            LeadStep::Whatsapp,
            LeadStep::Project,
            LeadStep::Budget,
            LeadStep::Timeline,
            LeadStep::Complete,
        ];
        for pair in order.windows(2) {
            assert_eq!(pair[0].next(), pair[1]);
        }
        assert_eq!(LeadStep::Complete.next(), LeadStep::Complete);
    }

    #[test]
    fn only_complete_is_terminal() {
        assert!(LeadStep::Complete.is_complete());
        assert!(!LeadStep::Timeline.is_complete());
    }

    #[test]
    fn accumulator_fills_without_clearing() {
        let data = LeadData::default()
            .with_name("Sara")
            .with_email("sara@x.com")
            .with_whatsapp("+1555");
        assert_eq!(data.name.as_deref(), Some("Sara"));
        assert_eq!(data.email.as_deref(), Some("sara@x.com"));
        assert!(!data.is_filled());

        let data = data
            .with_project("Logo")
            .with_budget("$500-$1000")
            .with_timeline("1-2 weeks");
        assert!(data.is_filled());
        // Earlier fields survive later transitions untouched.
        assert_eq!(data.name.as_deref(), Some("Sara"));
    }

    #[test]
    fn empty_input_is_stored_verbatim() {
        // No validation at this layer: empty strings are legal values.
        let data = LeadData::default().with_email("");
        assert_eq!(data.email.as_deref(), Some(""));
    }

    #[test]
    fn step_display_strings() {
        assert_eq!(LeadStep::Whatsapp.to_string(), "whatsapp");
        assert_eq!(LeadStep::Complete.to_string(), "complete");
    }
}
