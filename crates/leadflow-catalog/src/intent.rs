// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-based intent classification.
//!
//! Classifies free-text user input into response intents using an ordered
//! list of keyword groups. No network, no model call, no latency: the
//! evaluation order of the rule table is the dispatch semantics, so inputs
//! matching several groups resolve to the earliest one.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Classification buckets for user input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Pricing and quote requests.
    Pricing,
    /// Portfolio and past-work requests.
    Portfolio,
    /// Project planning and strategy requests.
    Planning,
    /// Channel growth requests.
    Growth,
    /// Consultation booking requests.
    Booking,
    /// Commitment phrases that start lead collection.
    StartLead,
    /// No keyword group matched.
    Fallback,
}

/// One ordered rule: a keyword group mapped to an intent.
///
/// A rule matches when any of its keywords occurs as a substring of the
/// lowercased input.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

/// The standard rule table, evaluated top to bottom.
///
/// The order is load-bearing: "book a growth consultation" matches the
/// growth group before the booking group ever runs, and "work with" can
/// never reach the lead trigger because "work" already matches portfolio.
const STANDARD_RULES: &[KeywordRule] = &[
    KeywordRule {
        intent: Intent::Pricing,
        keywords: &["quote", "price", "cost", "budget"],
    },
    KeywordRule {
        intent: Intent::Portfolio,
        keywords: &["portfolio", "work", "example", "show"],
    },
    KeywordRule {
        intent: Intent::Planning,
        keywords: &["plan", "strategy", "project"],
    },
    KeywordRule {
        intent: Intent::Growth,
        keywords: &["grow", "growth", "youtube", "channel"],
    },
    KeywordRule {
        intent: Intent::Booking,
        keywords: &["book", "call", "consultation", "meeting"],
    },
    KeywordRule {
        intent: Intent::StartLead,
        keywords: &["start", "begin", "hire", "work with"],
    },
];

/// Ordered first-match-wins intent classifier.
///
/// Classification is a pure function of the input text: same input, same
/// intent. Entering lead-collection mode on `StartLead` is the engine's
/// side effect, not the classifier's.
pub struct IntentClassifier {
    rules: Vec<KeywordRule>,
}

impl IntentClassifier {
    /// Create a classifier with the standard rule table.
    pub fn new() -> Self {
        Self {
            rules: STANDARD_RULES.to_vec(),
        }
    }

    /// Create a classifier with a custom rule table (tests, localization).
    pub fn with_rules(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    /// Classify user input. Returns `Intent::Fallback` when no rule matches.
    pub fn classify(&self, input: &str) -> Intent {
        let lower = input.to_lowercase();
        for rule in &self.rules {
            if rule.keywords.iter().any(|k| lower.contains(k)) {
                return rule.intent;
            }
        }
        Intent::Fallback
    }

    /// The rule table in evaluation order.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pricing_keywords_classify_as_pricing() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("what's the cost for branding?"), Intent::Pricing);
        assert_eq!(c.classify("can I get a QUOTE"), Intent::Pricing);
        assert_eq!(c.classify("price list please"), Intent::Pricing);
        assert_eq!(c.classify("my budget is small"), Intent::Pricing);
    }

    #[test]
    fn portfolio_keywords_classify_as_portfolio() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("show me your portfolio"), Intent::Portfolio);
        assert_eq!(c.classify("examples of your work"), Intent::Portfolio);
    }

    #[test]
    fn planning_growth_and_booking_buckets() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("I need a content strategy"), Intent::Planning);
        assert_eq!(c.classify("help me grow my audience"), Intent::Growth);
        assert_eq!(c.classify("my youtube numbers are flat"), Intent::Growth);
        assert_eq!(c.classify("can we schedule a meeting"), Intent::Booking);
    }

    #[test]
    fn commitment_phrases_trigger_lead_collection() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("I want to hire you"), Intent::StartLead);
        assert_eq!(c.classify("let's begin"), Intent::StartLead);
    }

    #[test]
    fn rule_order_is_significant() {
        let c = IntentClassifier::new();
        // "growth" is tested before "consultation", so the growth group wins.
        assert_eq!(c.classify("book a growth consultation"), Intent::Growth);
        // "work" (portfolio) shadows "work with" (lead trigger).
        assert_eq!(c.classify("I want to work with you"), Intent::Portfolio);
        // "budget" (pricing) shadows everything after it.
        assert_eq!(c.classify("budget for a youtube channel"), Intent::Pricing);
    }

    #[test]
    fn unmatched_input_falls_back() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("asdkfj"), Intent::Fallback);
        assert_eq!(c.classify(""), Intent::Fallback);
    }

    #[test]
    fn classification_is_pure() {
        let c = IntentClassifier::new();
        let input = "what's the cost for branding?";
        assert_eq!(c.classify(input), c.classify(input));
    }

    #[test]
    fn custom_rules_override_the_table() {
        let c = IntentClassifier::with_rules(vec![KeywordRule {
            intent: Intent::Booking,
            keywords: &["hola"],
        }]);
        assert_eq!(c.classify("hola!"), Intent::Booking);
        assert_eq!(c.classify("price"), Intent::Fallback);
    }

    proptest! {
        // Pricing is the first rule, so any input containing one of its
        // keywords classifies as pricing no matter what surrounds it.
        #[test]
        fn any_input_containing_price_is_pricing(prefix in "[a-z ]{0,20}", suffix in "[a-z ]{0,20}") {
            let c = IntentClassifier::new();
            let input = format!("{prefix}price{suffix}");
            prop_assert_eq!(c.classify(&input), Intent::Pricing);
        }

        #[test]
        fn classification_never_panics(input in ".{0,200}") {
            let c = IntentClassifier::new();
            let _ = c.classify(&input);
        }
    }
}
