// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The immutable response catalog.
//!
//! Maps intents to reply templates and lead-collection steps to prompts.
//! A catalog is constructed once (usually via [`ResponseCatalog::default_catalog`]),
//! wrapped in an `Arc`, and injected into the chat engine. Nothing mutates
//! it at runtime, so one catalog can back any number of sessions; a
//! localized or stubbed catalog is just a different value passed at
//! construction time.
//!
//! Template text may embed `**bold**` emphasis markup; rendering is the
//! host's concern. Prompt templates use `{field}` placeholders that the
//! engine substitutes with collected lead values.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use leadflow_core::{ActionButton, ActionId, ButtonVariant, LeadStep, MessageKind};

use crate::intent::Intent;

/// A canned reply: body text plus optional quick replies, suggestions, and
/// action buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseTemplate {
    pub text: String,
    #[serde(default)]
    pub quick_replies: Vec<String>,
    #[serde(default)]
    pub kind: MessageKind,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub actions: Vec<ActionButton>,
}

impl ResponseTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quick_replies: Vec::new(),
            kind: MessageKind::Plain,
            suggestions: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn with_quick_replies<I, S>(mut self, replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quick_replies = replies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_kind(mut self, kind: MessageKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = ActionButton>,
    {
        self.actions = actions.into_iter().collect();
        self
    }
}

/// Immutable mapping from intents and lead steps to reply templates.
#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    greeting: ResponseTemplate,
    templates: HashMap<Intent, ResponseTemplate>,
    fallback: ResponseTemplate,
    lead_intro: ResponseTemplate,
    lead_prompts: HashMap<LeadStep, ResponseTemplate>,
    summary: ResponseTemplate,
    suggestions: Vec<String>,
}

impl ResponseCatalog {
    /// Start building a catalog from the default one, overriding pieces.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder {
            catalog: Self::default_catalog(),
        }
    }

    /// The greeting seeded as the first message of every session.
    pub fn greeting(&self) -> &ResponseTemplate {
        &self.greeting
    }

    /// Template for a classified intent. Total: unknown intents (including
    /// `Fallback` itself) resolve to the fallback template.
    pub fn template(&self, intent: Intent) -> &ResponseTemplate {
        self.templates.get(&intent).unwrap_or(&self.fallback)
    }

    /// The catch-all template advertising available actions.
    pub fn fallback(&self) -> &ResponseTemplate {
        &self.fallback
    }

    /// The reply that opens lead collection and asks for the name.
    pub fn lead_intro(&self) -> &ResponseTemplate {
        &self.lead_intro
    }

    /// Prompt asking for the given step's field. `None` for `Name` (covered
    /// by [`Self::lead_intro`]) and `Complete` (covered by [`Self::summary`]).
    pub fn lead_prompt(&self, step: LeadStep) -> Option<&ResponseTemplate> {
        self.lead_prompts.get(&step)
    }

    /// Summary template emitted on entering the terminal collection step.
    pub fn summary(&self) -> &ResponseTemplate {
        &self.summary
    }

    /// Smart suggestion strings surfaced with the greeting.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// The production catalog, with the widget's standard copy.
    pub fn default_catalog() -> Self {
        let mut templates = HashMap::new();

        templates.insert(
            Intent::Pricing,
            ResponseTemplate::new(
                "💰 **Smart Pricing Calculator**\n\nI'll analyze your project requirements \
                 and provide the most accurate pricing based on:\n• Project complexity & scope\n\
                 • Current market rates\n• Your specific needs\n• Timeline requirements\n\n\
                 Let me gather some details to give you the best quote possible!",
            )
            .with_quick_replies([
                "Logo Design",
                "YouTube Thumbnails",
                "Video Editing",
                "Complete Branding",
                "Channel Setup",
            ])
            .with_kind(MessageKind::Pricing),
        );

        templates.insert(
            Intent::Portfolio,
            ResponseTemplate::new(
                "🎨 **Portfolio Showcase**\n\nHere are some of my recent high-converting \
                 designs:\n\n**🔥 Top Performers:**\n• YouTube Thumbnail - 2.3M views\n\
                 • Logo Design - Generated $50K+ revenue\n• Video Edit - 500K+ engagement\n\n\
                 **📊 Success Metrics:**\n• 98% client satisfaction rate\n\
                 • Average 340% ROI increase\n• 24-48 hour delivery\n\n\
                 Would you like to see specific examples or case studies?",
            )
            .with_quick_replies([
                "Show Thumbnails",
                "Logo Examples",
                "Video Samples",
                "Case Studies",
                "Success Stories",
            ])
            .with_kind(MessageKind::Portfolio),
        );

        templates.insert(
            Intent::Planning,
            ResponseTemplate::new(
                "📋 **AI Project Planning**\n\nI'll create a personalized project roadmap \
                 for you:\n\n**🎯 What I'll analyze:**\n• Your brand goals & objectives\n\
                 • Target audience & market\n• Competitor analysis\n• Content strategy\n\
                 • Timeline optimization\n\n**📈 Expected outcomes:**\n\
                 • 3x faster project completion\n• 40% higher engagement rates\n\
                 • Professional brand consistency\n\nReady to start your project planning?",
            )
            .with_quick_replies([
                "Start Planning",
                "Brand Analysis",
                "Content Strategy",
                "Timeline Planning",
                "Competitor Research",
            ]),
        );

        templates.insert(
            Intent::Growth,
            ResponseTemplate::new(
                "📈 **Growth Strategy Consultation**\n\n**🚀 Proven Growth Methods:**\n\
                 • YouTube SEO optimization\n• Thumbnail A/B testing\n\
                 • Content calendar planning\n• Audience engagement tactics\n\
                 • Revenue optimization\n\n**📊 Track Record:**\n• 500+ channels grown\n\
                 • Average 300% subscriber increase\n• 2.5M+ total views generated\n\
                 • $1M+ revenue created for clients\n\nLet's discuss your growth goals!",
            )
            .with_quick_replies([
                "YouTube Growth",
                "Content Strategy",
                "SEO Optimization",
                "Revenue Growth",
                "Audience Building",
            ]),
        );

        templates.insert(
            Intent::Booking,
            ResponseTemplate::new(
                "📅 **Book Your Free Consultation**\n\n**🎯 What you'll get:**\n\
                 • 30-minute strategy session\n• Personalized growth plan\n\
                 • Project timeline & pricing\n• Exclusive design samples\n\
                 • Priority support access\n\n**⏰ Available slots:**\n\
                 • Today: 2 PM, 4 PM, 6 PM\n• Tomorrow: 10 AM, 2 PM, 4 PM\n\
                 • This week: Multiple slots\n\n**🎁 Bonus:** Free brand audit worth $299!",
            )
            .with_quick_replies([
                "Book Today",
                "Schedule Tomorrow",
                "View Calendar",
                "Quick Call",
                "WhatsApp Chat",
            ])
            .with_kind(MessageKind::Booking),
        );

        let fallback = ResponseTemplate::new(
            "🤖 **I'm here to help!** I can assist you with:\n\n**💡 Smart Features:**\n\
             • AI-powered project recommendations\n• Real-time pricing calculations\n\
             • Personalized portfolio suggestions\n• Growth strategy planning\n\
             • Instant consultation booking\n\n**🎯 Quick Actions:**",
        )
        .with_quick_replies([
            "Get Smart Quote",
            "View Portfolio",
            "Project Planning",
            "Book Consultation",
        ])
        .with_actions(quick_actions());

        let greeting = ResponseTemplate::new(
            "🚀 **Welcome!** I'm your AI-powered creative assistant, here to help you \
             succeed.\n\nI can help you with:\n• **Smart Project Planning** - AI-powered \
             project recommendations\n• **Dynamic Pricing** - Real-time cost calculations\n\
             • **Portfolio Analysis** - Personalized design suggestions\n\
             • **Growth Strategy** - YouTube & social media optimization\n\
             • **Instant Quotes** - Get accurate estimates in seconds\n\n\
             What would you like to explore today?",
        )
        .with_quick_replies([
            "Get Smart Quote",
            "View Portfolio",
            "Project Planning",
            "Growth Strategy",
            "Book Consultation",
        ]);

        let lead_intro = ResponseTemplate::new(
            "🚀 **Excellent choice!** Let's get you started with a personalized \
             approach.\n\nI'll need a few quick details to provide you with the most \
             accurate quote and recommendations:\n\n**First, what's your name?**",
        );

        let mut lead_prompts = HashMap::new();
        lead_prompts.insert(
            LeadStep::Email,
            ResponseTemplate::new(
                "**Great to meet you, {name}!** 📧\n\nWhat's your email address? I'll \
                 send you a detailed project proposal and exclusive design samples.",
            ),
        );
        lead_prompts.insert(
            LeadStep::Whatsapp,
            ResponseTemplate::new(
                "**Perfect!** 📱\n\nWhat's your WhatsApp number? This helps me send quick \
                 updates, share files, and provide instant support during your project.",
            ),
        );
        lead_prompts.insert(
            LeadStep::Project,
            ResponseTemplate::new(
                "**Awesome!** 🎨\n\nTell me about your project. What type of design work \
                 do you need? Be as specific as possible - this helps me give you the \
                 most accurate quote!",
            )
            .with_quick_replies([
                "Logo Design",
                "YouTube Thumbnails",
                "Video Editing",
                "Complete Branding",
                "Channel Setup",
            ]),
        );
        lead_prompts.insert(
            LeadStep::Budget,
            ResponseTemplate::new(
                "**Excellent choice!** 💰\n\nWhat's your budget range for this project? \
                 This helps me recommend the perfect package for your needs.",
            )
            .with_quick_replies([
                "Under $500",
                "$500-$1000",
                "$1000-$2500",
                "$2500+",
                "Not sure",
            ]),
        );
        lead_prompts.insert(
            LeadStep::Timeline,
            ResponseTemplate::new(
                "**Perfect!** ⏰\n\nWhen do you need this project completed? I offer \
                 flexible timelines to match your schedule.",
            )
            .with_quick_replies([
                "ASAP (Rush)",
                "Within 1 week",
                "1-2 weeks",
                "2-4 weeks",
                "Flexible",
            ]),
        );

        let summary = ResponseTemplate::new(
            "**🎉 Perfect! Here's your personalized project summary:**\n\n\
             **👤 Client:** {name}\n**📧 Email:** {email}\n**📱 WhatsApp:** {whatsapp}\n\
             **🎨 Project:** {project}\n**💰 Budget:** {budget}\n**⏰ Timeline:** {timeline}\n\n\
             **🚀 Next Steps:**\n• I'll send you a detailed proposal within 2 hours\n\
             • You'll receive exclusive design samples\n\
             • We'll schedule a free 30-minute strategy call\n\
             • You'll get priority support throughout the project\n\n\
             **🎁 Bonus:** Free brand audit worth $299 included!\n\n\
             Would you like to schedule your free consultation call now?",
        )
        .with_quick_replies([
            "Schedule Call",
            "View Portfolio",
            "WhatsApp Me",
            "Send Proposal",
            "I'm Ready",
        ])
        .with_actions([
            ActionButton::new("Book Consultation", ActionId::BookCall, ButtonVariant::Primary),
            ActionButton::new("View Portfolio", ActionId::Portfolio, ButtonVariant::Secondary),
            ActionButton::new("WhatsApp Chat", ActionId::WhatsApp, ButtonVariant::Outline),
        ]);

        let suggestions = vec![
            "Show me your best YouTube thumbnails".to_string(),
            "What's the cost for a complete brand identity?".to_string(),
            "How can I grow my YouTube channel?".to_string(),
            "I need a logo for my startup".to_string(),
            "What's your turnaround time?".to_string(),
            "Can you help with video editing?".to_string(),
            "Show me your portfolio".to_string(),
            "I want to book a consultation".to_string(),
        ];

        Self {
            greeting,
            templates,
            fallback,
            lead_intro,
            lead_prompts,
            summary,
            suggestions,
        }
    }
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}

/// The four quick-action buttons attached to the fallback template.
fn quick_actions() -> Vec<ActionButton> {
    vec![
        ActionButton::new("Smart Quote", ActionId::SmartQuote, ButtonVariant::Primary),
        ActionButton::new("Portfolio", ActionId::Portfolio, ButtonVariant::Secondary),
        ActionButton::new("Book Call", ActionId::Booking, ButtonVariant::Outline),
        ActionButton::new("Growth Plan", ActionId::GrowthStrategy, ButtonVariant::Outline),
    ]
}

/// Builder for catalogs that deviate from the default (localization, test
/// doubles). Starts from [`ResponseCatalog::default_catalog`] and replaces
/// individual pieces.
pub struct CatalogBuilder {
    catalog: ResponseCatalog,
}

impl CatalogBuilder {
    pub fn greeting(mut self, template: ResponseTemplate) -> Self {
        self.catalog.greeting = template;
        self
    }

    pub fn template(mut self, intent: Intent, template: ResponseTemplate) -> Self {
        self.catalog.templates.insert(intent, template);
        self
    }

    pub fn fallback(mut self, template: ResponseTemplate) -> Self {
        self.catalog.fallback = template;
        self
    }

    pub fn lead_intro(mut self, template: ResponseTemplate) -> Self {
        self.catalog.lead_intro = template;
        self
    }

    pub fn lead_prompt(mut self, step: LeadStep, template: ResponseTemplate) -> Self {
        self.catalog.lead_prompts.insert(step, template);
        self
    }

    pub fn summary(mut self, template: ResponseTemplate) -> Self {
        self.catalog.summary = template;
        self
    }

    pub fn suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalog.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> ResponseCatalog {
        self.catalog
    }
}
