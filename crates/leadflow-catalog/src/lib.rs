// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent classification and the response catalog for the Leadflow engine.
//!
//! This crate provides:
//! - [`IntentClassifier`]: ordered keyword-group classification (zero-cost,
//!   zero-latency, pure)
//! - [`ResponseCatalog`]: the immutable intent-to-template mapping injected
//!   into the chat engine at construction time
//!
//! Match order is data: the classifier walks its rule table top to bottom
//! and the first matching group wins, so overlapping inputs resolve
//! deterministically.

pub mod catalog;
pub mod intent;

pub use catalog::{CatalogBuilder, ResponseCatalog, ResponseTemplate};
pub use intent::{Intent, IntentClassifier, KeywordRule};
