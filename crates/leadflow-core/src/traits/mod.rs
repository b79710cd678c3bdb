// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for pluggable Leadflow components.

pub mod analytics;

pub use analytics::AnalyticsSink;
