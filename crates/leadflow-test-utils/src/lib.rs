// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Leadflow integration tests.
//!
//! Provides a recording analytics sink and a session harness for fast,
//! deterministic, CI-runnable tests without real delays or sinks.
//!
//! # Components
//!
//! - [`RecordingAnalytics`] - Analytics sink capturing events for assertion
//! - [`SessionHarness`] - Full session with default catalog and zero typing delay

pub mod harness;
pub mod mock_analytics;

pub use harness::SessionHarness;
pub use mock_analytics::RecordingAnalytics;
