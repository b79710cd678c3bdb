// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typing-simulation scheduler.
//!
//! Introduces an artificial delay before each bot reply, reporting progress
//! 0..=100 on a watch channel the host can subscribe to for rendering. This
//! is a UI affordance, not a correctness mechanism: nothing else depends on
//! the exact timing, and an in-flight sequence is never cancelled by the
//! engine -- it always runs to completion and the reply is always appended.

use std::time::Duration;

use tokio::sync::watch;
use tracing::trace;

/// Observable typing-indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypingState {
    /// Whether the bot is currently "typing".
    pub active: bool,
    /// Progress 0..=100 through the simulated typing.
    pub progress: u8,
}

/// Cooperative, uncancellable delay sequence run before each bot reply.
///
/// The sequence walks progress from 0 to 100 in `step` increments, pausing
/// `delay / (100 / step)` between ticks, then pauses one further full
/// `delay`. The indicator stays active at 100 until [`clear`](Self::clear)
/// is called -- the engine clears it only after appending the reply.
pub struct TypingSimulator {
    delay: Duration,
    step: u8,
    tx: watch::Sender<TypingState>,
}

impl TypingSimulator {
    /// `step` must evenly divide 100; config validation enforces this.
    pub fn new(delay: Duration, step: u8) -> Self {
        let (tx, _) = watch::channel(TypingState::default());
        Self { delay, step, tx }
    }

    /// Subscribe to typing-state updates for rendering.
    pub fn subscribe(&self) -> watch::Receiver<TypingState> {
        self.tx.subscribe()
    }

    /// Run the full delay sequence. Returns only after the final full-delay
    /// pause; the state is left at `{active: true, progress: 100}`.
    pub async fn run(&self) {
        let step = self.step.clamp(1, 100);
        let ticks = u32::from(100 / step);
        let tick_pause = self.delay / ticks.max(1);

        let mut progress: u8 = 0;
        loop {
            // send_replace updates the value even with no subscribers, so
            // state() stays accurate when nothing renders the indicator.
            self.tx.send_replace(TypingState {
                active: true,
                progress,
            });
            trace!(progress, "typing progress");
            if progress >= 100 {
                break;
            }
            tokio::time::sleep(tick_pause).await;
            progress = progress.saturating_add(step).min(100);
        }

        tokio::time::sleep(self.delay).await;
    }

    /// Clear the indicator. Called by the engine after the reply has been
    /// appended to the store.
    pub fn clear(&self) {
        self.tx.send_replace(TypingState::default());
    }

    /// Current state snapshot.
    pub fn state(&self) -> TypingState {
        *self.tx.borrow()
    }
}
