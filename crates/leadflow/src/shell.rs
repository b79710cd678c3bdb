// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `leadflow chat` command implementation.
//!
//! Hosts the chat engine in an interactive REPL with a colored prompt,
//! numbered quick-reply shortcuts, a live typing-progress indicator, and
//! readline history. One session per invocation; the transcript lives only
//! in memory for the lifetime of the process.

use std::str::FromStr;
use std::sync::Arc;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::info;

use leadflow_analytics::{NullAnalytics, TracingAnalytics};
use leadflow_catalog::ResponseCatalog;
use leadflow_config::LeadflowConfig;
use leadflow_core::{ActionId, AnalyticsSink, LeadflowError, Message};
use leadflow_engine::{ActionOutcome, ChatSession};

/// Runs the interactive chat REPL.
///
/// Quick replies on the latest bot message can be selected by number.
/// Action buttons are triggered with `/action <id>`; link actions print
/// the target URL instead of navigating.
pub async fn run_chat(config: LeadflowConfig) -> Result<(), LeadflowError> {
    let catalog = Arc::new(ResponseCatalog::default_catalog());
    let analytics: Arc<dyn AnalyticsSink> = if config.analytics.enabled {
        Arc::new(TracingAnalytics::new())
    } else {
        Arc::new(NullAnalytics::new())
    };

    let mut session = ChatSession::new(&config, catalog, analytics);

    // Set up readline editor.
    let mut rl = DefaultEditor::new()
        .map_err(|e| LeadflowError::Internal(format!("failed to initialize readline: {e}")))?;

    // Print welcome header and the seeded greeting.
    println!("{}", config.widget.name.bold().green());
    println!(
        "Type {} to exit, a number to pick a quick reply, or {} to press a button.\n",
        "/quit".yellow(),
        "/action <id>".yellow()
    );
    if let Some(greeting) = session.messages().last() {
        render_reply(greeting);
    }

    info!(session_id = session.session_id().0.as_str(), "chat shell started");

    // REPL loop.
    let prompt = format!("{}> ", "you".cyan());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if let Some(action) = trimmed.strip_prefix("/action ") {
                    handle_action_command(&mut session, action.trim()).await;
                    continue;
                }

                // A bare number selects that quick reply from the latest
                // bot message; the selection is sent as its literal text.
                let input = resolve_quick_reply(&session, trimmed);

                match send_with_progress(&mut session, &input).await {
                    Ok(reply) => render_reply(&reply),
                    Err(e) => eprintln!("{}: {e}", "error".red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    let exchanged = session.messages().len();
    println!("{}", format!("{exchanged} messages exchanged").dimmed());
    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Send one turn while rendering typing progress on a single line.
async fn send_with_progress(
    session: &mut ChatSession,
    input: &str,
) -> Result<Message, LeadflowError> {
    let mut updates = session.typing_updates();
    let watcher = tokio::spawn(async move {
        let mut was_active = false;
        while updates.changed().await.is_ok() {
            let state = *updates.borrow_and_update();
            if state.active {
                was_active = true;
                print!("\r{} {:>3}%", "typing".dimmed(), state.progress);
                let _ = std::io::Write::flush(&mut std::io::stdout());
            } else {
                if was_active {
                    // Indicator cleared: wipe the progress line.
                    print!("\r            \r");
                    let _ = std::io::Write::flush(&mut std::io::stdout());
                }
                break;
            }
        }
    });

    let reply = session.handle_input(input).await;
    if reply.is_err() {
        // A turn that failed before the typing sequence never touches the
        // channel; don't wait on it.
        watcher.abort();
    }
    let _ = watcher.await;
    reply
}

/// Resolve a bare number to the matching quick reply of the latest bot
/// message, or pass the input through unchanged.
fn resolve_quick_reply(session: &ChatSession, input: &str) -> String {
    if let Ok(n) = input.parse::<usize>() {
        if let Some(last_bot) = session.messages().iter().rev().find(|m| m.is_bot()) {
            if n >= 1 && n <= last_bot.quick_replies.len() {
                return last_bot.quick_replies[n - 1].clone();
            }
        }
    }
    input.to_string()
}

/// Trigger an action button by id.
async fn handle_action_command(session: &mut ChatSession, raw: &str) {
    let Ok(action) = ActionId::from_str(raw) else {
        eprintln!(
            "{}: unknown action `{raw}` (try smart_quote, portfolio, booking, growth_strategy, book_call, whatsapp)",
            "error".red()
        );
        return;
    };

    match session.handle_action(action).await {
        Ok(ActionOutcome::OpenLink(url)) => {
            println!("{} {}", "open:".yellow(), url.underline());
        }
        Ok(ActionOutcome::Replied(reply)) => render_reply(&reply),
        Err(e) => eprintln!("{}: {e}", "error".red()),
    }
}

/// Print a bot message with its quick replies, action buttons, and
/// suggestions.
fn render_reply(message: &Message) {
    println!("{} {}", "bot>".green().bold(), message.text);

    if !message.quick_replies.is_empty() {
        let numbered = message
            .quick_replies
            .iter()
            .enumerate()
            .map(|(i, r)| format!("[{}] {r}", i + 1))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", numbered.cyan());
    }

    if !message.actions.is_empty() {
        let buttons = message
            .actions
            .iter()
            .map(|a| format!("({}: {})", a.action, a.label))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}", buttons.yellow());
    }

    if !message.suggestions.is_empty() {
        println!("{}", "try asking:".dimmed());
        for suggestion in &message.suggestions {
            println!("  {}", suggestion.dimmed());
        }
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadflow_test_utils::SessionHarness;

    #[tokio::test]
    async fn bare_number_resolves_to_quick_reply_text() {
        let harness = SessionHarness::new();
        // Greeting quick reply 1 is "Get Smart Quote".
        assert_eq!(
            resolve_quick_reply(&harness.session, "1"),
            "Get Smart Quote"
        );
        // Out-of-range numbers and plain text pass through.
        assert_eq!(resolve_quick_reply(&harness.session, "99"), "99");
        assert_eq!(resolve_quick_reply(&harness.session, "hello"), "hello");
    }

    #[tokio::test]
    async fn quick_reply_resolution_tracks_latest_bot_message() {
        let mut harness = SessionHarness::new();
        harness.send("what's the price?").await.unwrap();
        assert_eq!(resolve_quick_reply(&harness.session, "1"), "Logo Design");
    }
}
