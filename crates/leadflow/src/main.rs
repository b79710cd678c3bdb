// SPDX-FileCopyrightText: 2026 Leadflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Leadflow - a conversational lead-capture chat widget for the terminal.
//!
//! This is the binary entry point for the Leadflow demo host.

use clap::{Parser, Subcommand};

mod shell;

/// Leadflow - a conversational lead-capture chat widget.
#[derive(Parser, Debug)]
#[command(name = "leadflow", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch an interactive chat session.
    Chat,
    /// Print the resolved configuration.
    Config,
}

#[tokio::main]
async fn main() {
    // Load and validate configuration at startup.
    let config = match leadflow_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            leadflow_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    // Install the tracing subscriber; RUST_LOG overrides widget.log_level.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.widget.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli_command() {
        Some(Commands::Config) => match toml::to_string_pretty(&config) {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => {
                eprintln!("error: failed to render config: {e}");
                std::process::exit(1);
            }
        },
        // Chat is the default when no subcommand is given.
        Some(Commands::Chat) | None => {
            if let Err(e) = shell::run_chat(config).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn cli_command() -> Option<Commands> {
    Cli::parse().command
}

#[cfg(test)]
mod tests {
    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed).
        let config = leadflow_config::load_and_validate()
            .expect("default config should be valid");
        assert_eq!(config.widget.name, "leadflow");
    }
}
