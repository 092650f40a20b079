//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for moot
#[derive(Parser, Debug)]
#[command(name = "moot")]
#[command(author, version, about = "Multi-model chat - route to one model or let them all discuss")]
#[command(long_about = r#"
Moot routes your message to one of several OpenRouter-hosted models, or,
in discussion mode, fans it out to all of them and has a moderator model
synthesize one combined answer.

Without a message argument, moot starts an interactive chat. Per-conversation
state (chosen model, tone, discussion flag, history) is keyed by the
conversation id.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./moot.toml         Project-level config
3. ~/.config/moot/config.toml   Global config

Example:
  moot "What's the best way to handle errors in Rust?"
  moot --conversation work "Summarize yesterday's thread"
  moot
"#)]
pub struct Cli {
    /// The message to send (omit to start interactive chat)
    pub message: Option<String>,

    /// Conversation id whose state and history this session uses
    #[arg(short = 'c', long, value_name = "ID", default_value = "local")]
    pub conversation: String,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
