use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::modes::TranslationMode;

#[derive(Parser, Debug)]
#[command(name = "crushor")]
#[command(version)]
#[command(about = "What does your crush really mean?", long_about = None)]
pub struct Cli {
    /// Translate this message once and print the result (no UI)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Translation mode (defaults to the configured mode)
    #[arg(long, value_enum)]
    pub mode: Option<TranslationMode>,

    /// Path to an extra configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format for one-shot mode
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, requires = "message")]
    pub output_format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration
    Init,
    /// List translation modes
    Modes,
    /// Show version information
    Version,
    /// Check configuration and API key
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON structured output
    Json,
}
