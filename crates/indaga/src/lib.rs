//! Library interface for the `indaga` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man pages
//! and shell completions.

pub mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, indaga_core=trace)
    INDAGA_LOG_PATH        Explicit log file path
    INDAGA_LOG_DIR         Log directory (daily JSONL files)
    INDAGA_<FIELD>         Override any config field (e.g., INDAGA_TOP_N=10)
";
/// Command-line interface definition for indaga.
#[derive(Parser)]
#[command(name = "indaga")]
#[command(about = "Rank and visualize the keywords of Spanish research text", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank the most frequent words of a text
    Keywords(commands::keywords::KeywordsArgs),

    /// Render the ranked words as a bar chart or HTML table
    Render(commands::render::RenderArgs),

    /// Compress a text to a capped bag of its top words
    Reduce(commands::reduce::ReduceArgs),

    /// Search a topic and visualize its keywords
    Research(commands::research::ResearchArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn stdin_dash_parses_as_file() {
        let cli = Cli::try_parse_from(["indaga", "keywords", "-", "--top", "3"]).unwrap();
        match cli.command {
            Some(Commands::Keywords(args)) => {
                assert_eq!(args.file.as_deref().map(|p| p.as_str()), Some("-"));
                assert_eq!(args.top, Some(3));
            }
            _ => panic!("expected keywords"),
        }
    }

    #[test]
    fn render_accepts_format() {
        let cli =
            Cli::try_parse_from(["indaga", "render", "notas.txt", "--format", "chart"]).unwrap();
        match cli.command {
            Some(Commands::Render(args)) => {
                assert_eq!(args.format, Some(indaga_core::OutputFormat::Chart));
            }
            _ => panic!("expected render"),
        }
    }
}
