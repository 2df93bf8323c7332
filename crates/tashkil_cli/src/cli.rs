//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Tashkil - Arabic diacritic linter
#[derive(Parser)]
#[command(name = "tashkil")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint files
    Lint {
        /// Files or glob patterns to lint
        #[arg(required_unless_present = "stdin")]
        patterns: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Auto-fix errors
        #[arg(long)]
        fix: bool,

        /// Preview fixes without applying them
        #[arg(long, requires = "fix")]
        dry_run: bool,

        /// Measure time spent in each rule
        #[arg(long)]
        timings: bool,

        /// Read text from standard input instead of files
        #[arg(long, conflicts_with = "patterns")]
        stdin: bool,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },

    /// List the built-in rules
    Rules,
}

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per finding plus a summary
    Text,
    /// JSON array of `{ path, diagnostics }`
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn dry_run_requires_fix() {
        let result = Cli::try_parse_from(["tashkil", "lint", "a.txt", "--dry-run"]);
        assert!(result.is_err());
    }

    #[test]
    fn stdin_replaces_patterns() {
        let cli = Cli::try_parse_from(["tashkil", "lint", "--stdin", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Lint {
                patterns,
                stdin,
                format,
                ..
            } => {
                assert!(patterns.is_empty());
                assert!(stdin);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected lint command"),
        }
    }

    #[test]
    fn lint_requires_patterns_without_stdin() {
        assert!(Cli::try_parse_from(["tashkil", "lint"]).is_err());
    }
}
