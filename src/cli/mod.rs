//! CLI module for examples-to-run
//!
//! ## Commands
//!
//! - `list` - Print the example lists (built-in snapshot or a manifest)
//! - `check <file>...` - Validate manifests and report every problem
//! - `plan` - Show the invocations a harness pass would schedule
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::config::LoadConfig;
use crate::render::{ListKind, OutputFormat, PlanFormat};
use crate::version::EXAMPLES_TO_RUN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Inspect and validate the list of examples the test harness keeps runnable
#[derive(Parser, Debug)]
#[command(name = "examples-to-run")]
#[command(version = EXAMPLES_TO_RUN_VERSION)]
#[command(about = "Inspect and validate the examples-to-run manifest", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub load: LoadArgs,
}

/// Manifest loading options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Variable holding the compiled-example list
    #[arg(long, global = true, value_name = "NAME", default_value = examples_core::snapshot::COMPILED_LIST_NAME)]
    pub compiled_list: String,

    /// Variable holding the script-example list
    #[arg(long, global = true, value_name = "NAME", default_value = examples_core::snapshot::SCRIPT_LIST_NAME)]
    pub script_list: String,

    /// Treat assignments to any other variable as errors
    #[arg(long, global = true)]
    pub strict: bool,
}

impl LoadArgs {
    pub fn to_config(&self) -> LoadConfig {
        LoadConfig::new()
            .with_compiled_list(self.compiled_list.clone())
            .with_script_list(self.script_list.clone())
            .with_reject_unknown_lists(self.strict)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the example lists
    List {
        /// Manifest to read (default: the built-in snapshot)
        #[arg(short, long, value_name = "FILE")]
        manifest: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Which lists to print
        #[arg(short, long, value_enum, default_value_t = ListKind::All)]
        kind: ListKind,
    },

    /// Validate manifest files
    Check {
        /// Manifests to validate
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Show the invocations a harness pass would schedule
    Plan {
        /// Manifest to read (default: the built-in snapshot)
        #[arg(short, long, value_name = "FILE")]
        manifest: Option<PathBuf>,
        /// Plan a memory-checker pass
        #[arg(long)]
        valgrind: bool,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = PlanFormat::Text)]
        format: PlanFormat,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.load.to_config();
    tracing::debug!(?config, "loader configuration");

    match cli.command {
        Command::List { manifest, format, kind } => commands::list(manifest.as_deref(), format, kind, &config),
        Command::Check { files } => commands::check(&files, &config),
        Command::Plan {
            manifest,
            valgrind,
            format,
        } => commands::plan(manifest.as_deref(), valgrind, format, &config),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_list_defaults() {
        let cli = Cli::try_parse_from(["examples-to-run", "list"]).unwrap();
        if let Command::List { manifest, format, kind } = cli.command {
            assert!(manifest.is_none());
            assert_eq!(format, OutputFormat::Text);
            assert_eq!(kind, ListKind::All);
        } else {
            panic!("Expected List command");
        }
        assert_eq!(cli.load.to_config(), LoadConfig::default());
    }

    #[test]
    fn test_cli_parse_list_options() {
        let cli = Cli::try_parse_from([
            "examples-to-run",
            "list",
            "--manifest",
            "test/examples-to-run.py",
            "--format",
            "markdown",
            "--kind",
            "compiled",
        ])
        .unwrap();
        if let Command::List { manifest, format, kind } = cli.command {
            assert_eq!(manifest, Some(PathBuf::from("test/examples-to-run.py")));
            assert_eq!(format, OutputFormat::Markdown);
            assert_eq!(kind, ListKind::Compiled);
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_cli_parse_check_requires_files() {
        assert!(Cli::try_parse_from(["examples-to-run", "check"]).is_err());
        let cli = Cli::try_parse_from(["examples-to-run", "check", "a.py", "b.py"]).unwrap();
        if let Command::Check { files } = cli.command {
            assert_eq!(files.len(), 2);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_plan() {
        let cli = Cli::try_parse_from(["examples-to-run", "plan", "--valgrind", "-f", "json"]).unwrap();
        if let Command::Plan { valgrind, format, .. } = cli.command {
            assert!(valgrind);
            assert_eq!(format, PlanFormat::Json);
        } else {
            panic!("Expected Plan command");
        }
    }

    #[test]
    fn test_cli_global_load_args_after_subcommand() {
        let cli = Cli::try_parse_from([
            "examples-to-run",
            "check",
            "a.py",
            "--strict",
            "--compiled-list",
            "c_examples",
        ])
        .unwrap();
        let config = cli.load.to_config();
        assert!(config.reject_unknown_lists);
        assert_eq!(config.compiled_list, "c_examples");
        assert_eq!(config.script_list, "python_examples");
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["examples-to-run", "list", "--format", "yaml"]).is_err());
    }
}
