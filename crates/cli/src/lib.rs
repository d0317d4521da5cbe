//! # dialogspec CLI
//!
//! Command-line interface for dialogspec.
//!
//! This crate provides tools for checking dialog spec files without writing
//! any code.
//!
//! ## Commands
//!
//! - `validate` - Validate spec files or directories of spec files
//! - `info` - Display a summary of one dialog
//! - `schema` - Print the fields the dialog schema accepts
//!

pub mod commands;
pub mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

pub use commands::{FileReport, ReportedError, collect_spec_files, validate_file};
pub use config::{CONFIG_FILE_NAME, CliConfig, ConfigError, OutputFormat};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Arguments
// ============================================================================

/// Validate editor dialog configurations
#[derive(Debug, Parser)]
#[command(
    name = "dialogspec",
    version,
    about = "Validate editor dialog configurations",
    long_about = r#"Checks dialog spec files (JSON) against the dialog schema and reports
every invalid field by path.

Examples:
  dialogspec validate specs/                 # Validate every .json file under specs/
  dialogspec validate link.dialog.json --strict
  dialogspec info link.dialog.json
  dialogspec schema"#
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./dialogspec.toml when present)
    #[arg(short, long, global = true, env = "DIALOGSPEC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate spec files or directories
    Validate(ValidateArgs),
    /// Display a summary of one dialog
    Info(InfoArgs),
    /// Print the accepted fields
    Schema,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Files or directories to validate
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Treat lint warnings as failures
    #[arg(long, env = "DIALOGSPEC_STRICT")]
    pub strict: bool,

    /// Stop at the first invalid field in each file
    #[arg(long, env = "DIALOGSPEC_FAIL_FAST")]
    pub fail_fast: bool,

    /// Output format
    #[arg(short, long, value_enum, env = "DIALOGSPEC_FORMAT")]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Spec file to describe
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, env = "DIALOGSPEC_FORMAT")]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Parse the process arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// Run a parsed command line, returning whether it succeeded
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<bool> {
    let cwd = std::env::current_dir()?;
    let config = CliConfig::discover(cli.config.as_deref(), &cwd)?;
    debug!(?config, command = ?cli.command, "Running command");

    match cli.command {
        Commands::Validate(args) => {
            let config = config.with_overrides(args.strict, args.fail_fast, args.format);
            commands::validate_command(&args.paths, &config, out)
        }
        Commands::Info(args) => {
            let config = config.with_overrides(false, false, args.format);
            commands::info_command(&args.file, &config, out)?;
            Ok(true)
        }
        Commands::Schema => {
            commands::schema_command(out)?;
            Ok(true)
        }
    }
}
