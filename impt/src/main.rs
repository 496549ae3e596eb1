//! impt - Editor host CLI for the ImperialCode lexical analyzer.
//!
//! This is the main entry point for the impt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_init, run_lex, CheckArgs, InitArgs, LexArgs};
use config::Config;
use error::{ImptError, Result};

/// impt - ImperialCode lexical analysis from the command line
///
/// impt runs the ImperialCode lexer over source files and shows the
/// results table, the error panel, or coded diagnostics.
#[derive(Parser, Debug)]
#[command(name = "impt")]
#[command(author = "ImperialCode Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "ImperialCode lexical analysis from the command line", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "IMPT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "IMPT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "IMPT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the impt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run lexical analysis and show the results table
    ///
    /// Prints one row per token (Line, Lexeme, Token-type, Attribute)
    /// followed by the error panel. Lexical errors do not fail the command.
    Lex(LexCommand),

    /// Report lexical errors as diagnostics
    ///
    /// Prints each error with its code and a source snippet on stderr and
    /// exits with an error status if any were found.
    Check(CheckCommand),

    /// Write a default impt.toml
    Init(InitCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source files to analyze
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Leave comment tokens out of the table
    #[arg(long)]
    no_comments: bool,

    /// Do not print the error panel
    #[arg(long)]
    no_errors: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to initialize (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing impt.toml
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the impt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;
    debug!(path = ?cli.config, ?config, "configuration resolved");

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Events go to stderr so stdout carries only analysis results.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ImptError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => run_lex(lex_args(args, &config)),
        Commands::Check(args) => run_check(CheckArgs { files: args.files }),
        Commands::Init(args) => run_init(InitArgs {
            force: args.force,
            path: args.path,
        }),
    }
}

/// Merge lex flags over the display configuration.
fn lex_args(args: LexCommand, config: &Config) -> LexArgs {
    LexArgs {
        files: args.files,
        format: args.format.unwrap_or(config.display.format),
        show_comments: config.display.show_comments && !args.no_comments,
        show_errors: config.display.show_errors && !args.no_errors,
    }
}
