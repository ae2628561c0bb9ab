//! `dant`: lex, check and highlight DAN documents from the command line.
//!
//! Arguments are parsed with clap, logging goes to stderr through tracing,
//! and each subcommand is handed to its module under [`commands`].

mod commands;
mod config;
mod error;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs},
    highlight::{run_highlight, HighlightArgs},
    language::{run_language, LanguageArgs},
    tokens::{run_tokens, TokensArgs},
};
use config::Config;
use error::{DantError, Result};

/// Dant CLI - lex, check and highlight DAN documents
#[derive(Parser, Debug)]
#[command(name = "dant")]
#[command(author = "DAN Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for lexing, checking and highlighting DAN files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "DANT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "DANT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, env = "DANT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a document
    Tokens(TokensCommand),

    /// Check documents for lexical errors
    Check(CheckCommand),

    /// Print a document with syntax colors
    Highlight(HighlightCommand),

    /// Print the DAN language registration
    Language(LanguageCommand),
}

/// Tokens command arguments
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Document to lex
    file: PathBuf,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Also print the final Eof token
    #[arg(long)]
    include_eof: bool,
}

/// Check command arguments
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Files or directories to check
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Number of parallel jobs
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    jobs: Option<u16>,

    /// Stop after the first failing file
    #[arg(long)]
    fail_fast: bool,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Highlight command arguments
#[derive(Parser, Debug)]
struct HighlightCommand {
    /// Document to print
    file: PathBuf,
}

/// Language command arguments
#[derive(Parser, Debug)]
struct LanguageCommand {
    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        // Already rendered as a diagnostic.
        Err(DantError::Lex { .. }) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    config.verbose |= cli.verbose;

    init_logging(config.verbose, cli.no_color)?;

    let color = use_color(cli.no_color, &config);
    execute_command(cli.command, color, config)
}

/// Logs go to stderr so they never mix with command output.
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
        .map_err(|e| DantError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// An explicit path wins over the usual lookup.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Colors only go to a terminal, and only when neither the flag nor the
/// configuration turns them off.
fn use_color(no_color: bool, config: &Config) -> bool {
    !no_color && config.output.color && std::io::stdout().is_terminal()
}

/// Map parsed arguments onto the matching command module.
fn execute_command(command: Commands, color: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(
            TokensArgs {
                file: args.file,
                format: args.format,
                include_eof: args.include_eof,
                color,
            },
            config,
        ),
        Commands::Check(args) => run_check(
            CheckArgs {
                paths: args.paths,
                jobs: args.jobs.map(usize::from),
                fail_fast: args.fail_fast,
                format: args.format,
                color,
            },
            config,
        ),
        Commands::Highlight(args) => run_highlight(
            HighlightArgs {
                file: args.file,
                color,
            },
            config,
        ),
        Commands::Language(args) => run_language(
            LanguageArgs {
                format: args.format,
            },
            config,
        ),
    }
}
