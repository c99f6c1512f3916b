//! api-lint CLI tool.
//!
//! Usage:
//! ```bash
//! api-lint [OPTIONS] <SPEC_FILE>
//! api-lint list-rules
//! api-lint init
//! ```

use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Checks Swagger/OpenAPI documents against RESTful API guidelines
#[derive(Parser)]
#[command(name = "api-lint")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    check: CheckArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Arguments for checking a document.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Swagger/OpenAPI document to check (YAML or JSON)
    #[arg(value_name = "SPEC_FILE")]
    spec_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Only run specific rules (comma-separated names or codes)
    #[arg(long)]
    rules: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// One-line-per-violation compact format.
    Compact,
    /// JSON output.
    Json,
}

/// Exit status for usage, load and configuration errors.
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise stay quiet unless asked.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Some(Commands::ListRules) => commands::list_rules::run().map(|()| ExitCode::SUCCESS),
        Some(Commands::Init { force }) => commands::init::run(force).map(|()| ExitCode::SUCCESS),
        None => {
            let Some(spec_file) = cli.check.spec_file.as_deref() else {
                Cli::command()
                    .error(
                        clap::error::ErrorKind::MissingRequiredArgument,
                        "a SPEC_FILE to check is required",
                    )
                    .exit();
            };
            commands::check::run(spec_file, &cli.check, cli.verbose, cli.config.as_deref())
        }
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            report(err);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Prints an error to stderr, with source context for document errors.
fn report(err: anyhow::Error) {
    match err.downcast::<api_lint_core::LoadError>() {
        Ok(load_error) => eprintln!("{:?}", miette::Report::new(load_error)),
        Err(err) => eprintln!("Error: {err:?}"),
    }
}
