//! phrasing CLI entry point.
//!
//! Provides command-line tools for working with JSON translation tables:
//! - `phrasing check` - Validate tables and report lint warnings
//! - `phrasing eval` - Resolve a phrase against tables

mod commands;
mod output;
mod tables;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_eval, CheckArgs, EvalArgs};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "PHRASING_LOG";

/// phrasing translation table tools.
#[derive(Debug, Parser)]
#[command(name = "phrasing")]
#[command(about = "phrasing translation table tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check translation tables for syntax errors and lint warnings
    Check(CheckArgs),
    /// Resolve a phrase against translation tables
    Eval(EvalArgs),
}

impl ColorWhen {
    /// Forced color state, or `None` to let `owo-colors` detect the terminal.
    fn forced(self) -> Option<bool> {
        match self {
            ColorWhen::Auto => None,
            ColorWhen::Always => Some(true),
            ColorWhen::Never => Some(false),
        }
    }
}

/// Apply the `--color` choice to table and warning output.
fn setup_colors(color_when: ColorWhen) {
    if let Some(enabled) = color_when.forced() {
        owo_colors::set_override(enabled);
    }
}

/// Install the stderr log subscriber. `PHRASING_LOG` overrides the level.
fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Eval(args) => run_eval(args),
    };

    let code = result.unwrap_or_else(|e| {
        eprintln!("{e:?}");
        exitcode::SOFTWARE
    });
    exit(code)
}
