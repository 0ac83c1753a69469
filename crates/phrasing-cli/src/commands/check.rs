//! Implementation of the `phrasing check` command.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use owo_colors::OwoColorize;
use phrasing::lint_table;
use serde::Serialize;

use crate::output::table::{format_summary_table, FileSummary};
use crate::tables::load_table;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Table files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code if any lint warning is found
    #[arg(long)]
    pub strict: bool,
}

/// JSON output format for a checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    values: usize,
    contexts: usize,
    warnings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut results: Vec<CheckJson> = Vec::new();
    let mut any_error = false;

    for path in &args.files {
        let file = path.display().to_string();
        match load_table(path) {
            Ok(table) => {
                let warnings = lint_table(&table)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                results.push(CheckJson {
                    file,
                    error: None,
                    values: table.values.len(),
                    contexts: table.contexts.len(),
                    warnings,
                });
            }
            Err(e) => {
                any_error = true;
                let message = e.to_string();
                if !args.json {
                    eprintln!("{:?}", e.into_report());
                }
                results.push(CheckJson {
                    file,
                    error: Some(message),
                    values: 0,
                    contexts: 0,
                    warnings: Vec::new(),
                });
            }
        }
    }

    let any_warning = results.iter().any(|r| !r.warnings.is_empty());

    if args.json {
        let json_output = serde_json::to_string_pretty(&results).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let summaries: Vec<FileSummary> = results
            .iter()
            .filter(|r| r.error.is_none())
            .map(|r| FileSummary {
                file: r.file.clone(),
                values: r.values,
                contexts: r.contexts,
                warnings: r.warnings.len(),
            })
            .collect();
        if !summaries.is_empty() {
            println!("{}", format_summary_table(&summaries));
        }

        for result in &results {
            if !result.warnings.is_empty() {
                println!("\nWarnings in {}:", result.file.bold());
                for warning in &result.warnings {
                    println!("  {} {}", "warning:".yellow(), warning);
                }
            }
        }
    }

    if any_error || (args.strict && any_warning) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
