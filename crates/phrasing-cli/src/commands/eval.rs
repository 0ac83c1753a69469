//! Implementation of the `phrasing eval` command.

use std::path::PathBuf;

use phrasing::{CldrPlurals, Context, Placeholders, Translator};
use serde::Serialize;

use crate::tables::load_table;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Phrase key to resolve
    #[arg(long, required = true)]
    pub phrase: String,

    /// Table files (.json), merged in the given order
    #[arg(short, long = "table")]
    pub tables: Vec<PathBuf>,

    /// Quantity for plural selection and %n substitution
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Placeholders in name=value format (repeatable)
    #[arg(short = 'p', long = "placeholder", value_parser = parse_key_val)]
    pub placeholders: Vec<(String, String)>,

    /// Explicit context in key=value format (repeatable); replaces the global context
    #[arg(short = 'c', long = "context", value_parser = parse_key_val)]
    pub context: Vec<(String, String)>,

    /// Global context in key=value format (repeatable)
    #[arg(short = 'g', long = "global", value_parser = parse_key_val)]
    pub global: Vec<(String, String)>,

    /// Language tag whose CLDR rules select rule-map variants
    #[arg(long, env = "PHRASING_PLURAL_LANG")]
    pub plural_lang: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub phrase: String,
    pub result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let mut translator = Translator::new();

    for path in &args.tables {
        match load_table(path) {
            Ok(table) => translator.add(table),
            Err(e) => {
                eprintln!("{:?}", e.into_report());
                return Ok(exitcode::DATAERR);
            }
        }
    }

    for (key, value) in args.global {
        translator.set_context(key, value);
    }

    if let Some(lang) = &args.plural_lang {
        let plurals = CldrPlurals::try_new(lang).map_err(|e| miette::miette!("{}", e))?;
        translator.set_pluralization_extension(plurals);
    }

    let placeholders: Placeholders = args.placeholders.into_iter().collect();
    let context: Option<Context> =
        (!args.context.is_empty()).then(|| args.context.into_iter().collect());

    let result = translator.translate_text(
        &args.phrase,
        args.count,
        Some(&placeholders),
        context.as_ref(),
    );

    if args.json {
        let output = EvalResult {
            phrase: args.phrase,
            result,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).map_err(|e| miette::miette!("{}", e))?
        );
    } else {
        println!("{}", result);
    }
    Ok(exitcode::OK)
}
