//! Static lint rules for translation tables.
//!
//! Lints flag entries and partitions that the resolver can never select.
//! They do not change resolution behavior.

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::types::{PluralRange, TranslationTable, TranslationValue};

/// Where in a table a lint warning was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The table's top-level values.
    Values,
    /// The values of the context partition at this index.
    Context(usize),
}

impl Display for Scope {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Scope::Values => write!(f, "values"),
            Scope::Context(index) => write!(f, "contexts[{index}]"),
        }
    }
}

/// A problem found by [`lint_table`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintWarning {
    /// A range follows a range with no bounds and can never be selected.
    #[error("{scope}: '{phrase}' range #{index} ({range}) is unreachable after catch-all range #{catch_all}")]
    UnreachableRange {
        scope: Scope,
        phrase: String,
        index: usize,
        range: String,
        catch_all: usize,
    },

    /// A range whose low bound exceeds its high bound admits nothing.
    #[error("{scope}: '{phrase}' range #{index} has low bound {low} above high bound {high}")]
    InvertedRange {
        scope: Scope,
        phrase: String,
        index: usize,
        low: i64,
        high: i64,
    },

    /// A plural range list with no ranges always falls back to the phrase.
    #[error("{scope}: '{phrase}' has an empty range list")]
    EmptyRanges { scope: Scope, phrase: String },

    /// A partition without constraints matches every context, so no later
    /// partition is ever used.
    #[error("contexts[{index}] has no constraints and shadows {shadowed} later partition(s)")]
    CatchAllPartition { index: usize, shadowed: usize },

    /// A partition with the same constraints as an earlier one is never used.
    #[error("contexts[{index}] repeats the constraints of contexts[{first}] and is never used")]
    DuplicatePartition { index: usize, first: usize },
}

/// Runs all lint rules over `table`, returning warnings in a stable order.
///
/// # Example
///
/// ```
/// use phrasing::{PluralRange, TranslationTable, lint_table};
///
/// let table = TranslationTable::builder()
///     .value("%n items", vec![
///         PluralRange::new(None, None, "%n items"),
///         PluralRange::exactly(1, "%n item"),
///     ])
///     .build();
///
/// let warnings = lint_table(&table);
/// assert_eq!(warnings.len(), 1);
/// assert_eq!(
///     warnings[0].to_string(),
///     "values: '%n items' range #1 (1) is unreachable after catch-all range #0"
/// );
/// ```
pub fn lint_table(table: &TranslationTable) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    lint_values(Scope::Values, &table.values, &mut warnings);
    for (index, partition) in table.contexts.iter().enumerate() {
        lint_values(Scope::Context(index), &partition.values, &mut warnings);
    }
    lint_partitions(table, &mut warnings);
    warnings
}

fn lint_values(
    scope: Scope,
    values: &HashMap<String, TranslationValue>,
    warnings: &mut Vec<LintWarning>,
) {
    let mut phrases: Vec<&String> = values.keys().collect();
    phrases.sort();
    for phrase in phrases {
        if let Some(TranslationValue::PluralRanges(ranges)) = values.get(phrase) {
            lint_ranges(scope, phrase, ranges, warnings);
        }
    }
}

fn lint_ranges(scope: Scope, phrase: &str, ranges: &[PluralRange], warnings: &mut Vec<LintWarning>) {
    if ranges.is_empty() {
        warnings.push(LintWarning::EmptyRanges {
            scope,
            phrase: phrase.to_string(),
        });
        return;
    }

    let catch_all = ranges.iter().position(PluralRange::is_catch_all);
    for (index, range) in ranges.iter().enumerate() {
        if let Some(catch_all) = catch_all.filter(|&c| index > c) {
            warnings.push(LintWarning::UnreachableRange {
                scope,
                phrase: phrase.to_string(),
                index,
                range: range.to_string(),
                catch_all,
            });
            continue;
        }
        if let (Some(low), Some(high)) = (range.low, range.high)
            && low > high
        {
            warnings.push(LintWarning::InvertedRange {
                scope,
                phrase: phrase.to_string(),
                index,
                low,
                high,
            });
        }
    }
}

fn lint_partitions(table: &TranslationTable, warnings: &mut Vec<LintWarning>) {
    let contexts = &table.contexts;
    if let Some(index) = contexts.iter().position(|p| p.matches.is_empty()) {
        let shadowed = contexts.len() - index - 1;
        if shadowed > 0 {
            warnings.push(LintWarning::CatchAllPartition { index, shadowed });
        }
    }
    for (index, partition) in contexts.iter().enumerate() {
        if let Some(first) = contexts[..index]
            .iter()
            .position(|earlier| earlier.matches == partition.matches)
        {
            warnings.push(LintWarning::DuplicatePartition { index, first });
        }
    }
}
