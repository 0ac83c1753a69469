use serde::{Deserialize, Serialize};

use super::{PluralRange, RuleMap};

/// A translation entry stored under a phrase key.
///
/// Entries come in three shapes, and the resolver dispatches on the shape
/// when the phrase is looked up.
///
/// # Example
///
/// ```
/// use phrasing::{PluralRange, TranslationValue};
///
/// let hello: TranslationValue = "Hi".into();
/// assert_eq!(hello.as_literal(), Some("Hi"));
///
/// let comments = TranslationValue::from(vec![
///     PluralRange::exactly(1, "%n comment"),
///     PluralRange::new(None, None, "%n comments"),
/// ]);
/// assert_eq!(comments.as_ranges().map(<[_]>::len), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    /// A direct substitution template.
    Literal(String),

    /// Numeric ranges evaluated in declaration order; the first admitting
    /// range wins.
    PluralRanges(Vec<PluralRange>),

    /// Labeled variants (`zero`, `one`, `few`, ...) chosen by a pluralization
    /// extension. The labels are opaque to the resolver.
    RuleMap(RuleMap),
}

impl TranslationValue {
    /// Get this value as a literal template, if it is one.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            TranslationValue::Literal(text) => Some(text),
            _ => None,
        }
    }

    /// Get this value's plural ranges, if it has them.
    pub fn as_ranges(&self) -> Option<&[PluralRange]> {
        match self {
            TranslationValue::PluralRanges(ranges) => Some(ranges),
            _ => None,
        }
    }

    /// Get this value's labeled variants, if it is a rule map.
    pub fn as_rule_map(&self) -> Option<&RuleMap> {
        match self {
            TranslationValue::RuleMap(rules) => Some(rules),
            _ => None,
        }
    }

    /// Short name of the entry shape, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            TranslationValue::Literal(_) => "literal",
            TranslationValue::PluralRanges(_) => "plural ranges",
            TranslationValue::RuleMap(_) => "rule map",
        }
    }
}

impl From<String> for TranslationValue {
    fn from(text: String) -> Self {
        TranslationValue::Literal(text)
    }
}

impl From<&str> for TranslationValue {
    fn from(text: &str) -> Self {
        TranslationValue::Literal(text.to_string())
    }
}

impl From<Vec<PluralRange>> for TranslationValue {
    fn from(ranges: Vec<PluralRange>) -> Self {
        TranslationValue::PluralRanges(ranges)
    }
}

impl From<RuleMap> for TranslationValue {
    fn from(rules: RuleMap) -> Self {
        TranslationValue::RuleMap(rules)
    }
}
