use std::collections::HashMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{Context, TranslationValue};

/// A set of translations that applies only when the caller's context
/// satisfies every key/value pair in `matches`.
///
/// # Example
///
/// ```
/// use phrasing::{ContextPartition, context};
///
/// let male = ContextPartition::builder()
///     .matches(context! { "gender" => "male" })
///     .value("%{name} updated their profile", "%{name} updated his profile")
///     .build();
///
/// assert!(male.is_satisfied_by(&context! { "gender" => "male", "locale" => "en" }));
/// assert!(!male.is_satisfied_by(&context! { "gender" => "female" }));
/// assert!(!male.is_satisfied_by(&context! {}));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct ContextPartition {
    /// Translations active under this partition, keyed by phrase.
    #[serde(default)]
    #[builder(field)]
    pub values: HashMap<String, TranslationValue>,

    /// Constraints a context must meet. Keys absent here are unconstrained.
    #[serde(default)]
    #[builder(default)]
    pub matches: Context,
}

impl<S: context_partition_builder::State> ContextPartitionBuilder<S> {
    /// Add a single translation to the partition.
    pub fn value(mut self, key: impl Into<String>, value: impl Into<TranslationValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ContextPartition {
    /// Check whether every constraint in `matches` holds for `context`.
    pub fn is_satisfied_by(&self, context: &Context) -> bool {
        self.matches
            .iter()
            .all(|(key, expected)| context.get(key) == Some(expected))
    }

    /// Look up a translation in this partition.
    pub fn get(&self, key: &str) -> Option<&TranslationValue> {
        self.values.get(key)
    }
}

/// An in-memory translation table: top-level values plus ordered context
/// partitions.
///
/// Tables are produced by whatever loads translation data; the resolver only
/// reads them.
///
/// # Example
///
/// ```
/// use phrasing::{ContextPartition, TranslationTable, context};
///
/// let mut table = TranslationTable::builder()
///     .value("Hello", "Hi")
///     .build();
///
/// table.merge(
///     TranslationTable::builder()
///         .value("Hello", "Hey")
///         .context(ContextPartition::builder().matches(context! { "tone" => "formal" }).build())
///         .build(),
/// );
///
/// assert_eq!(table.get("Hello").and_then(|v| v.as_literal()), Some("Hey"));
/// assert_eq!(table.contexts.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct TranslationTable {
    /// Translations used when no partition provides the phrase.
    #[serde(default)]
    #[builder(field)]
    pub values: HashMap<String, TranslationValue>,

    /// Partitions checked in order; the first satisfied one is used.
    #[serde(default)]
    #[builder(field)]
    pub contexts: Vec<ContextPartition>,
}

impl<S: translation_table_builder::State> TranslationTableBuilder<S> {
    /// Add a single top-level translation.
    pub fn value(mut self, key: impl Into<String>, value: impl Into<TranslationValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Append a context partition.
    pub fn context(mut self, partition: ContextPartition) -> Self {
        self.contexts.push(partition);
        self
    }
}

impl TranslationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a top-level translation.
    pub fn get(&self, key: &str) -> Option<&TranslationValue> {
        self.values.get(key)
    }

    /// Merge `other` into this table.
    ///
    /// Phrase keys from `other` overwrite existing ones. Partitions from
    /// `other` are appended, so partitions added earlier are matched first.
    pub fn merge(&mut self, other: TranslationTable) {
        self.values.extend(other.values);
        self.contexts.extend(other.contexts);
    }

    /// Find the first partition satisfied by `context`.
    pub fn partition_for(&self, context: &Context) -> Option<&ContextPartition> {
        self.contexts.iter().find(|p| p.is_satisfied_by(context))
    }

    /// Returns true if the table holds no values and no partitions.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.contexts.is_empty()
    }
}
