use std::collections::BTreeMap;

mod range;
mod table;
mod value;

pub use range::PluralRange;
pub use table::{ContextPartition, TranslationTable};
pub use value::TranslationValue;

/// Named substitutions applied to `%{name}` tokens.
pub type Placeholders = BTreeMap<String, String>;

/// Contextual dimensions (e.g. `gender`) used to select a [`ContextPartition`].
pub type Context = BTreeMap<String, String>;

/// Labeled template variants whose selection is left to a
/// [`PluralExtension`](crate::PluralExtension).
pub type RuleMap = BTreeMap<String, String>;
