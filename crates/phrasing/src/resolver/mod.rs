//! Phrase resolution.
//!
//! This module provides the translation store, the resolver that turns a
//! phrase key plus call arguments into display text, substitution helpers,
//! and the pluralization extension hook for rule-map entries.

mod args;
mod error;
mod plural;
mod store;
mod substitute;
mod translator;

pub use args::{Arg, ResolvedArgs};
pub use error::PluralRulesError;
pub use plural::{CldrPlurals, PluralExtension};
pub use store::TranslationStore;
pub use substitute::{apply_placeholders, apply_quantity, original_text, render};
pub use translator::Translator;
