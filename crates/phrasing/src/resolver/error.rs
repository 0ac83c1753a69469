//! Error types for the resolver's fallible helpers.

use thiserror::Error;

/// Errors that occur while building plural rules for a language.
#[derive(Debug, Error)]
pub enum PluralRulesError {
    /// The language tag could not be parsed.
    #[error("invalid language tag '{language}': {message}")]
    InvalidLanguage { language: String, message: String },

    /// No cardinal plural rules are available for the language.
    #[error("no plural rules for '{language}': {message}")]
    Unsupported { language: String, message: String },
}
