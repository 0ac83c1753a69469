//! Pluralization extensions for rule-map entries.
//!
//! A rule map carries labeled variants (`zero`, `one`, `few`, ...). The
//! resolver never interprets those labels itself; it hands the map to the
//! registered [`PluralExtension`], which returns the template to render.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use icu_locale_core::Locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

use crate::resolver::PluralRulesError;
use crate::types::{Placeholders, RuleMap};

/// Strategy choosing a template from a rule map.
///
/// The returned template still goes through quantity and placeholder
/// substitution, so it may contain `%n` and `%{name}` tokens.
///
/// Closures with the matching signature implement this trait:
///
/// ```
/// use phrasing::{Placeholders, RuleMap, TranslationTable, Translator, rule_map};
///
/// let mut translator = Translator::with_table(
///     TranslationTable::builder()
///         .value("%n files", rule_map! { "one" => "%n file", "other" => "%n files" })
///         .build(),
/// );
/// translator.set_pluralization_extension(
///     |_: &str, n: Option<i64>, _: Option<&Placeholders>, variants: &RuleMap| {
///         let label = if n == Some(1) { "one" } else { "other" };
///         variants.get(label).cloned().unwrap_or_default()
///     },
/// );
///
/// assert_eq!(translator.translate_text("%n files", Some(1), None, None), "1 file");
/// assert_eq!(translator.translate_text("%n files", Some(3), None, None), "3 files");
/// ```
pub trait PluralExtension {
    /// Choose the template for `phrase` given `quantity` and the rule map.
    fn resolve_plural(
        &self,
        phrase: &str,
        quantity: Option<i64>,
        placeholders: Option<&Placeholders>,
        variants: &RuleMap,
    ) -> String;
}

impl<F> PluralExtension for F
where
    F: Fn(&str, Option<i64>, Option<&Placeholders>, &RuleMap) -> String,
{
    fn resolve_plural(
        &self,
        phrase: &str,
        quantity: Option<i64>,
        placeholders: Option<&Placeholders>,
        variants: &RuleMap,
    ) -> String {
        self(phrase, quantity, placeholders, variants)
    }
}

/// Label used when no more specific variant applies.
const OTHER: &str = "other";

/// Label preferred for a quantity of zero when explicit zero is enabled.
const ZERO: &str = "zero";

/// Translate a `PluralCategory` enum to its rule-map label.
fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// A [`PluralExtension`] selecting variants by CLDR cardinal plural rules.
///
/// Selection order:
/// 1. `zero`, when the quantity is 0 and explicit zero is enabled (the default)
/// 2. the CLDR category of the quantity (`other` when there is no quantity)
/// 3. `other`
/// 4. the phrase key itself
///
/// # Example
///
/// ```
/// use phrasing::{CldrPlurals, PluralExtension, rule_map};
///
/// let russian = CldrPlurals::try_new("ru").unwrap();
/// let variants = rule_map! {
///     "one" => "%n файл",
///     "few" => "%n файла",
///     "many" => "%n файлов",
///     "other" => "%n файла",
/// };
///
/// assert_eq!(russian.category(21), "one");
/// assert_eq!(russian.resolve_plural("%n files", Some(3), None, &variants), "%n файла");
/// assert_eq!(russian.resolve_plural("%n files", Some(11), None, &variants), "%n файлов");
/// ```
pub struct CldrPlurals {
    language: String,
    rules: PluralRules,
    explicit_zero: bool,
}

impl CldrPlurals {
    /// Load cardinal plural rules for a BCP-47 language tag.
    pub fn try_new(language: &str) -> Result<Self, PluralRulesError> {
        let locale = language
            .parse::<Locale>()
            .map_err(|e| PluralRulesError::InvalidLanguage {
                language: language.to_string(),
                message: e.to_string(),
            })?;
        let rules = PluralRules::try_new(locale.into(), PluralRuleType::Cardinal.into()).map_err(
            |e| PluralRulesError::Unsupported {
                language: language.to_string(),
                message: e.to_string(),
            },
        )?;
        Ok(Self {
            language: language.to_string(),
            rules,
            explicit_zero: true,
        })
    }

    /// Enable or disable preferring a `zero` variant for a quantity of 0.
    pub fn with_explicit_zero(mut self, explicit_zero: bool) -> Self {
        self.explicit_zero = explicit_zero;
        self
    }

    /// The language tag these rules were built for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// CLDR plural category label for `n`.
    pub fn category(&self, n: i64) -> &'static str {
        category_str(self.rules.category_for(n))
    }

    /// Template that would be chosen for `quantity` from `variants`.
    pub fn select<'a>(&self, quantity: Option<i64>, variants: &'a RuleMap) -> Option<&'a str> {
        if self.explicit_zero && quantity == Some(0) {
            if let Some(text) = variants.get(ZERO) {
                return Some(text);
            }
        }
        let category = quantity.map_or(OTHER, |n| self.category(n));
        variants
            .get(category)
            .or_else(|| variants.get(OTHER))
            .map(String::as_str)
    }
}

impl PluralExtension for CldrPlurals {
    fn resolve_plural(
        &self,
        phrase: &str,
        quantity: Option<i64>,
        _placeholders: Option<&Placeholders>,
        variants: &RuleMap,
    ) -> String {
        self.select(quantity, variants)
            .unwrap_or(phrase)
            .to_string()
    }
}

impl Debug for CldrPlurals {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CldrPlurals")
            .field("language", &self.language)
            .field("explicit_zero", &self.explicit_zero)
            .finish_non_exhaustive()
    }
}
