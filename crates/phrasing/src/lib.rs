pub mod lint;
pub mod resolver;
pub mod types;

pub use lint::{LintWarning, lint_table};
pub use resolver::{
    Arg, CldrPlurals, PluralExtension, PluralRulesError, ResolvedArgs, TranslationStore,
    Translator, apply_placeholders, apply_quantity, original_text, render,
};
pub use types::{
    Context, ContextPartition, Placeholders, PluralRange, RuleMap, TranslationTable,
    TranslationValue,
};

/// Creates a `BTreeMap<String, String>` from key-value pairs.
///
/// Keys and values are converted with `ToString`. Used by [`placeholders!`],
/// [`context!`] and [`rule_map!`].
#[doc(hidden)]
#[macro_export]
macro_rules! string_map {
    {} => {
        ::std::collections::BTreeMap::<String, String>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::BTreeMap::<String, String>::new();
            $(
                map.insert($key.to_string(), $value.to_string());
            )+
            map
        }
    };
}

/// Creates a [`Placeholders`] map for `%{name}` substitution.
///
/// # Example
///
/// ```
/// use phrasing::placeholders;
///
/// let p = placeholders! { "name" => "Alice", "count" => 3 };
/// assert_eq!(p["name"], "Alice");
/// assert_eq!(p["count"], "3");
/// ```
#[macro_export]
macro_rules! placeholders {
    { $($tokens:tt)* } => { $crate::string_map! { $($tokens)* } };
}

/// Creates a [`Context`] map.
///
/// # Example
///
/// ```
/// use phrasing::context;
///
/// let c = context! { "gender" => "female" };
/// assert_eq!(c["gender"], "female");
/// ```
#[macro_export]
macro_rules! context {
    { $($tokens:tt)* } => { $crate::string_map! { $($tokens)* } };
}

/// Creates a [`RuleMap`] of labeled plural variants.
///
/// # Example
///
/// ```
/// use phrasing::{TranslationValue, rule_map};
///
/// let value = TranslationValue::from(rule_map! { "one" => "%n file", "other" => "%n files" });
/// assert_eq!(value.kind(), "rule map");
/// ```
#[macro_export]
macro_rules! rule_map {
    { $($tokens:tt)* } => { $crate::string_map! { $($tokens)* } };
}

/// Resolves a phrase with positional arguments.
///
/// Each argument is converted with `Arg::from`, so integers, map references,
/// `()` and `Option`s are accepted. See [`ResolvedArgs::from_slots`] for how
/// argument roles are inferred.
///
/// # Example
///
/// ```
/// use phrasing::{Translator, context, placeholders, translate};
///
/// let translator = Translator::new();
/// let names = placeholders! { "name" => "John" };
/// let male = context! { "gender" => "male" };
///
/// assert_eq!(translate!(translator, "Welcome %{name}", &names), "Welcome John");
/// assert_eq!(translate!(translator, "%n new", 2, &names, &male), "2 new");
/// assert_eq!(translate!(translator, "%{name}: %n", (), 5, &names), "John: 5");
/// ```
#[macro_export]
macro_rules! translate {
    ($translator:expr, $phrase:expr $(, $arg:expr)* $(,)?) => {
        $translator.translate($phrase, &[$($crate::Arg::from($arg)),*])
    };
}
