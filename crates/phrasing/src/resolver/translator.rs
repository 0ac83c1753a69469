//! The user-facing resolver.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use bon::bon;
use tracing::{debug, trace};

use crate::resolver::args::{Arg, ResolvedArgs};
use crate::resolver::plural::PluralExtension;
use crate::resolver::store::TranslationStore;
use crate::resolver::substitute::{apply_placeholders, original_text, render};
use crate::types::{Context, Placeholders, TranslationTable, TranslationValue};

/// Resolves phrase keys into display strings.
///
/// A translator owns a [`TranslationStore`] and an optional
/// [`PluralExtension`]. Resolution never fails: when no table is loaded, no
/// entry matches, or an entry's shape does not fit the call, the phrase key
/// itself is rendered with the quantity and placeholders substituted.
///
/// # Example
///
/// ```
/// use phrasing::{PluralRange, TranslationTable, Translator, placeholders};
///
/// let mut translator = Translator::with_table(
///     TranslationTable::builder()
///         .value("Hello", "Hi")
///         .value("%n comments", vec![
///             PluralRange::exactly(1, "%n comment"),
///             PluralRange::new(None, None, "%n comments"),
///         ])
///         .build(),
/// );
///
/// assert_eq!(translator.translate_text("Hello", None, None, None), "Hi");
/// assert_eq!(translator.translate_text("%n comments", Some(1), None, None), "1 comment");
///
/// let names = placeholders! { "name" => "John" };
/// assert_eq!(
///     translator.phrase("Welcome %{name}").placeholders(&names).resolve(),
///     "Welcome John"
/// );
///
/// translator.reset_data();
/// assert_eq!(translator.translate_text("Hello", None, None, None), "Hello");
/// ```
pub struct Translator {
    store: TranslationStore,
    extension: Option<Box<dyn PluralExtension>>,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::builder().build()
    }
}

#[bon]
impl Translator {
    /// Build a translator from an optional table, global context and
    /// pluralization extension.
    ///
    /// ```
    /// use phrasing::{CldrPlurals, TranslationTable, Translator, context};
    ///
    /// let translator = Translator::builder()
    ///     .table(TranslationTable::new())
    ///     .global_context(context! { "gender" => "female" })
    ///     .extension(Box::new(CldrPlurals::try_new("en").unwrap()))
    ///     .build();
    ///
    /// assert!(translator.table().is_some());
    /// assert!(translator.has_pluralization_extension());
    /// ```
    #[builder(start_fn = builder, finish_fn = build)]
    pub fn from_parts(
        table: Option<TranslationTable>,
        #[builder(default)] global_context: Context,
        extension: Option<Box<dyn PluralExtension>>,
    ) -> Self {
        let mut store = TranslationStore::new();
        store.add_optional(table);
        for (key, value) in global_context {
            store.set_context(key, value);
        }
        Self { store, extension }
    }

    /// Resolve a phrase through a typed builder.
    ///
    /// Unset arguments behave as `None` in [`Translator::translate_text`].
    ///
    /// ```
    /// use phrasing::{Translator, placeholders};
    ///
    /// let translator = Translator::new();
    /// let names = placeholders! { "name" => "Jane" };
    ///
    /// let text = translator
    ///     .phrase("%{name} has %n messages")
    ///     .quantity(3)
    ///     .placeholders(&names)
    ///     .resolve();
    /// assert_eq!(text, "Jane has 3 messages");
    /// ```
    #[builder(finish_fn = resolve)]
    pub fn phrase(
        &self,
        #[builder(start_fn)] key: &str,
        quantity: Option<i64>,
        placeholders: Option<&Placeholders>,
        context: Option<&Context>,
    ) -> String {
        self.translate_text(key, quantity, placeholders, context)
    }
}

impl Translator {
    /// Create a translator with no table and an empty global context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a translator holding `table`.
    pub fn with_table(table: TranslationTable) -> Self {
        Translator::builder().table(table).build()
    }

    // =========================================================================
    // Store Management
    // =========================================================================

    /// The underlying store.
    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    /// The loaded table, if any.
    pub fn table(&self) -> Option<&TranslationTable> {
        self.store.table()
    }

    /// Load `table`, or merge it into the table already held.
    ///
    /// See [`TranslationStore::add`].
    pub fn add(&mut self, table: TranslationTable) {
        self.store.add(table);
    }

    /// The global context used by calls without an explicit context.
    pub fn global_context(&self) -> &Context {
        self.store.global_context()
    }

    /// Set a global context value.
    pub fn set_context(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.store.set_context(key, value);
    }

    /// Remove a global context value.
    pub fn clear_context(&mut self, key: &str) {
        self.store.clear_context(key);
    }

    /// Drop the loaded table. The global context is kept.
    pub fn reset_data(&mut self) {
        self.store.reset_data();
    }

    /// Empty the global context. The table is kept.
    pub fn reset_context(&mut self) {
        self.store.reset_context();
    }

    /// Drop the table and empty the global context.
    pub fn reset(&mut self) {
        self.store.reset();
    }

    // =========================================================================
    // Pluralization Extension
    // =========================================================================

    /// Register the extension used for rule-map entries, replacing any
    /// previous one.
    pub fn set_pluralization_extension(&mut self, extension: impl PluralExtension + 'static) {
        debug!("Registered pluralization extension");
        self.extension = Some(Box::new(extension));
    }

    /// Remove the registered extension.
    pub fn clear_pluralization_extension(&mut self) {
        self.extension = None;
    }

    /// Returns true if an extension is registered.
    pub fn has_pluralization_extension(&self) -> bool {
        self.extension.is_some()
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve `phrase` with positionally inferred arguments.
    ///
    /// See [`ResolvedArgs::from_slots`] for the inference rules. The
    /// [`translate!`](crate::translate) macro converts arguments for you.
    pub fn translate(&self, phrase: &str, args: &[Arg<'_>]) -> String {
        let args = ResolvedArgs::from_slots(args);
        self.translate_text(phrase, args.quantity, args.placeholders, args.context)
    }

    /// Resolve `phrase` into a display string.
    ///
    /// With `context` set to `None`, the global context is used. The first
    /// context partition satisfied by the context is searched first, then
    /// the table's top-level values, then the phrase key itself is rendered.
    pub fn translate_text(
        &self,
        phrase: &str,
        quantity: Option<i64>,
        placeholders: Option<&Placeholders>,
        context: Option<&Context>,
    ) -> String {
        let context = context.unwrap_or_else(|| self.store.global_context());

        let Some(table) = self.store.table() else {
            trace!(phrase, "No translation table loaded, using phrase");
            return original_text(phrase, quantity, placeholders);
        };

        let from_partition = table
            .partition_for(context)
            .and_then(|partition| partition.get(phrase))
            .and_then(|value| self.render_value(phrase, value, quantity, placeholders));

        from_partition
            .or_else(|| {
                table
                    .get(phrase)
                    .and_then(|value| self.render_value(phrase, value, quantity, placeholders))
            })
            .unwrap_or_else(|| {
                trace!(phrase, ?quantity, "No matching translation, using phrase");
                original_text(phrase, quantity, placeholders)
            })
    }

    /// Render a found entry, or `None` when its shape does not fit the call.
    fn render_value(
        &self,
        phrase: &str,
        value: &TranslationValue,
        quantity: Option<i64>,
        placeholders: Option<&Placeholders>,
    ) -> Option<String> {
        match value {
            TranslationValue::RuleMap(variants) => Some(match &self.extension {
                Some(extension) => {
                    let text = extension.resolve_plural(phrase, quantity, placeholders, variants);
                    // Extension templates always get a quantity; a missing one renders as 0.
                    render(&text, Some(quantity.unwrap_or(0)), placeholders)
                }
                None => {
                    trace!(phrase, "Rule map without pluralization extension");
                    original_text(phrase, quantity, placeholders)
                }
            }),
            TranslationValue::Literal(text) => {
                quantity.is_none().then(|| apply_placeholders(text, placeholders))
            }
            TranslationValue::PluralRanges(ranges) => ranges
                .iter()
                .find(|range| range.admits(quantity))
                .map(|range| render(&range.text, quantity, placeholders)),
        }
    }
}

impl Debug for Translator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Translator")
            .field("store", &self.store)
            .field("has_extension", &self.extension.is_some())
            .finish()
    }
}
