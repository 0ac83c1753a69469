//! Translation store: the loaded table plus the global context.

use tracing::debug;

use crate::types::{Context, TranslationTable};

/// Holds the translation table used for lookups and the global context
/// applied when a call site supplies none.
///
/// The table may be absent, in which case every lookup falls back to the
/// phrase key. The table and the global context are cleared independently.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    /// Merged translation data, or `None` when nothing is loaded.
    table: Option<TranslationTable>,
    /// Default context for calls without an explicit one.
    global_context: Context,
}

impl TranslationStore {
    /// Create an empty store with no table and an empty global context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `table`.
    pub fn with_table(table: TranslationTable) -> Self {
        Self {
            table: Some(table),
            global_context: Context::new(),
        }
    }

    /// Load `table`, or merge it into the table already held.
    ///
    /// With no table held, `table` is adopted as-is. Otherwise phrase keys
    /// overwrite existing entries and context partitions are appended after
    /// the existing ones.
    pub fn add(&mut self, table: TranslationTable) {
        match &mut self.table {
            None => {
                debug!(
                    values = table.values.len(),
                    contexts = table.contexts.len(),
                    "Loaded translation table"
                );
                self.table = Some(table);
            }
            Some(existing) => {
                debug!(
                    values = table.values.len(),
                    contexts = table.contexts.len(),
                    "Merging translation table"
                );
                existing.merge(table);
            }
        }
    }

    /// Load `table` if present; `None` leaves the store untouched.
    pub fn add_optional(&mut self, table: Option<TranslationTable>) {
        if let Some(table) = table {
            self.add(table);
        }
    }

    /// The loaded table, if any.
    pub fn table(&self) -> Option<&TranslationTable> {
        self.table.as_ref()
    }

    /// The global context.
    pub fn global_context(&self) -> &Context {
        &self.global_context
    }

    /// Set a global context value.
    pub fn set_context(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.global_context.insert(key.into(), value.into());
    }

    /// Remove a global context value.
    pub fn clear_context(&mut self, key: &str) {
        self.global_context.remove(key);
    }

    /// Drop the loaded table.
    pub fn reset_data(&mut self) {
        debug!("Resetting translation data");
        self.table = None;
    }

    /// Empty the global context.
    pub fn reset_context(&mut self) {
        debug!("Resetting global context");
        self.global_context.clear();
    }

    /// Drop the table and empty the global context.
    pub fn reset(&mut self) {
        self.reset_data();
        self.reset_context();
    }
}
