//! Loading translation tables from JSON files.

use std::fs::read_to_string;
use std::io;
use std::path::{Path, PathBuf};

use phrasing::TranslationTable;
use thiserror::Error;
use tracing::debug;

use crate::output::TableDiagnostic;

/// Errors that occur while loading a table file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a table file.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a valid translation table.
    #[error("{}", diagnostic.message())]
    Syntax { diagnostic: Box<TableDiagnostic> },
}

impl LoadError {
    /// Convert into a miette report, keeping source context for syntax errors.
    pub fn into_report(self) -> miette::Report {
        match self {
            LoadError::Syntax { diagnostic } => miette::Report::new(*diagnostic),
            other => miette::Report::msg(other.to_string()),
        }
    }
}

/// Parse a translation table from JSON text.
pub fn parse_table(path: &Path, content: &str) -> Result<TranslationTable, LoadError> {
    serde_json::from_str(content).map_err(|e| LoadError::Syntax {
        diagnostic: Box::new(TableDiagnostic::from_json_error(path, content, &e)),
    })
}

/// Read and parse a translation table file.
pub fn load_table(path: &Path) -> Result<TranslationTable, LoadError> {
    let content = read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_table(path, &content)?;
    debug!(
        path = %path.display(),
        values = table.values.len(),
        contexts = table.contexts.len(),
        "Loaded table file"
    );
    Ok(table)
}
