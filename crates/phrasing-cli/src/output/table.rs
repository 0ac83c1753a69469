//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Check results for a single table file.
pub struct FileSummary {
    /// Path as given on the command line.
    pub file: String,
    /// Number of top-level values.
    pub values: usize,
    /// Number of context partitions.
    pub contexts: usize,
    /// Number of lint warnings.
    pub warnings: usize,
}

/// Format check results as an ASCII table.
pub fn format_summary_table(summaries: &[FileSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "Values", "Contexts", "Warnings"]);

    for summary in summaries {
        table.add_row(vec![
            summary.file.clone(),
            summary.values.to_string(),
            summary.contexts.to_string(),
            summary.warnings.to_string(),
        ]);
    }

    table
}
