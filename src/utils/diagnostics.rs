//! Table diagnostics
//!
//! Summarizes a render for the `check` command. Geometry violations found by
//! [`TableModel::validate`] are errors, render warnings stay warnings, and
//! the table's shape is reported as a note.
//!
//! ## Example
//!
//! ```rust
//! use spectable::diagnostics::check_output;
//! use spectable::{render_datasheet_with_diagnostics, DatasheetOptions, Grid};
//!
//! let output = render_datasheet_with_diagnostics(&Grid::infer(Vec::new()), &DatasheetOptions::default());
//! let report = check_output(&output);
//! assert!(!report.has_errors());
//! ```

use std::fmt;

use crate::core::model::{CellRole, TableModel};
use crate::utils::error::{RenderOutput, TableError};

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    Note,
    /// Some input was dropped or defaulted
    Warning,
    /// The table does not tile its declared width
    Error,
}

impl DiagnosticLevel {
    fn as_str(&self) -> &'static str {
        match self {
            DiagnosticLevel::Note => "note",
            DiagnosticLevel::Warning => "warning",
            DiagnosticLevel::Error => "error",
        }
    }

    fn ansi(&self) -> &'static str {
        match self {
            DiagnosticLevel::Note => "\x1b[34m",
            DiagnosticLevel::Warning => "\x1b[33m",
            DiagnosticLevel::Error => "\x1b[31m",
        }
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding about a rendered table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    /// Index into `TableModel::rows`
    pub row: Option<usize>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>, row: Option<usize>) -> Self {
        Self {
            level,
            message: message.into(),
            row,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "{} (row {}): {}", self.level, row, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Everything `check` found, in discovery order
#[derive(Debug, Default)]
pub struct CheckReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn count(&self, level: DiagnosticLevel) -> usize {
        self.diagnostics.iter().filter(|d| d.level == level).count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(DiagnosticLevel::Error) > 0
    }

    /// Highest severity present
    pub fn worst(&self) -> Option<DiagnosticLevel> {
        self.diagnostics.iter().map(|d| d.level).max()
    }

    /// e.g. `1 error, 2 warnings`
    pub fn summary(&self) -> String {
        let parts: Vec<String> = [
            (DiagnosticLevel::Error, "error"),
            (DiagnosticLevel::Warning, "warning"),
            (DiagnosticLevel::Note, "note"),
        ]
        .iter()
        .filter_map(|&(level, noun)| match self.count(level) {
            0 => None,
            1 => Some(format!("1 {}", noun)),
            n => Some(format!("{} {}s", n, noun)),
        })
        .collect();

        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Check a table model on its own
pub fn check_table(table: &TableModel) -> CheckReport {
    let mut report = CheckReport::default();

    if let Err(TableError::Geometry { row, message }) = table.validate() {
        report
            .diagnostics
            .push(Diagnostic::new(DiagnosticLevel::Error, message, Some(row)));
    }

    let shape = if table.is_placeholder() {
        "no data: rendered the placeholder message".to_string()
    } else {
        let sections = table
            .rows
            .iter()
            .filter(|r| r.role() == Some(CellRole::SectionHeader))
            .count();
        let merged = table
            .cells()
            .filter(|c| c.col_span > 1 || c.row_span > 1)
            .count();
        format!(
            "{} column(s), {} row(s), {} section row(s), {} merged cell(s)",
            table.column_count,
            table.row_count(),
            sections,
            merged
        )
    };
    report
        .diagnostics
        .push(Diagnostic::new(DiagnosticLevel::Note, shape, None));

    report
}

/// Check a render, including the warnings it produced
pub fn check_output(output: &RenderOutput) -> CheckReport {
    let mut report = check_table(&output.table);
    report.diagnostics.extend(output.warnings.iter().map(|w| {
        Diagnostic::new(DiagnosticLevel::Warning, w.message.as_str(), w.row)
    }));
    report
}

/// One line per diagnostic, then the summary, optionally colored
pub fn format_diagnostics(report: &CheckReport, use_color: bool) -> String {
    let paint = |level: Option<DiagnosticLevel>, text: String| match level {
        Some(level) if use_color => format!("{}{}\x1b[0m", level.ansi(), text),
        _ => text,
    };

    let mut lines: Vec<String> = report
        .diagnostics
        .iter()
        .map(|d| paint(Some(d.level), d.to_string()))
        .collect();
    lines.push(paint(
        report.worst().filter(|l| *l > DiagnosticLevel::Note),
        format!("Summary: {}", report.summary()),
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{CellContent, RenderCell, RenderRow};
    use crate::utils::error::RenderWarning;

    #[test]
    fn test_valid_table_only_notes_shape() {
        let mut table = TableModel::new(2);
        table.push_row(RenderRow::new(vec![
            RenderCell::header("P"),
            RenderCell::header("A"),
        ]));
        let report = check_table(&table);
        assert!(!report.has_errors());
        assert_eq!(
            report.diagnostics[0].message,
            "2 column(s), 1 row(s), 0 section row(s), 0 merged cell(s)"
        );
    }

    #[test]
    fn test_geometry_error_reported() {
        let mut table = TableModel::new(3);
        table.push_row(RenderRow::new(vec![RenderCell::data(CellContent::text("x"))]));
        let report = check_table(&table);
        assert!(report.has_errors());
        assert_eq!(report.diagnostics[0].row, Some(0));
        assert_eq!(report.worst(), Some(DiagnosticLevel::Error));
    }

    #[test]
    fn test_warnings_carried_over() {
        let output = RenderOutput::with_warnings(
            TableModel::placeholder("none"),
            vec![RenderWarning::at_row("dropped", 3)],
        );
        let report = check_output(&output);
        assert_eq!(report.count(DiagnosticLevel::Warning), 1);
        assert_eq!(report.summary(), "1 warning, 1 note");
    }

    #[test]
    fn test_summary_plurals() {
        let mut report = CheckReport::default();
        assert_eq!(report.summary(), "no issues found");
        report.diagnostics.push(Diagnostic::new(DiagnosticLevel::Error, "a", None));
        report.diagnostics.push(Diagnostic::new(DiagnosticLevel::Error, "b", None));
        assert_eq!(report.summary(), "2 errors");
    }

    #[test]
    fn test_format_without_color() {
        let mut report = CheckReport::default();
        report
            .diagnostics
            .push(Diagnostic::new(DiagnosticLevel::Warning, "dropped", Some(2)));
        let text = format_diagnostics(&report, false);
        assert_eq!(text, "warning (row 2): dropped\nSummary: 1 warning");
    }

    #[test]
    fn test_format_with_color() {
        let report = check_table(&TableModel::placeholder("none"));
        let text = format_diagnostics(&report, true);
        assert!(text.starts_with("\x1b[34mnote: no data"));
        // notes alone leave the summary uncolored
        assert!(text.ends_with("\nSummary: 1 note"));
    }
}
