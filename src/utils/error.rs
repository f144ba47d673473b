//! Error handling for spectable
//!
//! This module provides a unified error type and result type for spec
//! construction, loading and table validation. Rendering itself never fails.

use std::fmt;

use crate::core::model::TableModel;

/// Table error type
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// A spec entry violates its directive's structural invariants
    MalformedSpecValue {
        section: String,
        spec: String,
        message: String,
    },
    /// The `models` descriptor could not be resolved
    MalformedModels { message: String },
    /// A rendered row does not cover exactly the declared column count
    Geometry { row: usize, message: String },
    /// Source text could not be parsed
    ParseError {
        message: String,
        format: Option<&'static str>,
    },
    /// Invalid input
    InvalidInput { message: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::MalformedSpecValue {
                section,
                spec,
                message,
            } => {
                write!(
                    f,
                    "Malformed spec value '{}' in section '{}': {}",
                    spec, section, message
                )
            }
            TableError::MalformedModels { message } => {
                write!(f, "Malformed models descriptor: {}", message)
            }
            TableError::Geometry { row, message } => {
                write!(f, "Inconsistent geometry at row {}: {}", row, message)
            }
            TableError::ParseError { message, format } => {
                if let Some(fmt_name) = format {
                    write!(f, "Parse error ({}): {}", fmt_name, message)
                } else {
                    write!(f, "Parse error: {}", message)
                }
            }
            TableError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            TableError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

/// Render warnings (non-fatal issues)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderWarning {
    pub message: String,
    /// Index of the input row (or record) the warning refers to
    pub row: Option<usize>,
}

impl RenderWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            row: None,
        }
    }

    pub fn at_row(message: impl Into<String>, row: usize) -> Self {
        Self {
            message: message.into(),
            row: Some(row),
        }
    }
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(r) = self.row {
            write!(f, "Warning at row {}: {}", r, self.message)
        } else {
            write!(f, "Warning: {}", self.message)
        }
    }
}

/// Rendered table with any non-fatal warnings
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    pub table: TableModel,
    pub warnings: Vec<RenderWarning>,
}

impl RenderOutput {
    pub fn new(table: TableModel) -> Self {
        Self {
            table,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(table: TableModel, warnings: Vec<RenderWarning>) -> Self {
        Self { table, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Record a warning and mirror it to the `tracing` log
pub(crate) fn push_warning(warnings: &mut Vec<RenderWarning>, warning: RenderWarning) {
    tracing::warn!(row = ?warning.row, "{}", warning.message);
    warnings.push(warning);
}

// Convenience constructors for errors
impl TableError {
    pub fn malformed(
        section: impl Into<String>,
        spec: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        TableError::MalformedSpecValue {
            section: section.into(),
            spec: spec.into(),
            message: message.into(),
        }
    }

    pub fn models(message: impl Into<String>) -> Self {
        TableError::MalformedModels {
            message: message.into(),
        }
    }

    pub fn geometry(row: usize, message: impl Into<String>) -> Self {
        TableError::Geometry {
            row,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        TableError::ParseError {
            message: message.into(),
            format: None,
        }
    }

    pub fn parse_in(format: &'static str, message: impl Into<String>) -> Self {
        TableError::ParseError {
            message: message.into(),
            format: Some(format),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        TableError::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = TableError::malformed("Display", "Resolution", "spans sum to 2, expected 3");
        let msg = err.to_string();
        assert!(msg.contains("Resolution"));
        assert!(msg.contains("Display"));
        assert!(msg.contains("expected 3"));
    }

    #[test]
    fn test_parse_error_with_format() {
        let err = TableError::parse_in("yaml", "unexpected end of stream");
        assert_eq!(
            err.to_string(),
            "Parse error (yaml): unexpected end of stream"
        );
        assert_eq!(TableError::parse("bad").to_string(), "Parse error: bad");
    }

    #[test]
    fn test_geometry_display() {
        let err = TableError::geometry(4, "row covers 3 of 4 columns");
        assert!(err.to_string().contains("row 4"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: TableError = io.into();
        assert!(matches!(err, TableError::IoError { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_warning_display() {
        assert_eq!(
            RenderWarning::at_row("dropped 1 value", 2).to_string(),
            "Warning at row 2: dropped 1 value"
        );
        assert_eq!(RenderWarning::new("x").to_string(), "Warning: x");
    }

    #[test]
    fn test_render_output() {
        let output = RenderOutput::new(TableModel::placeholder("none"));
        assert!(!output.has_warnings());

        let mut warnings = Vec::new();
        push_warning(&mut warnings, RenderWarning::at_row("ignored key", 1));
        let output = RenderOutput::with_warnings(TableModel::placeholder("none"), warnings);
        assert!(output.has_warnings());
        assert_eq!(output.warnings[0].row, Some(1));
    }
}
