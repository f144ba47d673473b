//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Diagnostics for rendered tables

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{
    check_output, check_table, format_diagnostics, CheckReport, Diagnostic, DiagnosticLevel,
};
pub use error::{RenderOutput, RenderWarning, TableError, TableResult};
