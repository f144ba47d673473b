//! # spectable
//!
//! Specification-table normalization and merged-cell rendering.
//!
//! ## Features
//!
//! - **Datasheets**: raw 2-D grids in either orientation, category rows,
//!   run-length merging of empty cells
//! - **Comparison tables**: flat records or sectioned specs with
//!   `fullspan` / `colspan` / `multirow` directives
//! - **Explicit trust boundary**: every cell is either plain text or
//!   authored markup
//! - **HTML output** and loaders for JSON, YAML, TOML and CSV
//! - **WASM Support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Datasheet
//!
//! ```rust
//! use spectable::{render_datasheet, Grid, Orientation};
//!
//! let grid = Grid::from_strs(
//!     vec![
//!         vec!["Model", "A", "B", "C"],
//!         vec!["Interfaces", "", "", ""],
//!         vec!["USB", "√", "", "●"],
//!     ],
//!     Orientation::Rows,
//! );
//! let table = render_datasheet(&grid);
//! assert_eq!(table.rows[1].cells.len(), 1); // category row
//! assert_eq!(table.rows[2].cells[1].text(), "✓");
//! assert_eq!(table.rows[2].cells[1].col_span, 2);
//! ```
//!
//! ### Comparison
//!
//! ```rust
//! use spectable::{render_comparison, ComparisonSpec, SimpleSpec};
//! use spectable::comparison::Record;
//!
//! let mut record = Record::new();
//! record.insert("name".to_string(), "X".into());
//! let spec: ComparisonSpec = SimpleSpec::new(vec![record], vec!["*approx".into()]).into();
//! let table = render_comparison(&spec);
//! assert_eq!(table.row_count(), 3);
//! ```

/// Core renderers and the table model
pub mod core;

/// Data layer - labels and symbol tables
pub mod data;

/// Feature modules - presentation and input adapters
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core modules
pub use crate::core::comparison;
pub use crate::core::datasheet;
pub use crate::core::model;

pub use crate::core::comparison::{
    ComparisonOptions, ComparisonSpec, Models, SectionedSpec, SimpleSpec, SpecValue,
};
pub use crate::core::datasheet::{DatasheetOptions, Grid, Orientation};
pub use crate::core::model::{
    CellContent, CellRole, RenderCell, RenderRow, Stripe, StyleHint, TableModel,
};
pub use crate::core::value::Scalar;

// Re-export feature modules
pub use features::html;
#[cfg(feature = "data-loading")]
pub use features::loading;

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{RenderOutput, RenderWarning, TableError, TableResult};

/// Render a datasheet grid with default options
pub fn render_datasheet(grid: &Grid) -> TableModel {
    render_datasheet_with_options(grid, &DatasheetOptions::default())
}

/// Render a datasheet grid with custom options
pub fn render_datasheet_with_options(grid: &Grid, options: &DatasheetOptions) -> TableModel {
    render_datasheet_with_diagnostics(grid, options).table
}

/// Render a datasheet grid, returning warnings alongside the table
///
/// This is the recommended entry point for integrations that want to surface
/// dropped values to authors.
pub fn render_datasheet_with_diagnostics(grid: &Grid, options: &DatasheetOptions) -> RenderOutput {
    datasheet::normalize(grid, options)
}

/// Render a comparison spec with default options
pub fn render_comparison(spec: &ComparisonSpec) -> TableModel {
    render_comparison_with_options(spec, &ComparisonOptions::default())
}

/// Render a comparison spec with custom options
pub fn render_comparison_with_options(
    spec: &ComparisonSpec,
    options: &ComparisonOptions,
) -> TableModel {
    render_comparison_with_diagnostics(spec, options).table
}

/// Render a comparison spec, returning warnings alongside the table
pub fn render_comparison_with_diagnostics(
    spec: &ComparisonSpec,
    options: &ComparisonOptions,
) -> RenderOutput {
    comparison::render(spec, options)
}
