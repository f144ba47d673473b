//! Datasheet Normalizer
//!
//! Turns a raw 2-D grid of optional strings into a merged-cell table.
//!
//! # Architecture
//!
//! ```text
//! Grid -> Orientation walk -> Sheet -> Category rows / Span compression -> TableModel
//! ```
//!
//! # Example
//!
//! ```
//! use spectable::datasheet::{normalize, DatasheetOptions, Grid, Orientation};
//!
//! let grid = Grid::from_strs(
//!     vec![vec!["Param", "A", "B", "C"], vec!["Voltage", "12V", "", "5V"]],
//!     Orientation::Rows,
//! );
//! let output = normalize(&grid, &DatasheetOptions::default());
//! let voltage = &output.table.rows[1];
//! assert_eq!(voltage.cells[1].col_span, 2);
//! ```

mod grid;
mod normalizer;
mod options;

#[cfg(test)]
mod tests;

// Re-export public API
pub use grid::{Grid, GridCell, Orientation};
pub use normalizer::normalize;
pub use options::DatasheetOptions;
