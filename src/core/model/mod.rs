//! Table model
//!
//! The output contract of both renderers: rows of cells carrying content,
//! spans, a semantic role and optional presentation hints.
//!
//! # Example
//!
//! ```
//! use spectable::model::{RenderCell, RenderRow, TableModel};
//!
//! let mut table = TableModel::new(2);
//! table.push_row(RenderRow::new(vec![
//!     RenderCell::header("Param"),
//!     RenderCell::header("A"),
//! ]));
//! table.push_row(RenderRow::new(vec![RenderCell::note("*approx", 2)]));
//! assert!(table.validate().is_ok());
//! ```

mod cell;
mod table;


// Re-export public API
pub use cell::{CellContent, CellRole, RenderCell, Stripe, StyleHint};
pub use table::{RenderRow, TableModel};
