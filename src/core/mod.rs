//! Core rendering modules
//!
//! This module contains the two renderers and the model they share:
//! - `datasheet`: raw grid -> merged-cell table
//! - `comparison`: simple records or sectioned directives -> table
//! - `model`: the `TableModel` output contract

pub mod comparison;
pub mod datasheet;
pub mod model;
pub mod value;

// Re-export main types
pub use comparison::{ComparisonOptions, ComparisonSpec, SpecValue};
pub use datasheet::{DatasheetOptions, Grid, Orientation};
pub use model::{CellContent, CellRole, RenderCell, RenderRow, TableModel};
pub use value::Scalar;
