//! Data layer - static labels and symbol tables

pub mod constants;
pub mod symbols;

// Re-export commonly used items
pub use constants::{EMPTY_PLACEHOLDER, PARAM_LABEL, UNKNOWN_MODEL};
pub use symbols::{is_marker, substitute_symbol, CELL_SYMBOLS};
