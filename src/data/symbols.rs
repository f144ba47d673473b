//! Datasheet symbol substitutions
//!
//! Authored datasheets use a handful of glyphs as feature markers. A value
//! is substituted only when it consists of exactly one of these glyphs.

use phf::phf_map;

/// Whole-value glyph substitutions applied to datasheet cells
///
/// `●` maps to itself: it is a recognized marker that must never be altered.
pub static CELL_SYMBOLS: phf::Map<&'static str, &'static str> = phf_map! {
    "●" => "●",
    "√" => "✓",
};

/// Whether a value is a recognized marker glyph
#[inline]
pub fn is_marker(value: &str) -> bool {
    CELL_SYMBOLS.contains_key(value)
}

/// Substitute a cell value if it is a recognized glyph
#[inline]
pub fn substitute_symbol(value: &str) -> &str {
    CELL_SYMBOLS.get(value).copied().unwrap_or(value)
}
