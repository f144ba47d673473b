//! Feature modules - presentation and input adapters
//!
//! Thin layers around the core renderers:
//! - HTML output with per-cell escaping
//! - Loading grids and specs from JSON, YAML, TOML and CSV

pub mod html;
#[cfg(feature = "data-loading")]
pub mod loading;

// Re-export commonly used types
pub use html::{escape_html, to_html, HtmlOptions};
#[cfg(feature = "data-loading")]
pub use loading::{load_comparison, load_grid, RenderConfig, SourceFormat};
