//! Comparison Table Renderer
//!
//! Renders multi-model comparison tables from either a flat list of uniform
//! records or a sectioned map of directive-typed spec entries.
//!
//! # Directives
//!
//! ```text
//! plain     one cell per model
//! fullspan  one cell across all models
//! colspan   explicit merged groups
//! multirow  stacked rows under one label
//! ```
//!
//! # Example
//!
//! ```
//! use indexmap::IndexMap;
//! use spectable::comparison::{render, ComparisonOptions, Models, SectionedSpec, SpecValue};
//!
//! let mut display = IndexMap::new();
//! display.insert("Resolution".to_string(), SpecValue::col_span(["1080p", "4K"], vec![2, 1], None));
//! let mut sections = IndexMap::new();
//! sections.insert("Display".to_string(), display);
//!
//! let spec = SectionedSpec::new(Models::list(["A", "B", "C"]), sections, Vec::new()).unwrap();
//! let output = render(&spec.into(), &ComparisonOptions::default());
//! assert!(output.table.validate().is_ok());
//! ```

mod options;
mod renderer;
mod spec;


// Re-export public API
pub use options::ComparisonOptions;
pub use renderer::render;
pub use spec::{ComparisonSpec, Models, Record, Sections, SectionedSpec, SimpleSpec, SpecValue};
