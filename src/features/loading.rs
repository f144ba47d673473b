//! Loading grids, comparison specs and render settings from source text
//!
//! Supported formats: JSON, YAML, TOML, and CSV (grids only).

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::comparison::{ComparisonOptions, ComparisonSpec};
use crate::core::datasheet::{DatasheetOptions, Grid, GridCell};
use crate::features::html::HtmlOptions;
use crate::utils::error::{TableError, TableResult};

/// Source text format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
    Toml,
    Csv,
}

impl SourceFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        Self::from_name(ext)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(SourceFormat::Json),
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            "toml" => Some(SourceFormat::Toml),
            "csv" => Some(SourceFormat::Csv),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Json => "json",
            SourceFormat::Yaml => "yaml",
            SourceFormat::Toml => "toml",
            SourceFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parse_structured<T: DeserializeOwned>(src: &str, format: SourceFormat) -> TableResult<T> {
    let name = format.as_str();
    match format {
        SourceFormat::Json => {
            serde_json::from_str(src).map_err(|e| TableError::parse_in(name, e.to_string()))
        }
        SourceFormat::Yaml => {
            serde_yaml::from_str(src).map_err(|e| TableError::parse_in(name, e.to_string()))
        }
        SourceFormat::Toml => {
            toml::from_str(src).map_err(|e| TableError::parse_in(name, e.to_string()))
        }
        SourceFormat::Csv => Err(TableError::invalid(
            "CSV can only describe a datasheet grid",
        )),
    }
}

/// Read CSV records as grid rows; empty fields become nulls
fn parse_csv_grid(src: &str) -> TableResult<Grid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(src.as_bytes());

    let mut cells = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| TableError::parse_in("csv", e.to_string()))?;
        let row: Vec<GridCell> = record
            .iter()
            .map(|field| (!field.is_empty()).then(|| field.to_string()))
            .collect();
        cells.push(row);
    }

    Ok(Grid::infer(cells))
}

/// Load a datasheet grid
pub fn load_grid(src: &str, format: SourceFormat) -> TableResult<Grid> {
    let grid = match format {
        SourceFormat::Csv => parse_csv_grid(src)?,
        _ => parse_structured(src, format)?,
    };
    tracing::debug!(
        %format,
        rows = grid.cells.len(),
        orientation = %grid.orientation,
        "loaded grid"
    );
    Ok(grid)
}

/// Load a comparison spec
pub fn load_comparison(src: &str, format: SourceFormat) -> TableResult<ComparisonSpec> {
    let spec: ComparisonSpec = parse_structured(src, format)?;
    tracing::debug!(%format, kind = spec.format_name(), "loaded comparison spec");
    Ok(spec)
}

/// All render settings, as read from a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub datasheet: DatasheetOptions,
    pub comparison: ComparisonOptions,
    pub html: HtmlOptions,
}

impl RenderConfig {
    /// Parse a TOML configuration; missing keys keep their defaults
    pub fn from_toml_str(src: &str) -> TableResult<Self> {
        parse_structured(src, SourceFormat::Toml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::datasheet::Orientation;

    #[test]
    fn test_format_from_path() {
        assert_eq!(SourceFormat::from_path("specs/x.JSON"), Some(SourceFormat::Json));
        assert_eq!(SourceFormat::from_path("a.yml"), Some(SourceFormat::Yaml));
        assert_eq!(SourceFormat::from_path("a.csv"), Some(SourceFormat::Csv));
        assert_eq!(SourceFormat::from_path("a.txt"), None);
        assert_eq!(SourceFormat::from_path("noext"), None);
    }

    #[test]
    fn test_load_csv_grid() {
        let grid = load_grid("参数,A,B\np1,1,\np2,,\n", SourceFormat::Csv).unwrap();
        assert_eq!(grid.orientation, Orientation::Columns);
        assert_eq!(grid.cells[1], vec![Some("p1".to_string()), Some("1".to_string()), None]);
    }

    #[test]
    fn test_load_ragged_csv() {
        let grid = load_grid("Model,A,B\nGeneral\nWeight,1kg,2kg\n", SourceFormat::Csv).unwrap();
        assert_eq!(grid.orientation, Orientation::Rows);
        assert_eq!(grid.cells[1].len(), 1);
    }

    #[test]
    fn test_load_yaml_grid() {
        let src = "orientation: rows\ncells:\n  - [P, A]\n  - [x, ~]\n";
        let grid = load_grid(src, SourceFormat::Yaml).unwrap();
        assert_eq!(grid.orientation, Orientation::Rows);
        assert_eq!(grid.cells[1][1], None);
    }

    #[test]
    fn test_load_toml_comparison() {
        let src = r#"
notes = ["n"]

[models]
Model = ["A", "B"]

[sections.Display]
Size = ["13", "15"]
Panel = { type = "fullspan", data = "IPS" }
"#;
        let spec = load_comparison(src, SourceFormat::Toml).unwrap();
        assert_eq!(spec.format_name(), "sectioned");
        assert_eq!(spec.notes().to_vec(), vec!["n".to_string()]);
    }

    #[test]
    fn test_load_comparison_rejects_csv() {
        let err = load_comparison("a,b", SourceFormat::Csv).unwrap_err();
        assert!(matches!(err, TableError::InvalidInput { .. }));
    }

    #[test]
    fn test_parse_error_names_format() {
        let err = load_grid("[[", SourceFormat::Json).unwrap_err();
        assert!(err.to_string().starts_with("Parse error (json)"));
    }

    #[test]
    fn test_render_config_defaults() {
        let config = RenderConfig::from_toml_str(
            "[datasheet]\nlabel_header = \"Parameter\"\norientation = \"columns\"\n\n[html]\npretty = false\n",
        )
        .unwrap();
        assert_eq!(config.datasheet.label_header, "Parameter");
        assert_eq!(config.datasheet.orientation, Some(Orientation::Columns));
        assert_eq!(config.datasheet.unknown_model, "未知型号");
        assert!(!config.html.pretty);
        assert_eq!(config.comparison, ComparisonOptions::default());
    }
}
