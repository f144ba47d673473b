//! Default labels and placeholder texts
//!
//! The datasheet defaults are the Chinese tokens used by the authored
//! content; `english` variants exist for the options presets.

/// Canonical "Parameter" header token. A grid whose first cell is this
/// token is read column by column.
pub const PARAM_LABEL: &str = "参数";

/// Header shown for a model column whose name is empty ("Unknown model")
pub const UNKNOWN_MODEL: &str = "未知型号";

/// Datasheet placeholder for an empty or absent grid ("No data available")
pub const DATASHEET_NO_DATA: &str = "暂无数据";

/// Comparison placeholder for a simple spec with no records
pub const COMPARISON_NO_DATA: &str = "No data available";

/// Content of an isolated empty datasheet value
pub const EMPTY_PLACEHOLDER: &str = "-";

/// Markup line break used for newlines in comparison labels
pub const LINE_BREAK: &str = "<br />";

pub mod english {
    pub const PARAM_LABEL: &str = "Parameter";
    pub const UNKNOWN_MODEL: &str = "Unknown model";
    pub const NO_DATA: &str = "No data available";
}
