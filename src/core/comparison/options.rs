//! Comparison rendering options

use serde::{Deserialize, Serialize};

use crate::data::constants;

/// Options for the comparison renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonOptions {
    /// Markup substituted for `\n` in spec-name labels
    pub line_break: String,
    /// Message rendered for a simple spec without records
    pub no_data_message: String,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        Self {
            line_break: constants::LINE_BREAK.to_string(),
            no_data_message: constants::COMPARISON_NO_DATA.to_string(),
        }
    }
}
