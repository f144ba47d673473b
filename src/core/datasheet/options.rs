//! Datasheet rendering options

use serde::{Deserialize, Serialize};

use super::grid::Orientation;
use crate::data::constants::{self, english};

/// Options for datasheet normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasheetOptions {
    /// Force an orientation instead of the one carried by the grid
    pub orientation: Option<Orientation>,
    /// Header label used when the grid's own label cell is empty
    pub label_header: String,
    /// Header used for a model column with an empty name
    pub unknown_model: String,
    /// Content of an isolated empty value
    pub empty_placeholder: String,
    /// Message rendered in place of an empty grid
    pub no_data_message: String,
    /// Rewrite marker glyphs such as `√` -> `✓`
    pub substitute_symbols: bool,
}

impl Default for DatasheetOptions {
    fn default() -> Self {
        Self {
            orientation: None,
            label_header: constants::PARAM_LABEL.to_string(),
            unknown_model: constants::UNKNOWN_MODEL.to_string(),
            empty_placeholder: constants::EMPTY_PLACEHOLDER.to_string(),
            no_data_message: constants::DATASHEET_NO_DATA.to_string(),
            substitute_symbols: true,
        }
    }
}

impl DatasheetOptions {
    /// English fallback labels
    pub fn english() -> Self {
        Self {
            label_header: english::PARAM_LABEL.to_string(),
            unknown_model: english::UNKNOWN_MODEL.to_string(),
            no_data_message: english::NO_DATA.to_string(),
            ..Default::default()
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
}
