//! Raw datasheet grids and their orientation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::value::Scalar;
use crate::data::constants::PARAM_LABEL;

/// A raw datasheet cell: `None` for null, `Some("")` for the empty marker
pub type GridCell = Option<String>;

/// How a grid is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// First row holds the header, each further row is one parameter
    #[serde(alias = "row-major", alias = "row")]
    Rows,
    /// First column holds the parameter names, each further column is one model
    #[serde(alias = "column-major", alias = "column")]
    Columns,
}

impl Orientation {
    /// Infer the orientation of raw cells
    ///
    /// Row-oriented iff the first row has more than one cell and its first
    /// cell is not the literal parameter token. Everything else, including
    /// an empty grid, reads column by column.
    pub fn detect(cells: &[Vec<GridCell>]) -> Self {
        match cells.first() {
            Some(first) if first.len() > 1 && first[0].as_deref() != Some(PARAM_LABEL) => {
                Orientation::Rows
            }
            _ => Orientation::Columns,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Orientation::Rows => Orientation::Columns,
            Orientation::Columns => Orientation::Rows,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Rows => "rows",
            Orientation::Columns => "columns",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Datasheet input: raw cells plus an explicit orientation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawGrid")]
pub struct Grid {
    pub cells: Vec<Vec<GridCell>>,
    pub orientation: Orientation,
}

impl Grid {
    pub fn new(cells: Vec<Vec<GridCell>>, orientation: Orientation) -> Self {
        Grid { cells, orientation }
    }

    /// Build a grid whose orientation is inferred with [`Orientation::detect`]
    pub fn infer(cells: Vec<Vec<GridCell>>) -> Self {
        let orientation = Orientation::detect(&cells);
        Grid { cells, orientation }
    }

    /// Convenience for authored literals: every string is kept as-is,
    /// including `""` as the empty marker
    pub fn from_strs<R, S>(rows: R, orientation: Orientation) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells = rows
            .into_iter()
            .map(|row| row.into_iter().map(|s| Some(s.into())).collect())
            .collect();
        Grid { cells, orientation }
    }

    /// No rows, or a first row (first column when column-oriented)
    /// without cells: there is no header to build a table from
    pub fn is_empty(&self) -> bool {
        self.cells.first().map_or(true, Vec::is_empty)
    }

    /// The same logical table in the other orientation
    ///
    /// Short rows are padded with nulls so the result is rectangular.
    pub fn transpose(&self) -> Grid {
        let width = self.cells.iter().map(Vec::len).max().unwrap_or(0);
        let cells = (0..width)
            .map(|c| {
                self.cells
                    .iter()
                    .map(|row| row.get(c).cloned().flatten())
                    .collect()
            })
            .collect();
        Grid {
            cells,
            orientation: self.orientation.flipped(),
        }
    }
}

/// Wire forms accepted for a grid: a bare array of arrays, whose
/// orientation is inferred, or an object naming the orientation
#[derive(Deserialize)]
#[serde(untagged)]
enum RawGrid {
    Bare(Vec<Vec<Scalar>>),
    Explicit {
        #[serde(default)]
        orientation: Option<Orientation>,
        cells: Vec<Vec<Scalar>>,
    },
}

fn into_cells(raw: Vec<Vec<Scalar>>) -> Vec<Vec<GridCell>> {
    raw.into_iter()
        .map(|row| row.into_iter().map(Scalar::into_text).collect())
        .collect()
}

impl From<RawGrid> for Grid {
    fn from(raw: RawGrid) -> Self {
        match raw {
            RawGrid::Bare(cells) => Grid::infer(into_cells(cells)),
            RawGrid::Explicit {
                orientation: Some(orientation),
                cells,
            } => Grid::new(into_cells(cells), orientation),
            RawGrid::Explicit {
                orientation: None,
                cells,
            } => Grid::infer(into_cells(cells)),
        }
    }
}
