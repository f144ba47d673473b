//! Table model shared by both renderers

use serde::{Deserialize, Serialize};

use super::cell::{CellRole, RenderCell, Stripe};
use crate::utils::error::{TableError, TableResult};

/// A rendered table row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderRow {
    pub cells: Vec<RenderCell>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe: Option<Stripe>,
}

impl RenderRow {
    pub fn new(cells: Vec<RenderCell>) -> Self {
        RenderRow {
            cells,
            stripe: None,
        }
    }

    pub fn striped(cells: Vec<RenderCell>, stripe: Stripe) -> Self {
        RenderRow {
            cells,
            stripe: Some(stripe),
        }
    }

    /// Sum of column spans of the cells actually present in this row
    pub fn width(&self) -> usize {
        self.cells.iter().map(|c| c.col_span).sum()
    }

    /// Role of the row, taken from its last cell
    ///
    /// The last cell is used because a row continuing a vertical span has no
    /// leading label cell.
    pub fn role(&self) -> Option<CellRole> {
        self.cells.last().map(|c| c.role)
    }
}

/// Merged-cell table layout
///
/// Produced fresh by every render call; nothing in it refers back to the
/// input it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableModel {
    /// Declared number of columns every row must cover
    pub column_count: usize,
    pub rows: Vec<RenderRow>,
}

impl TableModel {
    pub fn new(column_count: usize) -> Self {
        TableModel {
            column_count,
            rows: Vec::new(),
        }
    }

    /// A one-cell table carrying an informative message
    pub fn placeholder(message: impl Into<String>) -> Self {
        TableModel {
            column_count: 1,
            rows: vec![RenderRow::new(vec![RenderCell::note(message, 1)])],
        }
    }

    pub fn push_row(&mut self, row: RenderRow) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_placeholder(&self) -> bool {
        self.column_count == 1
            && self.rows.len() == 1
            && self.rows[0].cells.len() == 1
            && self.rows[0].cells[0].role == CellRole::Note
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &RenderCell> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }

    /// Check that every row covers exactly `column_count` columns
    ///
    /// Walks the rows keeping, per column, how many more rows are still
    /// covered by a vertical span opened above. A covered column consumes no
    /// cell; an uncovered one consumes the next cell of the row.
    pub fn validate(&self) -> TableResult<()> {
        let mut col_coverage = vec![0usize; self.column_count];

        for (row_idx, row) in self.rows.iter().enumerate() {
            let mut cells = row.cells.iter();
            let mut current_col = 0;

            while current_col < self.column_count {
                if col_coverage[current_col] > 0 {
                    col_coverage[current_col] -= 1;
                    current_col += 1;
                    continue;
                }

                let Some(cell) = cells.next() else {
                    return Err(TableError::geometry(
                        row_idx,
                        format!(
                            "row covers {} of {} columns",
                            current_col, self.column_count
                        ),
                    ));
                };

                if cell.col_span == 0 || cell.row_span == 0 {
                    return Err(TableError::geometry(row_idx, "cell with zero span"));
                }
                if cell.role.is_full_width() && cell.col_span != self.column_count {
                    return Err(TableError::geometry(
                        row_idx,
                        format!(
                            "full-width cell spans {} of {} columns",
                            cell.col_span, self.column_count
                        ),
                    ));
                }
                let end = current_col + cell.col_span;
                if end > self.column_count {
                    return Err(TableError::geometry(
                        row_idx,
                        format!("cell overflows to column {}", end),
                    ));
                }

                for coverage in &mut col_coverage[current_col..end] {
                    if *coverage > 0 {
                        return Err(TableError::geometry(
                            row_idx,
                            "cell overlaps a vertical span",
                        ));
                    }
                    *coverage = cell.row_span - 1;
                }

                current_col = end;
            }

            if cells.next().is_some() {
                return Err(TableError::geometry(
                    row_idx,
                    format!("row has cells beyond column {}", self.column_count),
                ));
            }
        }

        if col_coverage.iter().any(|&c| c > 0) {
            return Err(TableError::geometry(
                self.rows.len(),
                "vertical span extends past the last row",
            ));
        }

        Ok(())
    }
}
