//! Datasheet normalization: orientation walk, category rows, span compression

use super::grid::{Grid, GridCell, Orientation};
use super::options::DatasheetOptions;
use crate::core::model::{CellContent, RenderCell, RenderRow, Stripe, StyleHint, TableModel};
use crate::core::value::is_blank;
use crate::data::symbols::substitute_symbol;
use crate::utils::error::{push_warning, RenderOutput, RenderWarning};

/// Orientation-free view of a datasheet
///
/// Both walk directions read into this shape, so rendering only ever sees
/// one layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Sheet {
    pub label_header: GridCell,
    pub models: Vec<GridCell>,
    pub rows: Vec<SheetRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SheetRow {
    pub label: GridCell,
    /// Exactly one value per model
    pub values: Vec<GridCell>,
}

impl SheetRow {
    fn is_category(&self) -> bool {
        self.values.iter().all(|v| is_blank(v.as_deref()))
    }
}

/// Read a header-first grid
fn read_rows(cells: &[Vec<GridCell>], warnings: &mut Vec<RenderWarning>) -> Sheet {
    let header = cells.first().map(Vec::as_slice).unwrap_or_default();
    let label_header = header.first().cloned().flatten();
    let models: Vec<GridCell> = header.iter().skip(1).cloned().collect();

    let rows = cells
        .iter()
        .enumerate()
        .skip(1)
        .map(|(idx, row)| {
            let label = row.first().cloned().flatten();
            let mut values: Vec<GridCell> = row.iter().skip(1).cloned().collect();
            if values.len() > models.len() {
                push_warning(
                    warnings,
                    RenderWarning::at_row(
                        format!(
                            "{} value(s) beyond the {} model column(s) dropped",
                            values.len() - models.len(),
                            models.len()
                        ),
                        idx,
                    ),
                );
            }
            values.resize(models.len(), None);
            SheetRow { label, values }
        })
        .collect();

    Sheet {
        label_header,
        models,
        rows,
    }
}

/// Read a label-column-first grid
fn read_columns(cells: &[Vec<GridCell>], warnings: &mut Vec<RenderWarning>) -> Sheet {
    let param_column = cells.first().map(Vec::as_slice).unwrap_or_default();
    let model_columns = cells.get(1..).unwrap_or_default();

    let label_header = param_column.first().cloned().flatten();
    let models = model_columns
        .iter()
        .map(|column| column.first().cloned().flatten())
        .collect();

    for (idx, column) in model_columns.iter().enumerate() {
        if column.len() > param_column.len() {
            push_warning(
                warnings,
                RenderWarning::at_row(
                    format!(
                        "model column {} has {} value(s) without a parameter name",
                        idx + 1,
                        column.len() - param_column.len()
                    ),
                    idx + 1,
                ),
            );
        }
    }

    let rows = param_column
        .iter()
        .enumerate()
        .skip(1)
        .map(|(r, label)| SheetRow {
            label: label.clone(),
            values: model_columns
                .iter()
                .map(|column| column.get(r).cloned().flatten())
                .collect(),
        })
        .collect();

    Sheet {
        label_header,
        models,
        rows,
    }
}

pub(crate) fn read_sheet(
    cells: &[Vec<GridCell>],
    orientation: Orientation,
    warnings: &mut Vec<RenderWarning>,
) -> Sheet {
    match orientation {
        Orientation::Rows => read_rows(cells, warnings),
        Orientation::Columns => read_columns(cells, warnings),
    }
}

/// Collapse runs of empty values into the preceding non-empty value
///
/// A leading empty value has nothing to merge into and renders as the
/// placeholder on its own.
pub(crate) fn compress_values(values: &[GridCell], options: &DatasheetOptions) -> Vec<RenderCell> {
    let mut cells = Vec::with_capacity(values.len());
    let mut i = 0;

    while i < values.len() {
        let value = match values[i].as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => {
                cells.push(RenderCell::data(CellContent::text(
                    options.empty_placeholder.as_str(),
                )));
                i += 1;
                continue;
            }
        };

        let span = 1 + values[i + 1..]
            .iter()
            .take_while(|v| is_blank(v.as_deref()))
            .count();

        let content = if options.substitute_symbols {
            substitute_symbol(value)
        } else {
            value
        };

        let mut cell = RenderCell::data(CellContent::text(content)).with_col_span(span);
        if span > 1 {
            cell = cell.with_style(StyleHint::Emphasis);
        }
        cells.push(cell);
        i += span;
    }

    cells
}

fn non_blank_or(value: &GridCell, fallback: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

pub(crate) fn render_sheet(sheet: &Sheet, options: &DatasheetOptions) -> TableModel {
    let column_count = sheet.models.len() + 1;
    let mut table = TableModel::new(column_count);

    let mut header = Vec::with_capacity(column_count);
    header.push(RenderCell::header(non_blank_or(
        &sheet.label_header,
        &options.label_header,
    )));
    header.extend(
        sheet
            .models
            .iter()
            .map(|m| RenderCell::header(non_blank_or(m, &options.unknown_model))),
    );
    table.push_row(RenderRow::new(header));

    for (idx, row) in sheet.rows.iter().enumerate() {
        let stripe = Stripe::for_index(idx);
        let label = row.label.clone().unwrap_or_default();

        if row.is_category() {
            table.push_row(RenderRow::striped(
                vec![RenderCell::section(label, column_count)],
                stripe,
            ));
            continue;
        }

        let mut cells = Vec::with_capacity(column_count);
        cells.push(RenderCell::label(CellContent::Text(label)));
        cells.extend(compress_values(&row.values, options));
        table.push_row(RenderRow::striped(cells, stripe));
    }

    table
}

/// Normalize a grid into a table model, collecting warnings
pub fn normalize(grid: &Grid, options: &DatasheetOptions) -> RenderOutput {
    if grid.is_empty() {
        tracing::debug!("empty datasheet grid, rendering placeholder");
        return RenderOutput::new(TableModel::placeholder(options.no_data_message.as_str()));
    }

    let orientation = options.orientation.unwrap_or(grid.orientation);
    let mut warnings = Vec::new();
    let sheet = read_sheet(&grid.cells, orientation, &mut warnings);

    tracing::debug!(
        %orientation,
        models = sheet.models.len(),
        rows = sheet.rows.len(),
        "normalized datasheet"
    );

    RenderOutput::with_warnings(render_sheet(&sheet, options), warnings)
}
