//! Tests for datasheet normalization

use super::grid::{Grid, Orientation};
use super::normalizer::{compress_values, normalize};
use super::options::DatasheetOptions;
use crate::core::model::{CellRole, RenderCell, Stripe, StyleHint, TableModel};

fn cells(rows: &[&[Option<&str>]]) -> Vec<Vec<Option<String>>> {
    rows.iter()
        .map(|r| r.iter().map(|c| c.map(str::to_string)).collect())
        .collect()
}

fn render(grid: &Grid) -> TableModel {
    normalize(grid, &DatasheetOptions::default()).table
}

fn texts(cells: &[RenderCell]) -> Vec<&str> {
    cells.iter().map(RenderCell::text).collect()
}

fn spans(cells: &[RenderCell]) -> Vec<usize> {
    cells.iter().map(|c| c.col_span).collect()
}

#[test]
fn test_detect_row_oriented() {
    let grid = Grid::infer(cells(&[
        &[Some("Model"), Some("A"), Some("B")],
        &[Some("p1"), Some("1"), Some("2")],
    ]));
    assert_eq!(grid.orientation, Orientation::Rows);
}

#[test]
fn test_detect_param_token_forces_columns() {
    // The literal parameter token in the first cell means column-major,
    // even though this grid looks header-first.
    let grid = Grid::infer(cells(&[
        &[Some("参数"), Some("A"), Some("B")],
        &[Some("p1"), Some("1"), Some("2")],
        &[Some("p2"), Some(""), Some("")],
    ]));
    assert_eq!(grid.orientation, Orientation::Columns);
}

#[test]
fn test_detect_single_cell_first_row() {
    let grid = Grid::infer(cells(&[&[Some("Only")], &[Some("x"), Some("y")]]));
    assert_eq!(grid.orientation, Orientation::Columns);
}

#[test]
fn test_detect_null_first_cell_is_rows() {
    let grid = Grid::infer(cells(&[&[None, Some("A")]]));
    assert_eq!(grid.orientation, Orientation::Rows);
}

#[test]
fn test_detect_empty_grid() {
    assert_eq!(Orientation::detect(&[]), Orientation::Columns);
}

#[test]
fn test_param_token_grid_renders_transposed() {
    let grid = Grid::infer(cells(&[
        &[Some("参数"), Some("A"), Some("B")],
        &[Some("p1"), Some("1"), Some("2")],
        &[Some("p2"), Some(""), Some("")],
    ]));
    let table = render(&grid);

    assert_eq!(table.column_count, 3);
    assert_eq!(texts(&table.rows[0].cells), vec!["参数", "p1", "p2"]);
    assert_eq!(texts(&table.rows[1].cells), vec!["A", "1"]);
    assert_eq!(spans(&table.rows[1].cells), vec![1, 2]);
    assert_eq!(texts(&table.rows[2].cells), vec!["B", "2"]);
    assert!(table.validate().is_ok());
}

#[test]
fn test_header_defaults() {
    let grid = Grid::new(
        cells(&[&[Some(""), None, Some("B")], &[Some("p"), Some("1"), Some("2")]]),
        Orientation::Rows,
    );
    let table = render(&grid);
    assert_eq!(texts(&table.rows[0].cells), vec!["参数", "未知型号", "B"]);
    assert!(table.rows[0].cells.iter().all(|c| c.role == CellRole::Header));
}

#[test]
fn test_category_row() {
    let grid = Grid::from_strs(
        vec![
            vec!["Param", "A", "B", "C"],
            vec!["Electrical", "", "", ""],
            vec!["Voltage", "12V", "12V", "5V"],
        ],
        Orientation::Rows,
    );
    let table = render(&grid);

    let category = &table.rows[1];
    assert_eq!(category.cells.len(), 1);
    assert_eq!(category.cells[0].role, CellRole::SectionHeader);
    assert_eq!(category.cells[0].col_span, 4);
    assert_eq!(category.cells[0].text(), "Electrical");
    assert_eq!(category.stripe, Some(Stripe::Even));
    assert_eq!(table.rows[2].stripe, Some(Stripe::Odd));
}

#[test]
fn test_null_values_make_category_row() {
    let grid = Grid::new(
        cells(&[&[Some("P"), Some("A"), Some("B")], &[Some("Section"), None, Some("")]]),
        Orientation::Rows,
    );
    let table = render(&grid);
    assert_eq!(table.rows[1].cells.len(), 1);
    assert_eq!(table.rows[1].cells[0].col_span, 3);
}

#[test]
fn test_short_row_is_category() {
    let grid = Grid::from_strs(
        vec![vec!["P", "A", "B"], vec!["Mechanical"]],
        Orientation::Rows,
    );
    let table = render(&grid);
    assert_eq!(table.rows[1].cells[0].role, CellRole::SectionHeader);
    assert!(table.validate().is_ok());
}

#[test]
fn test_span_compression() {
    let values: Vec<Option<String>> = vec![
        Some("x".into()),
        Some("".into()),
        None,
        Some("y".into()),
        Some("z".into()),
        Some("".into()),
    ];
    let out = compress_values(&values, &DatasheetOptions::default());
    assert_eq!(texts(&out), vec!["x", "y", "z"]);
    assert_eq!(spans(&out), vec![3, 1, 2]);
    assert_eq!(out[0].style, Some(StyleHint::Emphasis));
    assert_eq!(out[1].style, None);
    assert_eq!(out[2].style, Some(StyleHint::Emphasis));
}

#[test]
fn test_leading_empty_values_are_dashes() {
    let values: Vec<Option<String>> = vec![None, Some("".into()), Some("v".into())];
    let out = compress_values(&values, &DatasheetOptions::default());
    assert_eq!(texts(&out), vec!["-", "-", "v"]);
    assert_eq!(spans(&out), vec![1, 1, 1]);
    assert!(out.iter().all(|c| c.role == CellRole::Data));
}

#[test]
fn test_no_empty_values_means_no_spans() {
    let grid = Grid::from_strs(
        vec![
            vec!["P", "A", "B", "C"],
            vec!["r1", "1", "2", "3"],
            vec!["r2", "a", "b", "c"],
            vec!["r3", "●", "√", "-"],
        ],
        Orientation::Rows,
    );
    let table = render(&grid);
    assert!(table.cells().all(|c| c.col_span == 1));
}

#[test]
fn test_symbol_substitution() {
    let grid = Grid::from_strs(
        vec![vec!["P", "A", "B", "C"], vec!["USB", "√", "●", "√ (opt)"]],
        Orientation::Rows,
    );
    let table = render(&grid);
    assert_eq!(texts(&table.rows[1].cells), vec!["USB", "✓", "●", "√ (opt)"]);
}

#[test]
fn test_symbol_substitution_disabled() {
    let grid = Grid::from_strs(vec![vec!["P", "A"], vec!["USB", "√"]], Orientation::Rows);
    let options = DatasheetOptions {
        substitute_symbols: false,
        ..Default::default()
    };
    let table = normalize(&grid, &options).table;
    assert_eq!(table.rows[1].cells[1].text(), "√");
}

#[test]
fn test_transposition_invariance() {
    let grids = vec![
        Grid::from_strs(
            vec![
                vec!["Param", "A", "B", "C"],
                vec!["General", "", "", ""],
                vec!["Voltage", "12V", "", "5V"],
                vec!["Ports", "", "2", ""],
                vec!["Wifi", "√", "●", "√"],
            ],
            Orientation::Rows,
        ),
        Grid::new(
            cells(&[
                &[None, Some("M1"), Some("")],
                &[Some("p"), None, Some("x")],
                &[Some("q"), Some("y")],
            ]),
            Orientation::Rows,
        ),
    ];

    for grid in grids {
        let transposed = grid.transpose();
        assert_eq!(transposed.orientation, Orientation::Columns);
        assert_eq!(render(&grid), render(&transposed));
    }
}

#[test]
fn test_orientation_override() {
    let grid = Grid::from_strs(
        vec![vec!["参数", "A"], vec!["p1", "1"]],
        Orientation::Columns,
    );
    let as_rows = normalize(
        &grid,
        &DatasheetOptions::default().with_orientation(Orientation::Rows),
    )
    .table;
    assert_eq!(texts(&as_rows.rows[0].cells), vec!["参数", "A"]);
    assert_eq!(texts(&as_rows.rows[1].cells), vec!["p1", "1"]);

    let as_columns = render(&grid);
    assert_eq!(texts(&as_columns.rows[0].cells), vec!["参数", "p1"]);
}

#[test]
fn test_empty_grid_placeholder() {
    let table = render(&Grid::infer(Vec::new()));
    assert!(table.is_placeholder());
    assert_eq!(table.rows[0].cells[0].text(), "暂无数据");

    let table = render(&Grid::infer(vec![Vec::new(), Vec::new()]));
    assert!(table.is_placeholder());

    let english = normalize(&Grid::infer(Vec::new()), &DatasheetOptions::english()).table;
    assert_eq!(english.rows[0].cells[0].text(), "No data available");
}

#[test]
fn test_empty_first_line_placeholder() {
    let grid = Grid::infer(cells(&[&[], &[Some("p"), Some("1")]]));
    assert_eq!(grid.orientation, Orientation::Columns);
    assert!(grid.is_empty());
    assert!(render(&grid).is_placeholder());

    let grid = Grid::new(cells(&[&[], &[Some("p"), Some("1")]]), Orientation::Rows);
    assert!(render(&grid).is_placeholder());
}

#[test]
fn test_header_only_grid() {
    let table = render(&Grid::from_strs(vec![vec!["P", "A", "B"]], Orientation::Rows));
    assert_eq!(table.row_count(), 1);
    assert!(table.validate().is_ok());
}

#[test]
fn test_extra_values_dropped_with_warning() {
    let grid = Grid::from_strs(
        vec![vec!["P", "A"], vec!["p1", "1", "2", "3"]],
        Orientation::Rows,
    );
    let output = normalize(&grid, &DatasheetOptions::default());
    assert_eq!(output.warnings.len(), 1);
    assert_eq!(output.warnings[0].row, Some(1));
    assert_eq!(texts(&output.table.rows[1].cells), vec!["p1", "1"]);
    assert!(output.table.validate().is_ok());
}

#[test]
fn test_long_model_column_warns() {
    let grid = Grid::from_strs(
        vec![vec!["参数", "p1"], vec!["A", "1", "orphan"]],
        Orientation::Columns,
    );
    let output = normalize(&grid, &DatasheetOptions::default());
    assert!(output.has_warnings());
    assert_eq!(output.table.row_count(), 2);
}

#[test]
fn test_label_cell_role() {
    let grid = Grid::from_strs(vec![vec!["P", "A"], vec!["p1", "1"]], Orientation::Rows);
    let table = render(&grid);
    assert_eq!(table.rows[1].cells[0].role, CellRole::Label);
    assert_eq!(table.rows[1].cells[1].role, CellRole::Data);
    assert!(table.cells().all(|c| !c.content.is_markup()));
}

#[test]
fn test_grid_from_json() {
    let bare: Grid = serde_json::from_str(r#"[["Model", "A", 3], ["p", null, 1.5]]"#).unwrap();
    assert_eq!(bare.orientation, Orientation::Rows);
    assert_eq!(bare.cells[0][2], Some("3".to_string()));
    assert_eq!(bare.cells[1][1], None);

    let explicit: Grid =
        serde_json::from_str(r#"{"orientation": "columns", "cells": [["Model", "A"]]}"#).unwrap();
    assert_eq!(explicit.orientation, Orientation::Columns);

    let inferred: Grid = serde_json::from_str(r#"{"cells": [["参数", "A"]]}"#).unwrap();
    assert_eq!(inferred.orientation, Orientation::Columns);
}
