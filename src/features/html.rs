//! HTML presentation of a table model
//!
//! The escaping policy is decided per cell: `Text` content is escaped,
//! `Markup` content is authored markup and is written verbatim.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::core::model::{CellContent, CellRole, RenderCell, RenderRow, StyleHint, TableModel};

/// HTML output options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Class attribute of the `<table>` element
    pub table_class: String,
    /// Emit row stripe classes
    pub stripes: bool,
    /// One element per line, indented
    pub pretty: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            table_class: "spec-table".to_string(),
            stripes: true,
            pretty: true,
        }
    }
}

/// Escape text for use in element content and attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn cell_classes(cell: &RenderCell) -> String {
    let mut classes = vec![cell.role.class_name().to_string()];
    match &cell.style {
        Some(StyleHint::Emphasis) => classes.push("emphasis".to_string()),
        Some(StyleHint::Class(c)) => classes.extend(c.split_whitespace().map(escape_html)),
        Some(StyleHint::Strong) | None => {}
    }
    classes.join(" ")
}

fn cell_body(cell: &RenderCell) -> String {
    let body = match &cell.content {
        CellContent::Text(s) => escape_html(s),
        CellContent::Markup(s) => s.clone(),
    };
    if matches!(cell.style, Some(StyleHint::Strong)) && !body.is_empty() {
        format!("<strong>{}</strong>", body)
    } else {
        body
    }
}

fn write_cell(out: &mut String, cell: &RenderCell) {
    let tag = if cell.role == CellRole::Header { "th" } else { "td" };
    let _ = write!(out, "<{} class=\"{}\"", tag, cell_classes(cell));
    if cell.col_span > 1 {
        let _ = write!(out, " colspan=\"{}\"", cell.col_span);
    }
    if cell.row_span > 1 {
        let _ = write!(out, " rowspan=\"{}\"", cell.row_span);
    }
    let _ = write!(out, ">{}</{}>", cell_body(cell), tag);
}

fn write_row(out: &mut String, row: &RenderRow, options: &HtmlOptions) {
    let (indent, cell_indent, nl) = if options.pretty {
        ("  ", "    ", "\n")
    } else {
        ("", "", "")
    };

    out.push_str(indent);
    match row.stripe {
        Some(stripe) if options.stripes => {
            let _ = write!(out, "<tr class=\"{}\">{}", stripe.class_name(), nl);
        }
        _ => {
            let _ = write!(out, "<tr>{}", nl);
        }
    }
    for cell in &row.cells {
        out.push_str(cell_indent);
        write_cell(out, cell);
        out.push_str(nl);
    }
    let _ = write!(out, "{}</tr>{}", indent, nl);
}

/// Render a table model as an HTML `<table>`
pub fn to_html(table: &TableModel, options: &HtmlOptions) -> String {
    let mut output = String::new();
    let nl = if options.pretty { "\n" } else { "" };

    let _ = write!(
        output,
        "<table class=\"{}\">{}",
        escape_html(&options.table_class),
        nl
    );
    for row in &table.rows {
        write_row(&mut output, row, options);
    }
    output.push_str("</table>");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Stripe;

    fn compact() -> HtmlOptions {
        HtmlOptions {
            pretty: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_text_is_escaped() {
        let mut table = TableModel::new(1);
        table.push_row(RenderRow::new(vec![RenderCell::data(CellContent::text(
            "<script>&",
        ))]));
        let html = to_html(&table, &compact());
        assert!(html.contains("&lt;script&gt;&amp;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_markup_passes_through() {
        let mut table = TableModel::new(1);
        table.push_row(RenderRow::new(vec![RenderCell::data(CellContent::markup(
            "<span style=\"color:red\">x</span>",
        ))]));
        let html = to_html(&table, &compact());
        assert!(html.contains("<span style=\"color:red\">x</span>"));
    }

    #[test]
    fn test_spans_and_tags() {
        let mut table = TableModel::new(3);
        table.push_row(RenderRow::new(vec![
            RenderCell::header("P"),
            RenderCell::header("A").with_col_span(2),
        ]));
        table.push_row(RenderRow::striped(
            vec![
                RenderCell::label(CellContent::text("L")).with_row_span(2),
                RenderCell::data(CellContent::text("v"))
                    .with_col_span(2)
                    .with_style(StyleHint::Emphasis),
            ],
            Stripe::Odd,
        ));
        let html = to_html(&table, &compact());
        assert!(html.contains("<th class=\"header-cell\">P</th>"));
        assert!(html.contains("<th class=\"header-cell\" colspan=\"2\">A</th>"));
        assert!(html.contains("<tr class=\"stripe-odd\">"));
        assert!(html.contains("rowspan=\"2\""));
        assert!(html.contains("<td class=\"data-cell emphasis\" colspan=\"2\">v</td>"));
        assert!(html.starts_with("<table class=\"spec-table\">"));
        assert!(html.ends_with("</table>"));
    }

    #[test]
    fn test_strong_and_class_hints() {
        let mut table = TableModel::new(2);
        table.push_row(RenderRow::new(vec![
            RenderCell::section("General", 2).with_style(StyleHint::Strong)
        ]));
        table.push_row(RenderRow::new(vec![
            RenderCell::label(CellContent::text("x")),
            RenderCell::data(CellContent::markup("y"))
                .with_style(StyleHint::Class("center bold".to_string())),
        ]));
        let html = to_html(&table, &compact());
        assert!(html.contains("<strong>General</strong>"));
        assert!(html.contains("class=\"data-cell center bold\""));
    }

    #[test]
    fn test_stripes_can_be_disabled() {
        let mut table = TableModel::new(1);
        table.push_row(RenderRow::striped(
            vec![RenderCell::data(CellContent::text("a"))],
            Stripe::Even,
        ));
        let options = HtmlOptions {
            stripes: false,
            ..compact()
        };
        assert!(!to_html(&table, &options).contains("stripe-even"));
    }

    #[test]
    fn test_pretty_layout() {
        let html = to_html(&TableModel::placeholder("none"), &HtmlOptions::default());
        let lines: Vec<&str> = html.lines().collect();
        assert_eq!(lines[0], "<table class=\"spec-table\">");
        assert_eq!(lines[1], "  <tr>");
        assert_eq!(lines[2], "    <td class=\"notes-row\">none</td>");
        assert_eq!(lines[3], "  </tr>");
        assert_eq!(lines[4], "</table>");
    }
}
