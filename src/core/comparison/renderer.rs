//! Comparison table rendering for the simple and sectioned formats

use super::options::ComparisonOptions;
use super::spec::{ComparisonSpec, SectionedSpec, SimpleSpec, SpecValue};
use crate::core::model::{CellContent, RenderCell, RenderRow, StyleHint, TableModel};
use crate::utils::error::{push_warning, RenderOutput, RenderWarning};

/// Render a comparison spec, collecting warnings
pub fn render(spec: &ComparisonSpec, options: &ComparisonOptions) -> RenderOutput {
    tracing::debug!(format = spec.format_name(), "rendering comparison table");
    match spec {
        ComparisonSpec::Simple(simple) => render_simple(simple, options),
        ComparisonSpec::Sectioned(sectioned) => {
            RenderOutput::new(render_sectioned(sectioned, options))
        }
    }
}

fn note_rows(table: &mut TableModel, notes: &[String]) {
    let width = table.column_count;
    for note in notes {
        table.push_row(RenderRow::new(vec![RenderCell::note(note.as_str(), width)]));
    }
}

pub(crate) fn render_simple(spec: &SimpleSpec, options: &ComparisonOptions) -> RenderOutput {
    if spec.records.is_empty() {
        return RenderOutput::new(TableModel::placeholder(options.no_data_message.as_str()));
    }

    let columns = spec.columns();
    let mut warnings = Vec::new();
    let mut table = TableModel::new(columns.len());

    table.push_row(RenderRow::new(
        columns
            .iter()
            .map(|c| RenderCell::header(*c).with_style(StyleHint::Strong))
            .collect(),
    ));

    for (idx, record) in spec.records.iter().enumerate() {
        let unknown: Vec<&str> = record
            .keys()
            .map(String::as_str)
            .filter(|k| !columns.contains(k))
            .collect();
        if !unknown.is_empty() {
            push_warning(
                &mut warnings,
                RenderWarning::at_row(
                    format!("field(s) not in the first record ignored: {}", unknown.join(", ")),
                    idx,
                ),
            );
        }

        table.push_row(RenderRow::new(
            columns
                .iter()
                .map(|c| {
                    let value = record
                        .get(*c)
                        .map(ToString::to_string)
                        .unwrap_or_default();
                    RenderCell::data(CellContent::Text(value))
                })
                .collect(),
        ));
    }

    note_rows(&mut table, &spec.notes);
    RenderOutput::with_warnings(table, warnings)
}

/// Label cell for single-row entries: authored markup, newlines as breaks
fn spec_label(name: &str, options: &ComparisonOptions) -> RenderCell {
    RenderCell::label(CellContent::Markup(name.replace('\n', &options.line_break)))
}

fn spec_rows(
    name: &str,
    value: &SpecValue,
    model_count: usize,
    options: &ComparisonOptions,
) -> Vec<RenderRow> {
    match value {
        SpecValue::Plain(values) => {
            let mut cells = Vec::with_capacity(values.len() + 1);
            cells.push(spec_label(name, options));
            cells.extend(
                values
                    .iter()
                    .map(|v| RenderCell::data(CellContent::text(v.as_str()))),
            );
            vec![RenderRow::new(cells)]
        }
        SpecValue::FullSpan(markup) => vec![RenderRow::new(vec![
            spec_label(name, options),
            RenderCell::data(CellContent::markup(markup.as_str())).with_col_span(model_count),
        ])],
        SpecValue::ColSpan {
            values,
            spans,
            class,
        } => {
            let mut cells = Vec::with_capacity(values.len() + 1);
            cells.push(spec_label(name, options));
            cells.extend(values.iter().zip(spans).map(|(v, &span)| {
                let cell = RenderCell::data(CellContent::markup(v.as_str())).with_col_span(span);
                match class {
                    Some(c) => cell.with_style(StyleHint::Class(c.clone())),
                    None => cell,
                }
            }));
            vec![RenderRow::new(cells)]
        }
        SpecValue::MultiRow { rows, row_count } => rows
            .iter()
            .enumerate()
            .map(|(i, markup)| {
                let body = RenderCell::data(CellContent::markup(markup.as_str()))
                    .with_col_span(model_count);
                if i == 0 {
                    RenderRow::new(vec![
                        RenderCell::label(CellContent::text(name)).with_row_span(*row_count),
                        body,
                    ])
                } else {
                    RenderRow::new(vec![body])
                }
            })
            .collect(),
    }
}

pub(crate) fn render_sectioned(spec: &SectionedSpec, options: &ComparisonOptions) -> TableModel {
    let models = spec.models();
    let model_count = models.count();
    let column_count = model_count + 1;
    let mut table = TableModel::new(column_count);

    let mut header = Vec::with_capacity(column_count);
    let lead = RenderCell::header(models.header_label.as_str());
    header.push(if models.header_label.is_empty() {
        lead
    } else {
        lead.with_style(StyleHint::Strong)
    });
    header.extend(models.names.iter().map(|m| RenderCell::header(m.as_str())));
    table.push_row(RenderRow::new(header));

    for (section_name, entries) in spec.sections() {
        table.push_row(RenderRow::new(vec![RenderCell::section(
            section_name.as_str(),
            column_count,
        )
        .with_style(StyleHint::Strong)]));

        for (spec_name, value) in entries {
            for row in spec_rows(spec_name, value, model_count, options) {
                table.push_row(row);
            }
        }
    }

    note_rows(&mut table, spec.notes());

    tracing::debug!(
        models = model_count,
        sections = spec.sections().len(),
        rows = table.row_count(),
        "rendered sectioned comparison"
    );
    table
}
