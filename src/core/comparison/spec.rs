//! Comparison spec input types and their validating constructors

use indexmap::IndexMap;
use serde::Deserialize;

use crate::core::value::Scalar;
use crate::utils::error::{TableError, TableResult};

/// One record of the simple format: field name -> value, in authored order
pub type Record = IndexMap<String, Scalar>;

/// Section name -> spec name -> value, in authored order
pub type Sections = IndexMap<String, IndexMap<String, SpecValue>>;

/// How a single spec entry is laid out across the model columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecValue {
    /// One data cell per model, in model order
    Plain(Vec<String>),
    /// One markup cell spanning every model column
    FullSpan(String),
    /// Explicit merged groups: `values[i]` occupies `spans[i]` columns
    ColSpan {
        values: Vec<String>,
        spans: Vec<usize>,
        class: Option<String>,
    },
    /// Stacked markup rows under a single label cell
    MultiRow { rows: Vec<String>, row_count: usize },
}

impl SpecValue {
    pub fn plain<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SpecValue::Plain(values.into_iter().map(Into::into).collect())
    }

    pub fn full_span(markup: impl Into<String>) -> Self {
        SpecValue::FullSpan(markup.into())
    }

    pub fn col_span<I, S>(values: I, spans: Vec<usize>, class: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SpecValue::ColSpan {
            values: values.into_iter().map(Into::into).collect(),
            spans,
            class,
        }
    }

    /// Stacked rows whose declared count is the number of rows given
    pub fn multi_row<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<String> = rows.into_iter().map(Into::into).collect();
        let row_count = rows.len();
        SpecValue::MultiRow { rows, row_count }
    }

    /// Directive tag as authored
    pub fn tag(&self) -> &'static str {
        match self {
            SpecValue::Plain(_) => "plain",
            SpecValue::FullSpan(_) => "fullspan",
            SpecValue::ColSpan { .. } => "colspan",
            SpecValue::MultiRow { .. } => "multirow",
        }
    }

    /// Number of table rows this entry renders to
    pub fn rendered_rows(&self) -> usize {
        match self {
            SpecValue::MultiRow { row_count, .. } => *row_count,
            _ => 1,
        }
    }

    /// Check the structural invariants against the table's model count
    pub fn check(&self, model_count: usize) -> Result<(), String> {
        match self {
            SpecValue::Plain(values) => {
                if values.len() != model_count {
                    return Err(format!(
                        "expected {} value(s), one per model, found {}",
                        model_count,
                        values.len()
                    ));
                }
            }
            SpecValue::FullSpan(_) => {
                if model_count == 0 {
                    return Err("fullspan needs at least one model column".to_string());
                }
            }
            SpecValue::ColSpan { values, spans, .. } => {
                if model_count == 0 {
                    return Err("colspan needs at least one model column".to_string());
                }
                if values.len() != spans.len() {
                    return Err(format!(
                        "{} value(s) but {} span width(s)",
                        values.len(),
                        spans.len()
                    ));
                }
                if spans.contains(&0) {
                    return Err("span widths must be at least 1".to_string());
                }
                let total: usize = spans.iter().sum();
                if total != model_count {
                    return Err(format!(
                        "span widths sum to {}, expected {}",
                        total, model_count
                    ));
                }
            }
            SpecValue::MultiRow { rows, row_count } => {
                if *row_count == 0 {
                    return Err("multirow needs at least one row".to_string());
                }
                if *row_count != rows.len() {
                    return Err(format!(
                        "declared {} row(s) but {} given",
                        row_count,
                        rows.len()
                    ));
                }
                if model_count == 0 {
                    return Err("multirow needs at least one model column".to_string());
                }
            }
        }
        Ok(())
    }
}

/// Model columns and the label shown above the spec-name column
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Models {
    pub header_label: String,
    pub names: Vec<String>,
}

impl Models {
    /// Plain list of model names, no header label
    pub fn list<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Models {
            header_label: String::new(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn labeled<I, S>(header_label: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Models {
            header_label: header_label.into(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }
}

/// Flat list of uniform records
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimpleSpec {
    pub records: Vec<Record>,
    pub notes: Vec<String>,
}

impl SimpleSpec {
    pub fn new(records: Vec<Record>, notes: Vec<String>) -> Self {
        SimpleSpec { records, notes }
    }

    /// Column keys: the fields of the first record
    pub fn columns(&self) -> Vec<&str> {
        self.records
            .first()
            .map(|r| r.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// Models plus sections of directive-typed spec entries
///
/// Only constructible through [`SectionedSpec::new`], which checks every
/// entry against the model count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionedSpec {
    models: Models,
    sections: Sections,
    notes: Vec<String>,
}

impl SectionedSpec {
    pub fn new(models: Models, sections: Sections, notes: Vec<String>) -> TableResult<Self> {
        let model_count = models.count();
        for (section_name, entries) in &sections {
            for (spec_name, value) in entries {
                value
                    .check(model_count)
                    .map_err(|msg| TableError::malformed(section_name, spec_name, msg))?;
            }
        }
        Ok(SectionedSpec {
            models,
            sections,
            notes,
        })
    }

    pub fn models(&self) -> &Models {
        &self.models
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}

/// Input of the comparison renderer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawComparisonSpec")]
pub enum ComparisonSpec {
    Simple(SimpleSpec),
    Sectioned(SectionedSpec),
}

impl ComparisonSpec {
    pub fn notes(&self) -> &[String] {
        match self {
            ComparisonSpec::Simple(s) => &s.notes,
            ComparisonSpec::Sectioned(s) => s.notes(),
        }
    }

    pub fn format_name(&self) -> &'static str {
        match self {
            ComparisonSpec::Simple(_) => "simple",
            ComparisonSpec::Sectioned(_) => "sectioned",
        }
    }
}

impl From<SimpleSpec> for ComparisonSpec {
    fn from(spec: SimpleSpec) -> Self {
        ComparisonSpec::Simple(spec)
    }
}

impl From<SectionedSpec> for ComparisonSpec {
    fn from(spec: SectionedSpec) -> Self {
        ComparisonSpec::Sectioned(spec)
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Deserialize)]
struct RawComparisonSpec {
    #[serde(default)]
    models: Option<RawModels>,
    #[serde(default)]
    sections: Option<RawSections>,
    #[serde(default)]
    notes: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawModels {
    List(Vec<String>),
    Labeled(IndexMap<String, Vec<String>>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSections {
    Records(Vec<Record>),
    Sectioned(IndexMap<String, IndexMap<String, RawSpecValue>>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSpecValue {
    Plain(Vec<Scalar>),
    Directive(RawDirective),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawDirective {
    Fullspan {
        data: String,
    },
    Colspan {
        data: Vec<String>,
        spans: Vec<usize>,
        #[serde(default, rename = "className", alias = "class")]
        class_name: Option<String>,
    },
    Multirow {
        data: Vec<String>,
        rowspan: usize,
    },
}

impl From<RawSpecValue> for SpecValue {
    fn from(raw: RawSpecValue) -> Self {
        match raw {
            RawSpecValue::Plain(values) => SpecValue::Plain(
                values
                    .into_iter()
                    .map(|v| v.into_text().unwrap_or_default())
                    .collect(),
            ),
            RawSpecValue::Directive(RawDirective::Fullspan { data }) => SpecValue::FullSpan(data),
            RawSpecValue::Directive(RawDirective::Colspan {
                data,
                spans,
                class_name,
            }) => SpecValue::ColSpan {
                values: data,
                spans,
                class: class_name.filter(|c| !c.is_empty()),
            },
            RawSpecValue::Directive(RawDirective::Multirow { data, rowspan }) => {
                SpecValue::MultiRow {
                    rows: data,
                    row_count: rowspan,
                }
            }
        }
    }
}

impl TryFrom<RawModels> for Models {
    type Error = TableError;

    fn try_from(raw: RawModels) -> TableResult<Self> {
        match raw {
            RawModels::List(names) => Ok(Models::list(names)),
            RawModels::Labeled(map) => {
                if map.len() != 1 {
                    return Err(TableError::models(format!(
                        "mapping form needs exactly one entry, found {}",
                        map.len()
                    )));
                }
                let (label, names) = map.into_iter().next().unwrap_or_default();
                Ok(Models::labeled(label, names))
            }
        }
    }
}

impl TryFrom<RawComparisonSpec> for ComparisonSpec {
    type Error = TableError;

    fn try_from(raw: RawComparisonSpec) -> TableResult<Self> {
        match raw.sections {
            Some(RawSections::Records(records)) => {
                Ok(ComparisonSpec::Simple(SimpleSpec::new(records, raw.notes)))
            }
            sectioned => {
                let models = raw.models.map(Models::try_from).transpose()?.unwrap_or_default();
                let sections = match sectioned {
                    Some(RawSections::Sectioned(sections)) => sections
                        .into_iter()
                        .map(|(name, entries)| {
                            let entries = entries
                                .into_iter()
                                .map(|(spec, value)| (spec, SpecValue::from(value)))
                                .collect();
                            (name, entries)
                        })
                        .collect(),
                    _ => Sections::new(),
                };
                SectionedSpec::new(models, sections, raw.notes).map(ComparisonSpec::Sectioned)
            }
        }
    }
}
