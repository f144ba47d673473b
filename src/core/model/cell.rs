//! Cell types, roles and presentation hints

use serde::{Deserialize, Serialize};

/// What a cell holds, and how the presentation layer must treat it
///
/// `Text` is plain text and must be escaped when turned into markup.
/// `Markup` is pre-trusted authored markup and is passed through untouched;
/// sanitizing it is the content pipeline's job, not the engine's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellContent {
    Text(String),
    Markup(String),
}

impl CellContent {
    pub fn text(s: impl Into<String>) -> Self {
        CellContent::Text(s.into())
    }

    pub fn markup(s: impl Into<String>) -> Self {
        CellContent::Markup(s.into())
    }

    /// The raw string, regardless of kind
    pub fn as_str(&self) -> &str {
        match self {
            CellContent::Text(s) | CellContent::Markup(s) => s,
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, CellContent::Markup(_))
    }
}

impl Default for CellContent {
    fn default() -> Self {
        CellContent::Text(String::new())
    }
}

/// Semantic role of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellRole {
    Header,
    Label,
    Data,
    SectionHeader,
    Note,
}

impl CellRole {
    /// CSS class used by the HTML adapter
    pub fn class_name(&self) -> &'static str {
        match self {
            CellRole::Header => "header-cell",
            CellRole::Label => "label-cell",
            CellRole::Data => "data-cell",
            CellRole::SectionHeader => "section-header",
            CellRole::Note => "notes-row",
        }
    }

    /// Whether the cell spans the whole table by definition
    pub fn is_full_width(&self) -> bool {
        matches!(self, CellRole::SectionHeader | CellRole::Note)
    }
}

/// Optional presentation hint attached to a cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "hint", content = "value", rename_all = "snake_case")]
pub enum StyleHint {
    /// Medium weight, used for merged runs of data
    Emphasis,
    /// Bold, used for header labels and section names
    Strong,
    /// Author-supplied class name
    Class(String),
}

/// A single rendered table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderCell {
    pub content: CellContent,
    /// Number of columns this cell spans (>= 1)
    pub col_span: usize,
    /// Number of rows this cell spans (>= 1)
    pub row_span: usize,
    pub role: CellRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleHint>,
}

impl RenderCell {
    /// Create a 1x1 cell
    pub fn new(content: CellContent, role: CellRole) -> Self {
        RenderCell {
            content,
            col_span: 1,
            row_span: 1,
            role,
            style: None,
        }
    }

    pub fn header(content: impl Into<String>) -> Self {
        Self::new(CellContent::text(content), CellRole::Header)
    }

    pub fn label(content: CellContent) -> Self {
        Self::new(content, CellRole::Label)
    }

    pub fn data(content: CellContent) -> Self {
        Self::new(content, CellRole::Data)
    }

    /// A full-width section header cell
    pub fn section(content: impl Into<String>, width: usize) -> Self {
        Self::new(CellContent::text(content), CellRole::SectionHeader).with_col_span(width)
    }

    /// A full-width note cell
    pub fn note(content: impl Into<String>, width: usize) -> Self {
        Self::new(CellContent::text(content), CellRole::Note).with_col_span(width)
    }

    pub fn with_col_span(mut self, col_span: usize) -> Self {
        self.col_span = col_span;
        self
    }

    pub fn with_row_span(mut self, row_span: usize) -> Self {
        self.row_span = row_span;
        self
    }

    pub fn with_style(mut self, style: StyleHint) -> Self {
        self.style = Some(style);
        self
    }

    pub fn text(&self) -> &str {
        self.content.as_str()
    }
}

/// Alternating background hint, by row parity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stripe {
    Even,
    Odd,
}

impl Stripe {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Stripe::Even
        } else {
            Stripe::Odd
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Stripe::Even => "stripe-even",
            Stripe::Odd => "stripe-odd",
        }
    }
}
