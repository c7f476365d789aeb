//! Column/row model for the generic tabular card.
//!
//! `TableBody::project` is the whole rendering policy: rows when there are
//! rows, a message when there is a message, otherwise nothing. No sorting,
//! filtering or aggregation happens here.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub id: String,
    pub label: String,
    #[serde(default = "default_flex")]
    pub flex: f64,
    #[serde(default)]
    pub text_align: TextAlign,
}

fn default_flex() -> f64 {
    1.0
}

impl ColumnDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            flex: default_flex(),
            text_align: TextAlign::Left,
        }
    }

    pub fn with_flex(mut self, flex: f64) -> Self {
        self.flex = flex;
        self
    }

    pub fn with_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = text_align;
        self
    }

    /// Inline style shared by the header cell and every body cell of the column.
    /// Non-positive or non-finite weights fall back to 1.
    pub fn cell_style(&self) -> String {
        let flex = if self.flex.is_finite() && self.flex > 0.0 {
            self.flex
        } else {
            default_flex()
        };
        format!("flex: {flex}; text-align: {};", self.text_align.as_css())
    }
}

/// The name/date/status schema used when a card is given no columns.
pub fn default_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("name", "Name").with_flex(2.0),
        ColumnDescriptor::new("date", "Date"),
        ColumnDescriptor::new("status", "Status"),
    ]
}

/// Minimum content width (px) so narrow screens scroll instead of squashing columns.
pub fn min_content_width(columns: &[ColumnDescriptor]) -> usize {
    columns.len() * 150
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// One data row keyed by column id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowRecord(HashMap<String, CellValue>);

impl RowRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column_id: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.0.insert(column_id.into(), value.into());
        self
    }

    pub fn get(&self, column_id: &str) -> Option<&CellValue> {
        self.0.get(column_id)
    }

    /// Display text for a column; an absent key is an empty cell.
    pub fn display(&self, column_id: &str) -> String {
        self.get(column_id).map(ToString::to_string).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for RowRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCell {
    pub column_id: String,
    pub text: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub cells: Vec<RenderedCell>,
    /// False for the final row only.
    pub show_divider: bool,
}

/// Body content of a tabular card.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<RenderedRow>),
    Message(String),
    Empty,
}

impl TableBody {
    pub fn project(
        columns: &[ColumnDescriptor],
        rows: &[RowRecord],
        no_data_message: Option<&str>,
    ) -> Self {
        if !rows.is_empty() {
            let last = rows.len() - 1;
            let rendered = rows
                .iter()
                .enumerate()
                .map(|(idx, row)| RenderedRow {
                    cells: columns
                        .iter()
                        .map(|col| RenderedCell {
                            column_id: col.id.clone(),
                            text: row.display(&col.id),
                            style: col.cell_style(),
                        })
                        .collect(),
                    show_divider: idx != last,
                })
                .collect();
            return Self::Rows(rendered);
        }

        match no_data_message {
            Some(message) if !message.is_empty() => Self::Message(message.to_string()),
            _ => Self::Empty,
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            _ => 0,
        }
    }
}
