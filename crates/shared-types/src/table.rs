//! Tabular data model exposed by the data-grid host
//!
//! The host owns the real table; the plugin only sees it through the
//! [`DataView`] trait. [`TableSnapshot`] is an owned implementation used when
//! the table is shipped across the wasm boundary as JSON, and in tests.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{RadarChartError, RadarChartResult};

/// Declared data type of a column
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PropertyType {
    #[default]
    Text,
    Number,
    Boolean,
    Date,
    #[serde(other)]
    Other,
}

impl PropertyType {
    pub fn is_date(&self) -> bool {
        matches!(self, PropertyType::Date)
    }
}

/// Column descriptor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub property_type: PropertyType,
    /// strftime pattern the grid itself uses to display dates of this column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl Property {
    pub fn new(id: &str, name: &str, property_type: PropertyType) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            property_type,
            date_format: None,
        }
    }

    pub fn with_date_format(mut self, pattern: &str) -> Self {
        self.date_format = Some(pattern.to_string());
        self
    }
}

/// A single cell as delivered by the host.
///
/// `Date` is never produced by JSON deserialization (ISO strings arrive as
/// `Text`); native hosts construct it directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Date(NaiveDateTime),
}

impl CellValue {
    /// Truthiness used by the row filter
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Null => false,
            CellValue::Bool(b) => *b,
            CellValue::Number(n) => *n != 0.0 && !n.is_nan(),
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Date(_) => true,
        }
    }

    /// Numeric reading of the cell, `None` leaves a gap in the series
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::Date(value)
    }
}

/// Read access to the host's table
pub trait DataView {
    type Row;

    fn properties(&self) -> &[Property];

    fn rows(&self) -> &[Self::Row];

    fn cell_value<'a>(&'a self, row: &'a Self::Row, property_id: &str) -> Option<&'a CellValue>;

    /// Look up a column descriptor by identifier
    fn find_property(&self, property_id: &str) -> RadarChartResult<&Property> {
        self.properties()
            .iter()
            .find(|prop| prop.id == property_id)
            .ok_or_else(|| RadarChartError::UnresolvedProperty {
                property_id: property_id.to_string(),
            })
    }
}

pub type TableRow = HashMap<String, CellValue>;

/// Owned copy of a table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TableSnapshot {
    pub properties: Vec<Property>,
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

impl TableSnapshot {
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            properties,
            rows: Vec::new(),
        }
    }

    /// Append a row given as `(property id, value)` pairs
    pub fn push_row<I, K, V>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CellValue>,
    {
        let row = cells
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.rows.push(row);
    }

    pub fn from_json(json: &str) -> RadarChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl DataView for TableSnapshot {
    type Row = TableRow;

    fn properties(&self) -> &[Property] {
        &self.properties
    }

    fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    fn cell_value<'a>(&'a self, row: &'a TableRow, property_id: &str) -> Option<&'a CellValue> {
        row.get(property_id)
    }
}
