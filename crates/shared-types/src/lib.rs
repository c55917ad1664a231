//! Shared types for the radar chart plugin
//!
//! This crate contains the types passed between the config-system,
//! data-manager, renderer and wasm-bridge crates: the host table model,
//! the chart data handed to the external renderer, and the common errors.

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod table;

pub use errors::{ErrorContext, ErrorResponse, RadarChartError, RadarChartResult};
pub use table::{CellValue, DataView, Property, PropertyType, TableRow, TableSnapshot};

/// One row of the source table plotted as a closed polygon
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDataset {
    pub label: String,
    /// One value per value field, `None` where the cell is not numeric
    pub data: Vec<Option<f64>>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}

/// Data section of a radar chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Axis labels, one per value field
    pub labels: Vec<String>,
    pub datasets: Vec<SeriesDataset>,
}

/// Result of mapping a table onto the chart
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    Chart(ChartData),
    /// No row passed the filter
    NoData { message: Option<String> },
}

impl ChartOutcome {
    pub fn is_no_data(&self) -> bool {
        matches!(self, ChartOutcome::NoData { .. })
    }
}
