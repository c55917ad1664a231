//! Chart element assembly for the external radar renderer
//!
//! This crate does not draw anything. It owns the series palette and turns
//! built chart data plus the plugin configuration into the element the host
//! hands to its charting component.

use radar_chart_config::PluginConfiguration;
use radar_chart_shared::{ChartData, ChartOutcome};
use serde::{Deserialize, Serialize};

pub mod options;
pub mod palette;

pub use options::{RadarChartOptions, RadialScaleOptions, ScaleOptions, TickOptions};
pub use palette::{SeriesColor, SERIES_PALETTE};

/// Data and options of one radar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChart {
    pub data: ChartData,
    pub options: RadarChartOptions,
}

/// What the plugin hands back to the host on each render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderedElement {
    /// Plugin has not been initialized yet
    Empty,
    /// Message container shown instead of an empty chart
    NoData { message: Option<String> },
    Chart(RadarChart),
}

impl RenderedElement {
    pub fn from_outcome(outcome: ChartOutcome, config: &PluginConfiguration) -> Self {
        match outcome {
            ChartOutcome::NoData { message } => RenderedElement::NoData { message },
            ChartOutcome::Chart(data) => {
                log::debug!(
                    "Rendering radar chart with {} axes and {} series",
                    data.labels.len(),
                    data.datasets.len()
                );
                RenderedElement::Chart(RadarChart {
                    data,
                    options: RadarChartOptions::from_config(config),
                })
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"kind":"empty"}"#.to_string())
    }
}
