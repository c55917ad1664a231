//! Radial scale options passed to the external chart renderer

use radar_chart_config::PluginConfiguration;
use serde::{Deserialize, Serialize};

/// Tick settings of the radial axis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_size: Option<f64>,
}

/// The `r` scale of a radar chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialScaleOptions {
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_max: Option<f64>,
    pub ticks: TickOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleOptions {
    pub r: RadialScaleOptions,
}

/// Renderer options for a radar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarChartOptions {
    pub maintain_aspect_ratio: bool,
    pub scales: ScaleOptions,
}

impl RadarChartOptions {
    /// Options derived from the axis bounds in the configuration.
    ///
    /// Unset bounds stay unset so the renderer auto-scales that side.
    pub fn from_config(config: &PluginConfiguration) -> Self {
        Self {
            maintain_aspect_ratio: false,
            scales: ScaleOptions {
                r: RadialScaleOptions {
                    begin_at_zero: config.axis_min == Some(0.0),
                    suggested_min: config.axis_min,
                    suggested_max: config.axis_max,
                    ticks: TickOptions {
                        step_size: config.step_size,
                    },
                },
            },
        }
    }
}
