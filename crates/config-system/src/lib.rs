//! Configuration system for the radar chart plugin
//! Turns the host's flat string attributes into a validated, immutable
//! [`PluginConfiguration`]

use std::collections::HashMap;

use radar_chart_shared::{RadarChartError, RadarChartResult};
use serde::{Deserialize, Serialize};

pub mod parser;
pub mod validation;

pub use parser::{AttributeFormat, AttributeParser};
pub use validation::{ConfigValidator, ValidationReport};

/// Flat attribute mapping handed over by the plugin host
pub type AttributeMap = HashMap<String, String>;

pub const SERIES_LABEL_FIELD: &str = "SeriesLabelField";
pub const SERIES_VALUE_FIELDS: &str = "SeriesValueFields";
pub const FILTER_FIELD: &str = "FilterField";
pub const NO_DATA_MESSAGE: &str = "NoDataMessage";
pub const AXIS_MIN: &str = "AxisMin";
pub const AXIS_MAX: &str = "AxisMax";
pub const STEP_SIZE: &str = "StepSize";
pub const LABEL_FORMAT: &str = "LabelFormat";

/// Every attribute key the plugin understands
pub const KNOWN_ATTRIBUTES: [&str; 8] = [
    SERIES_LABEL_FIELD,
    SERIES_VALUE_FIELDS,
    FILTER_FIELD,
    NO_DATA_MESSAGE,
    AXIS_MIN,
    AXIS_MAX,
    STEP_SIZE,
    LABEL_FORMAT,
];

/// Resolved plugin settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfiguration {
    /// Value field identifiers in declared order, one radar axis each
    pub series_value_fields: Vec<String>,
    pub series_label_field: String,
    pub filter_field: Option<String>,
    pub no_data_message: Option<String>,
    pub axis_min: Option<f64>,
    pub axis_max: Option<f64>,
    pub step_size: Option<f64>,
    /// .NET style date pattern for date-typed series labels
    pub label_format: Option<String>,
}

impl PluginConfiguration {
    /// Resolve the configuration from raw host attributes.
    ///
    /// Fails only when `SeriesValueFields` or `SeriesLabelField` is missing or
    /// empty. Malformed numeric bounds are dropped with a warning.
    pub fn from_attributes(attributes: &AttributeMap) -> RadarChartResult<Self> {
        let series_value_fields =
            split_field_list(required_string(attributes, SERIES_VALUE_FIELDS)?);
        if series_value_fields.is_empty() {
            return Err(RadarChartError::MissingRequiredAttribute {
                attribute: SERIES_VALUE_FIELDS.to_string(),
            });
        }

        let config = Self {
            series_value_fields,
            series_label_field: required_string(attributes, SERIES_LABEL_FIELD)?.to_string(),
            filter_field: optional_string(attributes, FILTER_FIELD),
            no_data_message: optional_string(attributes, NO_DATA_MESSAGE),
            axis_min: optional_positive_number(attributes, AXIS_MIN),
            axis_max: optional_positive_number(attributes, AXIS_MAX),
            step_size: optional_positive_number(attributes, STEP_SIZE),
            label_format: optional_string(attributes, LABEL_FORMAT),
        };

        let mut report = ConfigValidator::validate(&config);
        report.extend(ConfigValidator::validate_attribute_keys(attributes));
        for warning in &report.warnings {
            log::warn!("{warning}");
        }

        Ok(config)
    }

    /// Filter column, if one is configured
    pub fn active_filter_field(&self) -> Option<&str> {
        self.filter_field.as_deref().filter(|field| !field.is_empty())
    }
}

/// Attribute that must be present and non-empty
pub fn required_string<'a>(
    attributes: &'a AttributeMap,
    name: &str,
) -> RadarChartResult<&'a str> {
    match attributes.get(name) {
        Some(value) if !value.is_empty() => Ok(value.as_str()),
        _ => Err(RadarChartError::MissingRequiredAttribute {
            attribute: name.to_string(),
        }),
    }
}

/// Raw attribute value, unvalidated
pub fn optional_string(attributes: &AttributeMap, name: &str) -> Option<String> {
    attributes.get(name).cloned()
}

/// Non-negative number, or `None` when the attribute is absent, blank,
/// not a number or negative
pub fn optional_positive_number(attributes: &AttributeMap, name: &str) -> Option<f64> {
    let raw = attributes.get(name)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() && number >= 0.0 => Some(number),
        _ => {
            log::warn!("Ignoring attribute {name}: {raw:?} is not a non-negative number");
            None
        }
    }
}

/// Split a `;` separated field list, trimming entries and dropping empty ones
pub fn split_field_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}
