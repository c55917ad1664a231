//! Attribute document parser for multiple formats
//!
//! Hosts normally hand over attributes as a string map. Some ship them as a
//! serialized document instead; scalar values of any type are accepted and
//! stringified so that `AxisMax: 10` and `AxisMax: "10"` resolve the same.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use radar_chart_shared::{RadarChartError, RadarChartResult};
use serde::Deserialize;

use crate::AttributeMap;

/// Attribute document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeFormat {
    Yaml,
    Json,
    Toml,
}

/// Scalar attribute value as found in a document
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AttributeValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl AttributeValue {
    fn into_string(self) -> Option<String> {
        match self {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::Integer(i) => Some(i.to_string()),
            AttributeValue::Float(f) => Some(f.to_string()),
            AttributeValue::Bool(b) => Some(b.to_string()),
            AttributeValue::Null => None,
        }
    }
}

/// Attribute document parser
pub struct AttributeParser;

impl AttributeParser {
    /// Parse attributes from a file, picking the format from its extension
    pub fn parse_file(path: impl AsRef<Path>) -> RadarChartResult<AttributeMap> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| RadarChartError::AttributeParse {
            message: format!("Cannot read {}: {}", path.display(), e),
        })?;

        let format = Self::detect_format(path)?;

        Self::parse_string(&content, format)
    }

    /// Parse attributes from a string
    pub fn parse_string(content: &str, format: AttributeFormat) -> RadarChartResult<AttributeMap> {
        let raw = match format {
            AttributeFormat::Yaml => Self::parse_yaml(content)?,
            AttributeFormat::Json => Self::parse_json(content)?,
            AttributeFormat::Toml => Self::parse_toml(content)?,
        };

        Ok(raw
            .into_iter()
            .filter_map(|(key, value)| value.into_string().map(|value| (key, value)))
            .collect())
    }

    fn parse_yaml(content: &str) -> RadarChartResult<HashMap<String, AttributeValue>> {
        serde_yaml::from_str(content).map_err(|e| RadarChartError::AttributeParse {
            message: format!("YAML parse error: {e}"),
        })
    }

    fn parse_json(content: &str) -> RadarChartResult<HashMap<String, AttributeValue>> {
        Ok(serde_json::from_str(content)?)
    }

    fn parse_toml(content: &str) -> RadarChartResult<HashMap<String, AttributeValue>> {
        toml::from_str(content).map_err(|e| RadarChartError::AttributeParse {
            message: format!("TOML parse error: {e}"),
        })
    }

    /// Detect document format from file extension
    pub fn detect_format(path: &Path) -> RadarChartResult<AttributeFormat> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            RadarChartError::AttributeParse {
                message: "Cannot determine attribute format from file extension".to_string(),
            }
        })?;

        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(AttributeFormat::Yaml),
            "json" => Ok(AttributeFormat::Json),
            "toml" => Ok(AttributeFormat::Toml),
            _ => Err(RadarChartError::AttributeParse {
                message: format!("Unsupported attribute format: {ext}"),
            }),
        }
    }
}
