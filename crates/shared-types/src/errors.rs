//! Common error types used across all radar chart crates
//! Provides consistent error handling and reporting to the plugin host

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for all radar chart operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum RadarChartError {
    #[error("Parameter {attribute} was not found. Cannot plot anything.")]
    MissingRequiredAttribute { attribute: String },

    #[error("Property {property_id} was not found")]
    UnresolvedProperty { property_id: String },

    #[error("Attribute parse error: {message}")]
    AttributeParse { message: String },
}

/// Result type alias for radar chart operations
pub type RadarChartResult<T> = Result<T, RadarChartError>;

/// Error response structure for JavaScript interop
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: RadarChartError,
    pub timestamp: u64,
    pub context: Option<ErrorContext>,
}

/// Additional context for error reporting
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
}

impl ErrorResponse {
    pub fn new(error: RadarChartError) -> Self {
        Self {
            success: false,
            error,
            timestamp: chrono::Utc::now().timestamp_millis().max(0) as u64,
            context: None,
        }
    }

    /// Add context to the error response
    pub fn with_context(mut self, component: &str, operation: &str) -> Self {
        self.context = Some(ErrorContext {
            component: component.to_string(),
            operation: operation.to_string(),
        });
        self
    }

    /// Convert to JSON string for JavaScript
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"type":"AttributeParse","details":{"message":"Failed to serialize error"}}}"#.to_string()
        })
    }
}

impl From<serde_json::Error> for RadarChartError {
    fn from(err: serde_json::Error) -> Self {
        RadarChartError::AttributeParse {
            message: format!("JSON parse error: {err}"),
        }
    }
}
