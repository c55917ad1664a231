//! Configuration validation utilities
//!
//! Nothing here is fatal: the plugin renders with whatever it could resolve,
//! and the warnings only end up in the log.

use std::collections::HashSet;

use crate::{AttributeMap, PluginConfiguration, KNOWN_ATTRIBUTES};

/// Collected validation warnings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn extend(&mut self, other: ValidationReport) {
        self.warnings.extend(other.warnings);
    }
}

/// Consistency checks over a resolved configuration
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a resolved configuration
    pub fn validate(config: &PluginConfiguration) -> ValidationReport {
        let mut report = ValidationReport::default();

        Self::validate_axis(config, &mut report);
        Self::validate_fields(config, &mut report);

        report
    }

    fn validate_axis(config: &PluginConfiguration, report: &mut ValidationReport) {
        if let (Some(min), Some(max)) = (config.axis_min, config.axis_max) {
            if min > max {
                report.warnings.push(format!(
                    "AxisMin {min} is greater than AxisMax {max}; the renderer will pick its own range"
                ));
            }
        }

        if let Some(step) = config.step_size {
            if step == 0.0 {
                report
                    .warnings
                    .push("StepSize 0 has no effect, ticks will be auto-spaced".to_string());
            } else if let (Some(min), Some(max)) = (config.axis_min, config.axis_max) {
                if max > min && step > max - min {
                    report.warnings.push(format!(
                        "StepSize {step} exceeds the axis span {}",
                        max - min
                    ));
                }
            }
        }
    }

    fn validate_fields(config: &PluginConfiguration, report: &mut ValidationReport) {
        let mut seen = HashSet::new();
        for field in &config.series_value_fields {
            if !seen.insert(field.as_str()) {
                report
                    .warnings
                    .push(format!("Value field {field} is listed more than once"));
            }
        }
    }

    /// Flag attribute keys the plugin does not understand
    pub fn validate_attribute_keys(attributes: &AttributeMap) -> ValidationReport {
        let mut unknown: Vec<&String> = attributes
            .keys()
            .filter(|key| !KNOWN_ATTRIBUTES.contains(&key.as_str()))
            .collect();
        unknown.sort();

        ValidationReport {
            warnings: unknown
                .into_iter()
                .map(|key| format!("Unknown attribute {key} is ignored"))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PluginConfiguration {
        PluginConfiguration {
            series_value_fields: vec!["Speed".to_string(), "Power".to_string()],
            series_label_field: "Name".to_string(),
            filter_field: None,
            no_data_message: None,
            axis_min: None,
            axis_max: None,
            step_size: None,
            label_format: None,
        }
    }

    #[test]
    fn test_clean_configuration() {
        assert!(ConfigValidator::validate(&config()).is_clean());
    }

    #[test]
    fn test_axis_warnings() {
        let mut inverted = config();
        inverted.axis_min = Some(10.0);
        inverted.axis_max = Some(5.0);
        let report = ConfigValidator::validate(&inverted);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("greater than AxisMax"));

        let mut zero_step = config();
        zero_step.step_size = Some(0.0);
        assert_eq!(ConfigValidator::validate(&zero_step).warnings.len(), 1);

        let mut wide_step = config();
        wide_step.axis_min = Some(0.0);
        wide_step.axis_max = Some(10.0);
        wide_step.step_size = Some(20.0);
        let report = ConfigValidator::validate(&wide_step);
        assert!(report.warnings[0].contains("exceeds the axis span"));
    }

    #[test]
    fn test_duplicate_value_fields() {
        let mut dup = config();
        dup.series_value_fields.push("Speed".to_string());
        let report = ConfigValidator::validate(&dup);
        assert_eq!(report.warnings, vec!["Value field Speed is listed more than once"]);
    }

    #[test]
    fn test_unknown_attribute_keys() {
        let attributes: AttributeMap = [
            ("SeriesLabelField", "Name"),
            ("Colour", "red"),
            ("AxisMaximum", "10"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let report = ConfigValidator::validate_attribute_keys(&attributes);
        assert_eq!(
            report.warnings,
            vec![
                "Unknown attribute AxisMaximum is ignored",
                "Unknown attribute Colour is ignored"
            ]
        );
    }
}
