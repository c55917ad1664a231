//! Integration tests for attribute resolution

use std::io::Write;

use radar_chart_config::{AttributeParser, PluginConfiguration};
use radar_chart_shared::RadarChartError;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_configuration_from_yaml_file() {
    init_logging();

    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        r#"
SeriesValueFields: "Speed; Power; Agility"
SeriesLabelField: Name
FilterField: Visible
NoDataMessage: No players selected
AxisMin: 0
AxisMax: 10
StepSize: 2
"#
    )
    .unwrap();

    let attributes = AttributeParser::parse_file(file.path()).unwrap();
    let config = PluginConfiguration::from_attributes(&attributes).unwrap();

    assert_eq!(config.series_value_fields, vec!["Speed", "Power", "Agility"]);
    assert_eq!(config.series_label_field, "Name");
    assert_eq!(config.active_filter_field(), Some("Visible"));
    assert_eq!(config.no_data_message.as_deref(), Some("No players selected"));
    assert_eq!(config.axis_min, Some(0.0));
    assert_eq!(config.axis_max, Some(10.0));
    assert_eq!(config.step_size, Some(2.0));
}

#[test]
fn test_malformed_bounds_degrade_silently() {
    init_logging();

    let json = r#"{
        "SeriesValueFields": "Speed",
        "SeriesLabelField": "Name",
        "AxisMin": -5,
        "AxisMax": "abc",
        "StepSize": ""
    }"#;

    let attributes =
        AttributeParser::parse_string(json, radar_chart_config::AttributeFormat::Json).unwrap();
    let config = PluginConfiguration::from_attributes(&attributes).unwrap();

    assert_eq!(config.axis_min, None);
    assert_eq!(config.axis_max, None);
    assert_eq!(config.step_size, None);
}

#[test]
fn test_missing_label_field_from_toml() {
    init_logging();

    let toml = r#"SeriesValueFields = "Speed;Power""#;
    let attributes =
        AttributeParser::parse_string(toml, radar_chart_config::AttributeFormat::Toml).unwrap();

    let err = PluginConfiguration::from_attributes(&attributes).unwrap_err();
    assert_eq!(
        err,
        RadarChartError::MissingRequiredAttribute {
            attribute: "SeriesLabelField".to_string()
        }
    );
}

#[test]
fn test_unreadable_file() {
    let err = AttributeParser::parse_file("/nonexistent/radar.json").unwrap_err();
    assert!(matches!(err, RadarChartError::AttributeParse { .. }));
}
