use std::path::PathBuf;

use super::*;

#[test]
fn error_display_unknown_chart_type() {
    let err = VizError::UnknownChartType("sankey".to_string());
    assert_eq!(err.to_string(), "Unknown chart type: 'sankey'");
}

#[test]
fn error_display_mismatched_series_length() {
    let err = VizError::MismatchedSeriesLength {
        labels: "categories",
        label_count: 2,
        values: "values",
        value_count: 3,
    };
    assert_eq!(
        err.to_string(),
        "Mismatched series length: categories has 2 entries but values has 3"
    );
}

#[test]
fn error_display_invalid_custom_spec_names_field() {
    let err = VizError::invalid_custom("y_field", "is required for 'bar' charts");
    assert_eq!(
        err.to_string(),
        "Invalid custom chart request: field 'y_field' is required for 'bar' charts"
    );
}

#[test]
fn error_display_file_access() {
    let err = VizError::FileAccess {
        path: PathBuf::from("theme.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("theme.toml"));
}

#[test]
fn error_display_theme_value() {
    let err = VizError::InvalidThemeValue {
        role: "primary".to_string(),
        value: "bogus!".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid colour 'bogus!' for theme role 'primary'"
    );
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        VizError::UnknownChartType("x".to_string()).error_type(),
        "UnknownChartType"
    );
    assert_eq!(
        VizError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        VizError::UnknownThemeRole("shadow".to_string()).error_type(),
        "UnknownThemeRole"
    );
}

#[test]
fn request_errors_are_classified() {
    assert!(VizError::UnknownChartType("x".to_string()).is_request_error());
    assert!(VizError::invalid_custom("data", "is required").is_request_error());
    assert!(!VizError::Config("bad".to_string()).is_request_error());

    let io = VizError::from(std::io::Error::other("boom"));
    assert!(!io.is_request_error());

    let syntax = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(VizError::from(syntax).is_request_error());
}
