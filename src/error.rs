use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VizError {
    #[error("Unknown chart type: '{0}'")]
    UnknownChartType(String),

    #[error(
        "Mismatched series length: {labels} has {label_count} entries but {values} has {value_count}"
    )]
    MismatchedSeriesLength {
        labels: &'static str,
        label_count: usize,
        values: &'static str,
        value_count: usize,
    },

    #[error("Invalid custom chart request: field '{field}' {reason}")]
    InvalidCustomSpec { field: String, reason: String },

    #[error("Unknown theme role: '{0}'")]
    UnknownThemeRole(String),

    #[error("Invalid colour '{value}' for theme role '{role}'")]
    InvalidThemeValue { role: String, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl VizError {
    /// Short, stable name of the error kind.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::UnknownChartType(_) => "UnknownChartType",
            Self::MismatchedSeriesLength { .. } => "MismatchedSeriesLength",
            Self::InvalidCustomSpec { .. } => "InvalidCustomSpec",
            Self::UnknownThemeRole(_) => "UnknownThemeRole",
            Self::InvalidThemeValue { .. } => "InvalidThemeValue",
            Self::Config(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::TomlSerialize(_) => "TomlSerialize",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Whether the error was caused by the chart request itself rather than
    /// by configuration or the environment. Malformed payload JSON counts as
    /// a request error.
    #[must_use]
    pub fn is_request_error(&self) -> bool {
        match self {
            Self::UnknownChartType(_)
            | Self::MismatchedSeriesLength { .. }
            | Self::InvalidCustomSpec { .. } => true,
            Self::JsonSerialize(e) => !e.is_io(),
            _ => false,
        }
    }

    pub(crate) fn invalid_custom(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCustomSpec {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VizError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
