//! Chart request inputs and their normalized form.

mod custom;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::chart::ChartType;
use crate::error::{Result, VizError};

pub use custom::CustomRequest;

/// One data row, field name to JSON value, in insertion order.
pub type Record = serde_json::Map<String, Value>;

/// Data payload handed to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    /// Ready-made rows.
    Records(Vec<Record>),
    /// Parallel arrays of labels (categories, dates, stages) and values.
    Series {
        labels_name: &'static str,
        labels: Vec<String>,
        values: Vec<f64>,
    },
}

impl ChartData {
    #[must_use]
    pub const fn records(records: Vec<Record>) -> Self {
        Self::Records(records)
    }

    /// Parallel arrays; `labels_name` is how the labels are reported in
    /// length-mismatch errors (e.g. "categories").
    #[must_use]
    pub fn series<S: AsRef<str>>(labels_name: &'static str, labels: &[S], values: &[f64]) -> Self {
        Self::Series {
            labels_name,
            labels: labels.iter().map(|l| l.as_ref().to_string()).collect(),
            values: values.to_vec(),
        }
    }

    /// Zip series into rows keyed by `x_field` / `y_field`.
    ///
    /// # Errors
    /// Returns `MismatchedSeriesLength` when the arrays differ in length.
    pub fn into_records(self, x_field: &str, y_field: &str) -> Result<Vec<Record>> {
        match self {
            Self::Records(records) => Ok(records),
            Self::Series {
                labels_name,
                labels,
                values,
            } => {
                if labels.len() != values.len() {
                    return Err(VizError::MismatchedSeriesLength {
                        labels: labels_name,
                        label_count: labels.len(),
                        values: "values",
                        value_count: values.len(),
                    });
                }
                Ok(labels
                    .into_iter()
                    .zip(values)
                    .map(|(label, value)| {
                        let mut record = Record::new();
                        record.insert(x_field.to_string(), Value::String(label));
                        record.insert(y_field.to_string(), number(value));
                        record
                    })
                    .collect())
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Records(records) => records.len(),
            Self::Series { labels, .. } => labels.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// JSON number for `value`; non-finite values become `null`.
#[must_use]
pub fn number(value: f64) -> Value {
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

/// Caller-chosen field names; unset slots fall back to the chart family's
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Per-request options besides the data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    pub fields: FieldMap,
    pub description: Option<String>,
    pub insight: Option<String>,
    pub max_value: Option<f64>,
}

impl ChartOptions {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_insight(mut self, insight: Option<&str>) -> Self {
        self.insight = insight.map(str::to_string);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_fields(mut self, x: &str, y: &str) -> Self {
        self.fields.x = Some(x.to_string());
        self.fields.y = Some(y.to_string());
        self
    }

    #[must_use]
    pub fn with_color_field(mut self, color: &str) -> Self {
        self.fields.color = Some(color.to_string());
        self
    }

    #[must_use]
    pub const fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }
}

/// Field names after applying family defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFields {
    pub x: String,
    pub y: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ResolvedFields {
    #[must_use]
    pub fn resolve(chart_type: ChartType, fields: &FieldMap) -> Self {
        Self {
            x: fields
                .x
                .clone()
                .unwrap_or_else(|| chart_type.default_x_field().to_string()),
            y: fields
                .y
                .clone()
                .unwrap_or_else(|| chart_type.default_y_field().to_string()),
            color: fields
                .color
                .clone()
                .or_else(|| chart_type.default_color_field().map(str::to_string)),
        }
    }

    /// Colour field, falling back to the label field.
    #[must_use]
    pub fn color_or_x(&self) -> &str {
        self.color.as_deref().unwrap_or(&self.x)
    }
}

/// Normalized input to a generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRequest {
    pub chart_type: ChartType,
    pub title: String,
    pub data: Vec<Record>,
    pub fields: ResolvedFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
}

impl ChartRequest {
    /// Build a request, zipping series data and trimming blank text.
    ///
    /// # Errors
    /// Returns `MismatchedSeriesLength` for series data of unequal length.
    pub fn normalize(chart_type: ChartType, data: ChartData, options: ChartOptions) -> Result<Self> {
        let fields = ResolvedFields::resolve(chart_type, &options.fields);
        let data = data.into_records(&fields.x, &fields.y)?;
        Ok(Self {
            chart_type,
            title: options.title,
            data,
            fields,
            description: non_blank(options.description),
            insight: non_blank(options.insight),
            max_value: options.max_value,
        })
    }

    /// Numeric value of `field` in row `row`, if present and numeric.
    #[must_use]
    pub fn number_at(&self, row: usize, field: &str) -> Option<f64> {
        self.data.get(row)?.get(field)?.as_f64()
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
