//! Boundary validation for loosely structured custom chart payloads.
//!
//! A payload is a JSON object:
//!
//! ```json
//! {
//!   "chart_type": "scatter",
//!   "title": "Price vs. rating",
//!   "data": [{"price": 9.5, "rating": 4.1}],
//!   "x_field": "price",
//!   "y_field": "rating",
//!   "insight": "Cheaper items rate higher"
//! }
//! ```
//!
//! `chart_type` and `data` are always required, and each family requires the
//! field names listed by [`ChartType::required_fields`]. Named fields must be
//! present in every row. Unrecognized keys are ignored.

use serde_json::{Map, Value};

use crate::chart::{ChartType, FieldSlot};
use crate::error::{Result, VizError};

use super::{ChartData, ChartOptions, FieldMap, Record};

const DEFAULT_TITLE: &str = "Chart";

/// A custom payload after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomRequest {
    pub chart_type: ChartType,
    pub data: Vec<Record>,
    pub options: ChartOptions,
}

impl CustomRequest {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    /// Returns `JsonSerialize` for malformed JSON, otherwise as
    /// [`CustomRequest::from_value`].
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Validate an already-parsed payload.
    ///
    /// # Errors
    /// Returns `InvalidCustomSpec` naming the offending field, or
    /// `UnknownChartType` when `chart_type` is not a supported family.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut payload) = value else {
            return Err(VizError::invalid_custom("<root>", "must be a JSON object"));
        };

        let chart_type: ChartType = required_str(&payload, "chart_type")?.parse()?;
        let data = take_data(&mut payload)?;

        let fields = FieldMap {
            x: optional_str(&payload, FieldSlot::X.key())?,
            y: optional_str(&payload, FieldSlot::Y.key())?,
            color: optional_str(&payload, FieldSlot::Color.key())?,
        };
        check_required_fields(chart_type, &fields, &data)?;

        let options = ChartOptions {
            title: optional_str(&payload, "title")?.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            fields,
            description: optional_str(&payload, "description")?,
            insight: optional_str(&payload, "insight")?,
            max_value: optional_number(&payload, "max_value")?,
        };

        Ok(Self {
            chart_type,
            data,
            options,
        })
    }

    /// Split into the engine's generic `(chart_type, data, options)` triple.
    #[must_use]
    pub fn into_parts(self) -> (ChartType, ChartData, ChartOptions) {
        (self.chart_type, ChartData::Records(self.data), self.options)
    }
}

fn required_str<'a>(payload: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    match payload.get(key) {
        None | Some(Value::Null) => Err(VizError::invalid_custom(key, "is required")),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(VizError::invalid_custom(key, "must be a string")),
    }
}

fn optional_str(payload: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match payload.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(VizError::invalid_custom(key, "must be a string")),
    }
}

fn optional_number(payload: &Map<String, Value>, key: &str) -> Result<Option<f64>> {
    match payload.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| VizError::invalid_custom(key, "must be a number")),
    }
}

fn take_data(payload: &mut Map<String, Value>) -> Result<Vec<Record>> {
    match payload.remove("data") {
        None | Some(Value::Null) => Err(VizError::invalid_custom("data", "is required")),
        Some(Value::Array(rows)) => rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| match row {
                Value::Object(record) => Ok(record),
                _ => Err(VizError::invalid_custom(
                    format!("data[{i}]"),
                    "must be a JSON object",
                )),
            })
            .collect(),
        Some(_) => Err(VizError::invalid_custom("data", "must be an array of objects")),
    }
}

fn check_required_fields(chart_type: ChartType, fields: &FieldMap, data: &[Record]) -> Result<()> {
    for &slot in chart_type.required_fields() {
        let name = match slot {
            FieldSlot::X => fields.x.as_deref(),
            FieldSlot::Y => fields.y.as_deref(),
            FieldSlot::Color => fields.color.as_deref(),
        };
        let Some(name) = name else {
            return Err(VizError::invalid_custom(
                slot.key(),
                format!("is required for '{chart_type}' charts"),
            ));
        };
        if let Some(row) = data.iter().position(|record| !record.contains_key(name)) {
            return Err(VizError::invalid_custom(
                slot.key(),
                format!("names '{name}', which is missing from data[{row}]"),
            ));
        }
    }
    Ok(())
}
