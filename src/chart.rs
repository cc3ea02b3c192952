//! The closed set of chart families the engine can generate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VizError;

/// One of the nine supported visualization families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    /// Comparison of categories.
    Bar,
    /// Trend over time.
    Line,
    /// Relationship between two quantitative variables.
    Scatter,
    /// Proportions of a whole (donut).
    Pie,
    /// A single bounded metric.
    Gauge,
    /// Ordered process stages.
    Funnel,
    /// Matrix of two ordinal axes coloured by a measure.
    Heatmap,
    /// Multi-category stacked arc.
    Radial,
    /// Events placed along a time axis.
    Timeline,
}

/// A field-name slot of a chart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSlot {
    X,
    Y,
    Color,
}

impl FieldSlot {
    /// Key used for this slot in custom request payloads.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::X => "x_field",
            Self::Y => "y_field",
            Self::Color => "color_field",
        }
    }
}

impl ChartType {
    pub const ALL: [Self; 9] = [
        Self::Bar,
        Self::Line,
        Self::Scatter,
        Self::Pie,
        Self::Gauge,
        Self::Funnel,
        Self::Heatmap,
        Self::Radial,
        Self::Timeline,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Scatter => "scatter",
            Self::Pie => "pie",
            Self::Gauge => "gauge",
            Self::Funnel => "funnel",
            Self::Heatmap => "heatmap",
            Self::Radial => "radial",
            Self::Timeline => "timeline",
        }
    }

    /// Field holding the label / position dimension when the caller names none.
    #[must_use]
    pub const fn default_x_field(self) -> &'static str {
        match self {
            Self::Bar | Self::Pie | Self::Radial => "category",
            Self::Line | Self::Timeline => "date",
            Self::Scatter | Self::Heatmap => "x",
            Self::Gauge => "segment",
            Self::Funnel => "stage",
        }
    }

    /// Field holding the measure when the caller names none.
    ///
    /// Timelines have no measure; their second field is the event label.
    #[must_use]
    pub const fn default_y_field(self) -> &'static str {
        match self {
            Self::Scatter | Self::Heatmap => "y",
            Self::Timeline => "event",
            _ => "value",
        }
    }

    /// Colour field used when the caller names none. `None` means the
    /// generator colours by its label field or uses a fixed role.
    #[must_use]
    pub const fn default_color_field(self) -> Option<&'static str> {
        match self {
            Self::Scatter | Self::Timeline => Some("category"),
            Self::Heatmap => Some("value"),
            _ => None,
        }
    }

    /// Field names a custom request must spell out for this family.
    #[must_use]
    pub const fn required_fields(self) -> &'static [FieldSlot] {
        match self {
            Self::Bar
            | Self::Line
            | Self::Scatter
            | Self::Pie
            | Self::Funnel
            | Self::Radial => &[FieldSlot::X, FieldSlot::Y],
            Self::Heatmap => &[FieldSlot::X, FieldSlot::Y, FieldSlot::Color],
            Self::Gauge => &[FieldSlot::Y],
            Self::Timeline => &[FieldSlot::X],
        }
    }

    /// Cartesian charts with a single quantitative measure, annotated with a
    /// callout on their largest datum.
    #[must_use]
    pub const fn has_measure_axis(self) -> bool {
        matches!(self, Self::Bar | Self::Line | Self::Funnel)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| VizError::UnknownChartType(s.to_string()))
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
