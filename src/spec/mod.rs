//! Typed model of the emitted Vega-Lite specification.
//!
//! The structure mirrors the grammar's JSON layout so serialization is a
//! direct `serde_json` call:
//! - single view: top-level `mark` + `encoding`
//! - annotated view: top-level `layer` holding the primary view and one
//!   annotation view named [`ANNOTATION_LAYER_NAME`]
//! - all colours are [`Paint`] slots, resolved by the engine

mod encoding;
mod fragment;
mod mark;
mod paint;

use serde::Serialize;

use crate::error::Result;
use crate::request::Record;
use crate::theme::{ThemeConfig, ThemeRole};

pub use encoding::{
    Aggregate, ChannelDef, ChannelValue, Encoding, FieldType, Scale, ScaleDomain, Suppressed,
};
pub use fragment::{Adjustment, SpecFragment};
pub use mark::{Mark, MarkType, TextAlign, TextBaseline};
pub use paint::Paint;

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Name given to the insight annotation view.
pub const ANNOTATION_LAYER_NAME: &str = "insight";

/// Inline data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InlineData {
    pub values: Vec<Record>,
}

/// One mark with its encodings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InlineData>,
    pub mark: Mark,
    pub encoding: Encoding,
}

impl View {
    #[must_use]
    pub const fn new(mark: Mark, encoding: Encoding) -> Self {
        Self {
            name: None,
            data: None,
            mark,
            encoding,
        }
    }

    #[must_use]
    pub fn is_annotation(&self) -> bool {
        self.name.as_deref() == Some(ANNOTATION_LAYER_NAME)
    }

    pub fn resolve_paints(&mut self, theme: &ThemeConfig) {
        self.mark.resolve_paints(theme);
        self.encoding.resolve_paints(theme);
    }
}

/// Either a single view or a layer stack sharing the top-level data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    Single(View),
    Layered { layer: Vec<View> },
}

/// Title text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleAnchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub text: String,
    pub color: Paint,
    pub anchor: TitleAnchor,
    pub font_size: f64,
}

impl Title {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Paint::role(ThemeRole::Text),
            anchor: TitleAnchor::Start,
            font_size: 16.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewConfig {
    pub stroke: Suppressed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    pub label_color: Paint,
    pub title_color: Paint,
    pub grid_color: Paint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendConfig {
    pub label_color: Paint,
    pub title_color: Paint,
}

/// Chart-wide styling block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleConfig {
    pub background: Paint,
    pub view: ViewConfig,
    pub axis: AxisConfig,
    pub legend: LegendConfig,
}

impl Default for StyleConfig {
    /// Every slot bound to its theme role.
    fn default() -> Self {
        Self {
            background: Paint::role(ThemeRole::Background),
            view: ViewConfig { stroke: Suppressed },
            axis: AxisConfig {
                label_color: Paint::role(ThemeRole::TextMuted),
                title_color: Paint::role(ThemeRole::Text),
                grid_color: Paint::role(ThemeRole::Grid),
            },
            legend: LegendConfig {
                label_color: Paint::role(ThemeRole::TextMuted),
                title_color: Paint::role(ThemeRole::Text),
            },
        }
    }
}

impl StyleConfig {
    fn paints_mut(&mut self) -> [&mut Paint; 6] {
        [
            &mut self.background,
            &mut self.axis.label_color,
            &mut self.axis.title_color,
            &mut self.axis.grid_color,
            &mut self.legend.label_color,
            &mut self.legend.title_color,
        ]
    }
}

/// A finished chart specification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spec {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub width: u32,
    pub height: u32,
    pub data: InlineData,
    #[serde(flatten)]
    pub body: Body,
    pub config: StyleConfig,
}

impl Spec {
    /// Bind every role placeholder in the spec to `theme`'s colours.
    pub fn resolve_paints(&mut self, theme: &ThemeConfig) {
        self.title.color.resolve(theme);
        for paint in self.config.paints_mut() {
            paint.resolve(theme);
        }
        match &mut self.body {
            Body::Single(view) => view.resolve_paints(theme),
            Body::Layered { layer } => {
                for view in layer {
                    view.resolve_paints(theme);
                }
            }
        }
    }

    /// Views carrying the chart's data marks (excludes the annotation).
    #[must_use]
    pub fn primary_views(&self) -> Vec<&View> {
        match &self.body {
            Body::Single(view) => vec![view],
            Body::Layered { layer } => layer.iter().filter(|v| !v.is_annotation()).collect(),
        }
    }

    #[must_use]
    pub fn annotation(&self) -> Option<&View> {
        match &self.body {
            Body::Single(_) => None,
            Body::Layered { layer } => layer.iter().find(|v| v.is_annotation()),
        }
    }

    #[must_use]
    pub fn annotation_count(&self) -> usize {
        match &self.body {
            Body::Single(_) => 0,
            Body::Layered { layer } => layer.iter().filter(|v| v.is_annotation()).count(),
        }
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
