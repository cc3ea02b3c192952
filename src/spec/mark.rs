use serde::Serialize;

use crate::theme::ThemeConfig;

use super::paint::Paint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    Bar,
    Line,
    Circle,
    Arc,
    Rect,
    Text,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical text baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Mark definition with the visual properties the generators use.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: MarkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius_end: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<TextBaseline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dx: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

impl Mark {
    #[must_use]
    pub const fn new(kind: MarkType) -> Self {
        Self {
            kind,
            corner_radius_end: None,
            stroke_width: None,
            point: None,
            size: None,
            inner_radius: None,
            outer_radius: None,
            color: None,
            align: None,
            baseline: None,
            dx: None,
            dy: None,
            font_size: None,
            font_style: None,
        }
    }

    #[must_use]
    pub const fn with_corner_radius_end(mut self, radius: f64) -> Self {
        self.corner_radius_end = Some(radius);
        self
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    #[must_use]
    pub const fn with_points(mut self) -> Self {
        self.point = Some(true);
        self
    }

    #[must_use]
    pub const fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub const fn with_radii(mut self, inner: f64, outer: Option<f64>) -> Self {
        self.inner_radius = Some(inner);
        self.outer_radius = outer;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Paint) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub const fn with_text_layout(
        mut self,
        align: TextAlign,
        baseline: TextBaseline,
        dx: f64,
        dy: f64,
    ) -> Self {
        self.align = Some(align);
        self.baseline = Some(baseline);
        self.dx = Some(dx);
        self.dy = Some(dy);
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_font_style(mut self, style: &str) -> Self {
        self.font_style = Some(style.to_string());
        self
    }

    pub fn resolve_paints(&mut self, theme: &ThemeConfig) {
        if let Some(color) = &mut self.color {
            color.resolve(theme);
        }
    }
}
