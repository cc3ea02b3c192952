use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::theme::ThemeConfig;

use super::paint::Paint;

/// Serializes as an explicit `null`, which the grammar reads as "disable"
/// (no axis title, no legend, no sort, no view stroke).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suppressed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Nominal,
    Ordinal,
    Quantitative,
    Temporal,
}

/// Aggregation applied to a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregate {
    Max,
    /// Value of this channel's field at the row where `0` is largest.
    ArgMax(String),
}

impl Serialize for Aggregate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Max => serializer.serialize_str("max"),
            Self::ArgMax(field) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("argmax", field)?;
                map.end()
            }
        }
    }
}

/// Constant channel value.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelValue {
    Paint(Paint),
    Number(f64),
    Text(String),
}

impl Serialize for ChannelValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Paint(paint) => paint.serialize(serializer),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

/// Scale domain: discrete labels or a numeric extent.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleDomain {
    Labels(Vec<String>),
    Extent(f64, f64),
}

impl Serialize for ScaleDomain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Labels(labels) => labels.serialize(serializer),
            Self::Extent(lo, hi) => [lo, hi].serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<ScaleDomain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Vec<Paint>>,
}

impl Scale {
    #[must_use]
    pub fn palette() -> Self {
        Self {
            domain: None,
            range: Some(Paint::palette()),
        }
    }

    #[must_use]
    pub const fn range(range: Vec<Paint>) -> Self {
        Self {
            domain: None,
            range: Some(range),
        }
    }

    #[must_use]
    pub const fn extent(lo: f64, hi: f64) -> Self {
        Self {
            domain: Some(ScaleDomain::Extent(lo, hi)),
            range: None,
        }
    }

    #[must_use]
    pub fn with_domain_labels(mut self, labels: &[&str]) -> Self {
        self.domain = Some(ScaleDomain::Labels(
            labels.iter().map(|l| (*l).to_string()).collect(),
        ));
        self
    }

    fn resolve_paints(&mut self, theme: &ThemeConfig) {
        for paint in self.range.iter_mut().flatten() {
            paint.resolve(theme);
        }
    }
}

/// A single encoding channel: either a field mapping or a constant value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChannelDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<Aggregate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ChannelValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Suppressed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Suppressed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Suppressed>,
}

impl ChannelDef {
    #[must_use]
    pub fn field(name: &str, kind: FieldType) -> Self {
        Self {
            field: Some(name.to_string()),
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// Tooltip entry: field only, type inferred by the renderer.
    #[must_use]
    pub fn tooltip(name: &str) -> Self {
        Self {
            field: Some(name.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn constant(value: ChannelValue) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn untitled(mut self) -> Self {
        self.title = Some(Suppressed);
        self
    }

    /// Keep input order instead of sorting the domain.
    #[must_use]
    pub fn unsorted(mut self) -> Self {
        self.sort = Some(Suppressed);
        self
    }

    #[must_use]
    pub fn stacked(mut self) -> Self {
        self.stack = Some(true);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    #[must_use]
    pub fn without_legend(mut self) -> Self {
        self.legend = Some(Suppressed);
        self
    }

    #[must_use]
    pub fn with_aggregate(mut self, aggregate: Aggregate) -> Self {
        self.aggregate = Some(aggregate);
        self
    }

    fn resolve_paints(&mut self, theme: &ThemeConfig) {
        if let Some(ChannelValue::Paint(paint)) = &mut self.value {
            paint.resolve(theme);
        }
        if let Some(scale) = &mut self.scale {
            scale.resolve_paints(theme);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Encoding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<ChannelDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<ChannelDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theta: Option<ChannelDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ChannelDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<ChannelDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Vec<ChannelDef>>,
}

impl Encoding {
    fn channels_mut(&mut self) -> impl Iterator<Item = &mut ChannelDef> {
        [
            self.x.as_mut(),
            self.y.as_mut(),
            self.theta.as_mut(),
            self.color.as_mut(),
            self.text.as_mut(),
        ]
        .into_iter()
        .flatten()
        .chain(self.tooltip.iter_mut().flatten())
    }

    pub fn resolve_paints(&mut self, theme: &ThemeConfig) {
        for channel in self.channels_mut() {
            channel.resolve_paints(theme);
        }
    }
}
