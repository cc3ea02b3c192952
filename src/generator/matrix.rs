//! Scatter and heatmap: two positional fields.

use crate::request::ChartRequest;
use crate::spec::{ChannelDef, Encoding, FieldType, Mark, MarkType, Paint, Scale, SpecFragment, View};
use crate::theme::ThemeRole;

pub fn scatter(request: &ChartRequest) -> SpecFragment {
    let fields = &request.fields;
    let color_field = fields.color.as_deref().unwrap_or("category");
    let encoding = Encoding {
        x: Some(ChannelDef::field(&fields.x, FieldType::Quantitative)),
        y: Some(ChannelDef::field(&fields.y, FieldType::Quantitative)),
        color: Some(
            ChannelDef::field(color_field, FieldType::Nominal).with_scale(Scale::palette()),
        ),
        tooltip: Some(vec![
            ChannelDef::tooltip(&fields.x),
            ChannelDef::tooltip(&fields.y),
        ]),
        ..Encoding::default()
    };
    let mark = Mark::new(MarkType::Circle).with_size(80.0);

    SpecFragment::new(request.data.clone(), View::new(mark, encoding))
}

/// Ordinal grid coloured along an accent-to-primary ramp.
pub fn heatmap(request: &ChartRequest) -> SpecFragment {
    let fields = &request.fields;
    let color_field = fields.color.as_deref().unwrap_or("value");
    let ramp = vec![Paint::role(ThemeRole::Accent), Paint::role(ThemeRole::Primary)];
    let encoding = Encoding {
        x: Some(ChannelDef::field(&fields.x, FieldType::Ordinal)),
        y: Some(ChannelDef::field(&fields.y, FieldType::Ordinal)),
        color: Some(
            ChannelDef::field(color_field, FieldType::Quantitative).with_scale(Scale::range(ramp)),
        ),
        tooltip: Some(vec![
            ChannelDef::tooltip(&fields.x),
            ChannelDef::tooltip(&fields.y),
            ChannelDef::tooltip(color_field),
        ]),
        ..Encoding::default()
    };

    SpecFragment::new(request.data.clone(), View::new(Mark::new(MarkType::Rect), encoding))
}
