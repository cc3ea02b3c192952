//! Line and timeline: a temporal x axis.

use crate::request::ChartRequest;
use crate::spec::{
    ChannelDef, ChannelValue, Encoding, FieldType, Mark, MarkType, Paint, Scale, SpecFragment,
    View,
};
use crate::theme::ThemeRole;

const TIMELINE_HEIGHT: u32 = 80;

pub fn line(request: &ChartRequest) -> SpecFragment {
    let fields = &request.fields;
    let encoding = Encoding {
        x: Some(ChannelDef::field(&fields.x, FieldType::Temporal).untitled()),
        y: Some(ChannelDef::field(&fields.y, FieldType::Quantitative)),
        color: Some(ChannelDef::constant(ChannelValue::Paint(Paint::role(
            ThemeRole::Primary,
        )))),
        tooltip: Some(vec![
            ChannelDef::tooltip(&fields.x),
            ChannelDef::tooltip(&fields.y),
        ]),
        ..Encoding::default()
    };
    let mark = Mark::new(MarkType::Line)
        .with_stroke_width(3.0)
        .with_points();

    SpecFragment::new(request.data.clone(), View::new(mark, encoding))
}

/// Events as dots on a single row; `y` names the event label field.
pub fn timeline(request: &ChartRequest) -> SpecFragment {
    let fields = &request.fields;
    let color_field = fields.color.as_deref().unwrap_or("category");
    let encoding = Encoding {
        x: Some(ChannelDef::field(&fields.x, FieldType::Temporal)),
        y: Some(ChannelDef::constant(ChannelValue::Number(0.0))),
        color: Some(
            ChannelDef::field(color_field, FieldType::Nominal).with_scale(Scale::palette()),
        ),
        tooltip: Some(vec![
            ChannelDef::tooltip(&fields.x),
            ChannelDef::field(&fields.y, FieldType::Nominal),
        ]),
        ..Encoding::default()
    };
    let mark = Mark::new(MarkType::Circle).with_size(100.0);

    SpecFragment::new(request.data.clone(), View::new(mark, encoding)).with_height(TIMELINE_HEIGHT)
}
