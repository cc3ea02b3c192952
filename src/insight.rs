//! Insight annotation layer.
//!
//! Charts with a single quantitative measure axis get a callout anchored on
//! their largest datum; every other family gets a caption with its own
//! one-row data source, centered along the bottom edge. Either way the
//! primary view is left untouched and exactly one view is added.

use serde_json::Value;

use crate::chart::ChartType;
use crate::request::{ChartRequest, Record};
use crate::spec::{
    ANNOTATION_LAYER_NAME, Aggregate, Body, ChannelDef, ChannelValue, Encoding, FieldType,
    InlineData, Mark, MarkType, Paint, Spec, TextAlign, TextBaseline, View,
};
use crate::theme::ThemeRole;

const CAPTION_FIELD: &str = "insight";
const FONT_SIZE: f64 = 12.0;

/// Wrap the spec's body in a layer stack ending with the annotation view.
pub fn annotate(spec: &mut Spec, request: &ChartRequest, insight: &str) {
    let annotation = if request.chart_type.has_measure_axis() {
        callout(request, insight)
    } else {
        caption(spec.width, spec.height, insight)
    };

    let body = std::mem::replace(&mut spec.body, Body::Layered { layer: Vec::new() });
    let mut layer = match body {
        Body::Single(view) => vec![view],
        Body::Layered { layer } => layer.into_iter().filter(|v| !v.is_annotation()).collect(),
    };
    layer.push(annotation);
    spec.body = Body::Layered { layer };
}

/// Text placed on the datum with the largest measure.
fn callout(request: &ChartRequest, insight: &str) -> View {
    let fields = &request.fields;
    let label_type = match request.chart_type {
        ChartType::Line => FieldType::Temporal,
        ChartType::Funnel => FieldType::Ordinal,
        _ => FieldType::Nominal,
    };
    let label = ChannelDef::field(&fields.x, label_type)
        .with_aggregate(Aggregate::ArgMax(fields.y.clone()));
    let measure =
        ChannelDef::field(&fields.y, FieldType::Quantitative).with_aggregate(Aggregate::Max);

    let (x, y, mark) = if request.chart_type == ChartType::Funnel {
        let mark = text_mark().with_text_layout(TextAlign::Left, TextBaseline::Middle, 6.0, 0.0);
        (measure, label, mark)
    } else {
        let mark = text_mark().with_text_layout(TextAlign::Center, TextBaseline::Bottom, 0.0, -8.0);
        (label, measure, mark)
    };

    let encoding = Encoding {
        x: Some(x),
        y: Some(y),
        text: Some(ChannelDef::constant(ChannelValue::Text(insight.to_string()))),
        ..Encoding::default()
    };
    named(View::new(mark, encoding))
}

/// Free-floating text at the bottom centre of the view.
fn caption(width: u32, height: u32, insight: &str) -> View {
    let mut row = Record::new();
    row.insert(CAPTION_FIELD.to_string(), Value::String(insight.to_string()));

    let encoding = Encoding {
        x: Some(ChannelDef::constant(ChannelValue::Number(f64::from(width) / 2.0))),
        y: Some(ChannelDef::constant(ChannelValue::Number(f64::from(height)))),
        text: Some(ChannelDef::field(CAPTION_FIELD, FieldType::Nominal)),
        ..Encoding::default()
    };
    let mark = text_mark().with_text_layout(TextAlign::Center, TextBaseline::Bottom, 0.0, -4.0);

    let mut view = named(View::new(mark, encoding));
    view.data = Some(InlineData { values: vec![row] });
    view
}

fn text_mark() -> Mark {
    Mark::new(MarkType::Text)
        .with_color(Paint::role(ThemeRole::Highlight))
        .with_font_size(FONT_SIZE)
        .with_font_style("italic")
}

fn named(mut view: View) -> View {
    view.name = Some(ANNOTATION_LAYER_NAME.to_string());
    view
}

#[cfg(test)]
#[path = "insight_tests.rs"]
mod tests;
