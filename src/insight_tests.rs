use serde_json::json;

use super::*;
use crate::engine::Engine;
use crate::request::{ChartData, ChartOptions};
use crate::spec::Aggregate;

fn records(value: Value) -> Vec<Record> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_object().unwrap().clone())
        .collect()
}

fn annotated(chart_type: ChartType, data: Value) -> Spec {
    let options = ChartOptions::new("Annotated").with_insight(Some("Peak in March"));
    Engine::default()
        .generate(chart_type, ChartData::Records(records(data)), options)
        .unwrap()
}

#[test]
fn bar_callout_targets_the_largest_value() {
    let spec = annotated(
        ChartType::Bar,
        json!([{"category": "A", "value": 1}, {"category": "B", "value": 9}]),
    );
    let view = spec.annotation().unwrap();
    let x = view.encoding.x.as_ref().unwrap();
    let y = view.encoding.y.as_ref().unwrap();

    assert_eq!(x.field.as_deref(), Some("category"));
    assert_eq!(x.aggregate, Some(Aggregate::ArgMax("value".to_string())));
    assert_eq!(y.aggregate, Some(Aggregate::Max));
    assert_eq!(
        view.encoding.text.as_ref().unwrap().value,
        Some(ChannelValue::Text("Peak in March".to_string()))
    );
    assert!(view.data.is_none());
}

#[test]
fn line_callout_keeps_temporal_axis() {
    let spec = annotated(ChartType::Line, json!([{"date": "2024-01", "value": 2}]));
    let x = spec.annotation().unwrap().encoding.x.clone().unwrap();
    assert_eq!(x.kind, Some(FieldType::Temporal));
}

#[test]
fn funnel_callout_swaps_axes() {
    let spec = annotated(ChartType::Funnel, json!([{"stage": "Leads", "value": 10}]));
    let view = spec.annotation().unwrap();

    assert_eq!(view.encoding.x.as_ref().unwrap().field.as_deref(), Some("value"));
    assert_eq!(view.encoding.y.as_ref().unwrap().field.as_deref(), Some("stage"));
    assert_eq!(view.mark.align, Some(TextAlign::Left));
}

#[test]
fn caption_carries_its_own_data() {
    for chart_type in [ChartType::Pie, ChartType::Gauge, ChartType::Heatmap] {
        let spec = annotated(chart_type, json!([]));
        let view = spec.annotation().unwrap();
        let data = view.data.as_ref().unwrap();

        assert_eq!(data.values.len(), 1, "{chart_type}");
        assert_eq!(data.values[0][CAPTION_FIELD], "Peak in March");
        assert_eq!(
            view.encoding.x.as_ref().unwrap().value,
            Some(ChannelValue::Number(f64::from(spec.width) / 2.0))
        );
    }
}

#[test]
fn annotation_uses_highlight_colour() {
    let spec = annotated(ChartType::Scatter, json!([{"x": 1, "y": 2}]));
    let expected = Engine::default().theme().get(ThemeRole::Highlight).to_string();
    assert_eq!(spec.annotation().unwrap().mark.color, Some(Paint::Hex(expected)));
}

#[test]
fn annotate_twice_keeps_one_annotation() {
    let mut spec = annotated(ChartType::Bar, json!([{"category": "A", "value": 1}]));
    let request = ChartRequest::normalize(
        ChartType::Bar,
        ChartData::Records(records(json!([{"category": "A", "value": 1}]))),
        ChartOptions::new("Annotated"),
    )
    .unwrap();
    annotate(&mut spec, &request, "Replaced");

    assert_eq!(spec.annotation_count(), 1);
    assert_eq!(spec.primary_views().len(), 1);
}
