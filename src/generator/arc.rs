//! Arc-based charts: pie (donut), radial, and the single-metric gauge.

use serde_json::Value;

use crate::request::{ChartRequest, Record, number};
use crate::spec::{
    Adjustment, ChannelDef, Encoding, FieldType, Mark, MarkType, Paint, Scale, SpecFragment, View,
};
use crate::theme::ThemeRole;

use super::clamp_negative;

/// Maximum used when neither the options nor the data supply one.
pub const DEFAULT_GAUGE_MAX: f64 = 100.0;

const GAUGE_SIZE: u32 = 200;
const GAUGE_FILLED: &str = "Value";
const GAUGE_REMAINING: &str = "Remaining";
const GAUGE_MAX_FIELD: &str = "max";

pub fn pie(request: &ChartRequest) -> SpecFragment {
    let fields = &request.fields;
    let mut data = request.data.clone();
    let adjustments = clamp_negative(&mut data, &fields.y);

    let encoding = Encoding {
        theta: Some(ChannelDef::field(&fields.y, FieldType::Quantitative)),
        color: Some(
            ChannelDef::field(fields.color_or_x(), FieldType::Nominal)
                .with_scale(Scale::palette()),
        ),
        tooltip: Some(vec![
            ChannelDef::tooltip(&fields.x),
            ChannelDef::tooltip(&fields.y),
        ]),
        ..Encoding::default()
    };
    let mark = Mark::new(MarkType::Arc).with_radii(50.0, None);

    SpecFragment::new(data, View::new(mark, encoding)).with_adjustments(adjustments)
}

pub fn radial(request: &ChartRequest) -> SpecFragment {
    let fields = &request.fields;
    let mut data = request.data.clone();
    let adjustments = clamp_negative(&mut data, &fields.y);

    let encoding = Encoding {
        theta: Some(ChannelDef::field(&fields.y, FieldType::Quantitative).stacked()),
        color: Some(
            ChannelDef::field(fields.color_or_x(), FieldType::Nominal)
                .with_scale(Scale::palette()),
        ),
        ..Encoding::default()
    };
    let mark = Mark::new(MarkType::Arc).with_radii(30.0, None);

    SpecFragment::new(data, View::new(mark, encoding)).with_adjustments(adjustments)
}

/// Filled and remaining arcs of a bounded metric, theta domain `[0, max]`
/// (left unset when `max` is 0).
///
/// The value is read from the first row's measure field; the maximum comes
/// from the options, then the row's `max` field, then [`DEFAULT_GAUGE_MAX`].
pub fn gauge(request: &ChartRequest) -> SpecFragment {
    let field = &request.fields.y;
    let raw_value = request.number_at(0, field).unwrap_or(0.0);
    let raw_max = request
        .max_value
        .or_else(|| request.number_at(0, GAUGE_MAX_FIELD))
        .unwrap_or(DEFAULT_GAUGE_MAX);

    let mut adjustments = Vec::new();
    let mut value = raw_value;
    if value < 0.0 {
        value = 0.0;
    }
    let max = if raw_max > 0.0 { raw_max } else { value };
    if value > max {
        value = max;
    }
    if (value - raw_value).abs() > f64::EPSILON {
        adjustments.push(Adjustment {
            row: 0,
            field: field.clone(),
            original: raw_value,
            adjusted: value,
        });
    }

    let data = vec![
        segment(GAUGE_FILLED, value),
        segment(GAUGE_REMAINING, max - value),
    ];
    // A zero-width domain has no meaningful scale.
    let mut theta = ChannelDef::field("value", FieldType::Quantitative).stacked();
    if max > 0.0 {
        theta = theta.with_scale(Scale::extent(0.0, max));
    }
    let encoding = Encoding {
        theta: Some(theta),
        color: Some(
            ChannelDef::field("segment", FieldType::Nominal)
                .with_scale(
                    Scale::range(vec![
                        Paint::role(ThemeRole::Primary),
                        Paint::role(ThemeRole::Track),
                    ])
                    .with_domain_labels(&[GAUGE_FILLED, GAUGE_REMAINING]),
                )
                .without_legend(),
        ),
        ..Encoding::default()
    };
    let mark = Mark::new(MarkType::Arc).with_radii(60.0, Some(100.0));

    SpecFragment::new(data, View::new(mark, encoding))
        .with_size(GAUGE_SIZE, GAUGE_SIZE)
        .with_adjustments(adjustments)
}

fn segment(name: &str, value: f64) -> Record {
    let mut record = Record::new();
    record.insert("segment".to_string(), Value::String(name.to_string()));
    record.insert("value".to_string(), number(value));
    record
}
