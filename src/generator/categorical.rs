//! Bar and funnel: a nominal label axis against a quantitative measure.

use serde_json::Value;

use crate::request::ChartRequest;
use crate::spec::{ChannelDef, Encoding, FieldType, Mark, MarkType, Scale, SpecFragment, View};

use super::clamp_negative;

/// Field added to funnel rows to record input order.
pub const FUNNEL_ORDER_FIELD: &str = "order";

pub fn bar(request: &ChartRequest) -> SpecFragment {
    let fields = &request.fields;
    let encoding = Encoding {
        x: Some(ChannelDef::field(&fields.x, FieldType::Nominal).untitled()),
        y: Some(ChannelDef::field(&fields.y, FieldType::Quantitative)),
        color: Some(
            ChannelDef::field(fields.color_or_x(), FieldType::Nominal)
                .with_scale(Scale::palette())
                .without_legend(),
        ),
        tooltip: Some(vec![
            ChannelDef::tooltip(&fields.x),
            ChannelDef::tooltip(&fields.y),
        ]),
        ..Encoding::default()
    };
    let mark = Mark::new(MarkType::Bar).with_corner_radius_end(4.0);

    SpecFragment::new(request.data.clone(), View::new(mark, encoding))
}

/// Horizontal bars, one per stage, top to bottom in input order.
pub fn funnel(request: &ChartRequest) -> SpecFragment {
    let fields = &request.fields;
    let mut data = request.data.clone();
    let adjustments = clamp_negative(&mut data, &fields.y);
    for (order, record) in data.iter_mut().enumerate() {
        record
            .entry(FUNNEL_ORDER_FIELD)
            .or_insert_with(|| Value::from(order));
    }

    let encoding = Encoding {
        x: Some(ChannelDef::field(&fields.y, FieldType::Quantitative)),
        y: Some(
            ChannelDef::field(&fields.x, FieldType::Ordinal)
                .unsorted()
                .untitled(),
        ),
        color: Some(
            ChannelDef::field(fields.color_or_x(), FieldType::Nominal)
                .with_scale(Scale::palette())
                .without_legend(),
        ),
        tooltip: Some(vec![
            ChannelDef::tooltip(&fields.x),
            ChannelDef::tooltip(&fields.y),
        ]),
        ..Encoding::default()
    };
    let mark = Mark::new(MarkType::Bar).with_corner_radius_end(4.0);

    SpecFragment::new(data, View::new(mark, encoding)).with_adjustments(adjustments)
}
