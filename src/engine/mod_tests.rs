use serde_json::{Value, json};

use super::*;
use crate::error::VizError;
use crate::request::Record;
use crate::theme::ThemeRole;

fn records(value: Value) -> Vec<Record> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_object().unwrap().clone())
        .collect()
}

/// Minimal valid data for each chart type.
fn sample(chart_type: ChartType) -> ChartData {
    let rows = match chart_type {
        ChartType::Bar | ChartType::Pie | ChartType::Radial => json!([
            {"category": "A", "value": 10},
            {"category": "B", "value": 30}
        ]),
        ChartType::Line => json!([
            {"date": "2024-01-01", "value": 5},
            {"date": "2024-02-01", "value": 8}
        ]),
        ChartType::Scatter => json!([{"x": 1, "y": 2}, {"x": 3, "y": 4}]),
        ChartType::Heatmap => json!([{"x": "Mon", "y": "9am", "value": 3}]),
        ChartType::Gauge => json!([{"value": 85, "max": 100}]),
        ChartType::Funnel => json!([
            {"stage": "Leads", "value": 100},
            {"stage": "Won", "value": 20}
        ]),
        ChartType::Timeline => json!([{"date": "2024-03-01", "event": "Launch"}]),
    };
    ChartData::Records(records(rows))
}

fn leaves(value: &Value, path: String, out: &mut Vec<(String, Value)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                leaves(child, format!("{path}/{key}"), out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                leaves(child, format!("{path}/{index}"), out);
            }
        }
        leaf => out.push((path, leaf.clone())),
    }
}

fn leaf_list(spec: &Spec) -> Vec<(String, Value)> {
    let mut out = Vec::new();
    leaves(&spec.to_value().unwrap(), String::new(), &mut out);
    out
}

mod generate_tests {
    use super::*;

    #[test]
    fn title_is_copied_verbatim_for_every_type() {
        let engine = Engine::default();
        for chart_type in ChartType::ALL {
            let spec = engine
                .generate(chart_type, sample(chart_type), ChartOptions::new("Q3 Revenue"))
                .unwrap();
            assert_eq!(spec.title.text, "Q3 Revenue", "{chart_type}");
            assert_eq!(spec.schema, VEGA_LITE_SCHEMA);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let engine = Engine::default();
        for chart_type in ChartType::ALL {
            let first = engine
                .generate(chart_type, sample(chart_type), ChartOptions::new("Same"))
                .unwrap();
            let second = engine
                .generate(chart_type, sample(chart_type), ChartOptions::new("Same"))
                .unwrap();
            assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
        }
    }

    #[test]
    fn insight_adds_exactly_one_layer_and_keeps_primary_view() {
        let engine = Engine::default();
        for chart_type in ChartType::ALL {
            let plain = engine
                .generate(chart_type, sample(chart_type), ChartOptions::new("T"))
                .unwrap();
            let annotated = engine
                .generate(
                    chart_type,
                    sample(chart_type),
                    ChartOptions::new("T").with_insight(Some("Worth a look")),
                )
                .unwrap();

            assert_eq!(plain.annotation_count(), 0, "{chart_type}");
            assert_eq!(annotated.annotation_count(), 1, "{chart_type}");
            assert_eq!(plain.primary_views(), annotated.primary_views(), "{chart_type}");
            assert_eq!(plain.data, annotated.data);
        }
    }

    #[test]
    fn blank_insight_is_ignored() {
        let spec = Engine::default()
            .generate(
                ChartType::Bar,
                sample(ChartType::Bar),
                ChartOptions::new("T").with_insight(Some("   ")),
            )
            .unwrap();
        assert_eq!(spec.annotation_count(), 0);
    }

    #[test]
    fn every_colour_is_resolved() {
        let engine = Engine::default();
        for chart_type in ChartType::ALL {
            let spec = engine
                .generate(
                    chart_type,
                    sample(chart_type),
                    ChartOptions::new("T").with_insight(Some("note")),
                )
                .unwrap();
            let text = spec.to_json().unwrap();
            assert!(!text.contains("var(--viz-"), "{chart_type}: {text}");
        }
    }

    #[test]
    fn size_comes_from_defaults_unless_generator_overrides() {
        let engine = Engine::default().with_defaults(ChartDefaults {
            width: 640,
            height: 320,
        });
        let bar = engine
            .generate(ChartType::Bar, sample(ChartType::Bar), ChartOptions::new("T"))
            .unwrap();
        assert_eq!((bar.width, bar.height), (640, 320));

        let gauge = engine
            .generate(ChartType::Gauge, sample(ChartType::Gauge), ChartOptions::new("T"))
            .unwrap();
        assert_eq!((gauge.width, gauge.height), (200, 200));
    }

    #[test]
    fn description_is_emitted_when_given() {
        let spec = Engine::default()
            .generate(
                ChartType::Line,
                sample(ChartType::Line),
                ChartOptions::new("T").with_description("Monthly active users"),
            )
            .unwrap();
        assert_eq!(spec.to_value().unwrap()["description"], "Monthly active users");
    }
}

mod theme_tests {
    use super::*;

    fn annotated_leaves(engine: &Engine, chart_type: ChartType) -> Vec<(String, Value)> {
        let options = ChartOptions::new("T").with_insight(Some("note"));
        let spec = engine
            .generate(chart_type, sample(chart_type), options)
            .unwrap();
        leaf_list(&spec)
    }

    #[test]
    fn overriding_a_role_changes_only_its_slots() {
        const OVERRIDE: &str = "#123456";

        for role in ThemeRole::ALL {
            let base = Engine::default();
            let old = base.theme().get(role).to_string();
            let mut overridden = Engine::default();
            overridden.theme_mut().set(role, OVERRIDE).unwrap();

            let mut changed = 0;
            for chart_type in ChartType::ALL {
                let before = annotated_leaves(&base, chart_type);
                let after = annotated_leaves(&overridden, chart_type);
                assert_eq!(before.len(), after.len(), "{role} / {chart_type}");

                for ((path, old_leaf), (new_path, new_leaf)) in before.iter().zip(&after) {
                    assert_eq!(path, new_path);
                    if old_leaf != new_leaf {
                        assert_eq!(old_leaf, &json!(old), "{role} / {chart_type} at {path}");
                        assert_eq!(new_leaf, &json!(OVERRIDE), "{role} / {chart_type} at {path}");
                        changed += 1;
                    }
                }
            }
            assert!(changed > 0, "{role} is not used by any chart");
        }
    }

    #[test]
    fn line_stroke_follows_primary() {
        let mut engine = Engine::default();
        engine.theme_mut().set(ThemeRole::Primary, "#abcdef").unwrap();
        let spec = engine
            .generate(ChartType::Line, sample(ChartType::Line), ChartOptions::new("T"))
            .unwrap();
        assert_eq!(spec.to_value().unwrap()["encoding"]["color"]["value"], "#abcdef");
    }

    #[test]
    fn set_theme_switches_presets() {
        let mut engine = Engine::default();
        engine.set_theme(crate::theme::load_preset("light").unwrap());
        let spec = engine
            .generate(ChartType::Bar, sample(ChartType::Bar), ChartOptions::new("T"))
            .unwrap();
        assert_eq!(spec.to_value().unwrap()["config"]["background"], "#ffffff");
    }
}

mod scenario_tests {
    use super::*;

    #[test]
    fn market_share_distribution() {
        let data = ChartData::series(
            "categories",
            &["Product A", "Product B", "Product C"],
            &[45.0, 30.0, 25.0],
        );
        let spec = Engine::default()
            .generate(ChartType::Pie, data, ChartOptions::new("Market Share"))
            .unwrap();
        let value = spec.to_value().unwrap();

        assert_eq!(value["mark"]["type"], "arc");
        assert_eq!(value["data"]["values"].as_array().unwrap().len(), 3);
        assert_eq!(value["data"]["values"][0]["category"], "Product A");
        assert_eq!(value["encoding"]["theta"]["field"], "value");
        assert_eq!(value["encoding"]["color"]["field"], "category");
    }

    #[test]
    fn csat_gauge() {
        let data = ChartData::Records(records(json!([{"value": 4.2, "max": 5.0}])));
        let spec = Engine::default()
            .generate(
                ChartType::Gauge,
                data,
                ChartOptions::new("CSAT").with_insight(Some("Above target")),
            )
            .unwrap();
        let value = spec.to_value().unwrap();

        let values = &value["layer"][0]["encoding"]["theta"]["scale"]["domain"];
        assert_eq!(values, &json!([0.0, 5.0]));
        let remaining = spec.data.values[1]["value"].as_f64().unwrap();
        assert!((remaining - 0.8).abs() < 1e-9);
    }

    #[test]
    fn mismatched_series_is_rejected() {
        let data = ChartData::series("categories", &["A", "B"], &[1.0]);
        let err = Engine::default()
            .generate(ChartType::Bar, data, ChartOptions::new("T"))
            .unwrap_err();
        assert!(matches!(
            err,
            VizError::MismatchedSeriesLength {
                label_count: 2,
                value_count: 1,
                ..
            }
        ));
    }

    #[test]
    fn unregistered_type_is_rejected() {
        let engine = Engine::with_registry(ThemeConfig::default(), GeneratorRegistry::new());
        let err = engine
            .generate(ChartType::Bar, sample(ChartType::Bar), ChartOptions::new("T"))
            .unwrap_err();
        assert!(matches!(err, VizError::UnknownChartType(_)));
    }
}
