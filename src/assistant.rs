//! Intent-named façade over the engine that records every chart.

use std::sync::Arc;

use serde_json::Value;

use crate::chart::ChartType;
use crate::config::Config;
use crate::engine::Engine;
use crate::error::Result;
use crate::history::{HistoryEntry, HistoryStore, JsonLinesSink};
use crate::request::{ChartData, ChartOptions, CustomRequest, Record, number};
use crate::spec::Spec;

/// Turns convenience arguments into engine calls and keeps the history.
///
/// All methods take `&self`; an `Assistant` can be shared across threads.
#[derive(Debug, Default)]
pub struct Assistant {
    engine: Engine,
    history: HistoryStore,
}

impl Assistant {
    /// Dark theme, default sizes, unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_engine(engine: Engine) -> Self {
        Self {
            engine,
            history: HistoryStore::new(),
        }
    }

    #[must_use]
    pub fn with_history(mut self, history: HistoryStore) -> Self {
        self.history = history;
        self
    }

    /// Build from loaded configuration: theme, chart size, and history policy.
    ///
    /// # Errors
    /// Returns an error if the theme section is invalid or the history file
    /// cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self> {
        let engine = Engine::new(config.theme.build()?).with_defaults(config.chart.into());

        let mut history = HistoryStore::new();
        if let Some(max_entries) = config.history.max_entries {
            history = history.with_max_entries(max_entries);
        }
        if let Some(path) = &config.history.path {
            history = history.with_sink(JsonLinesSink::open(path)?);
        }

        Ok(Self { engine, history })
    }

    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Mutable engine access, e.g. for theme overrides between charts.
    pub const fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    #[must_use]
    pub const fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Generate a chart and record it in the history.
    ///
    /// # Errors
    /// Propagates request validation errors from the engine. Nothing is
    /// recorded on failure.
    pub fn generate(
        &self,
        chart_type: ChartType,
        data: ChartData,
        options: ChartOptions,
    ) -> Result<Spec> {
        let request = self.engine.prepare(chart_type, data, options)?;
        let spec = self.engine.render(&request)?;
        self.history
            .append(request, self.engine.theme().clone(), spec.clone());
        Ok(spec)
    }

    /// Bar chart comparing values across categories.
    ///
    /// # Errors
    /// Returns `MismatchedSeriesLength` if the slices differ in length.
    pub fn visualize_comparison<S: AsRef<str>>(
        &self,
        title: &str,
        categories: &[S],
        values: &[f64],
        insight: Option<&str>,
    ) -> Result<Spec> {
        self.generate(
            ChartType::Bar,
            ChartData::series("categories", categories, values),
            ChartOptions::new(title).with_insight(insight),
        )
    }

    /// Line chart over dates.
    ///
    /// # Errors
    /// Returns `MismatchedSeriesLength` if the slices differ in length.
    pub fn visualize_trend<S: AsRef<str>>(
        &self,
        title: &str,
        dates: &[S],
        values: &[f64],
        insight: Option<&str>,
    ) -> Result<Spec> {
        self.generate(
            ChartType::Line,
            ChartData::series("dates", dates, values),
            ChartOptions::new(title).with_insight(insight),
        )
    }

    /// Donut chart of parts of a whole.
    ///
    /// # Errors
    /// Returns `MismatchedSeriesLength` if the slices differ in length.
    pub fn visualize_distribution<S: AsRef<str>>(
        &self,
        title: &str,
        categories: &[S],
        values: &[f64],
        insight: Option<&str>,
    ) -> Result<Spec> {
        self.generate(
            ChartType::Pie,
            ChartData::series("categories", categories, values),
            ChartOptions::new(title).with_insight(insight),
        )
    }

    /// Gauge of a single value against `max_value`.
    ///
    /// # Errors
    /// Never fails for finite inputs; the signature matches the other intents.
    pub fn visualize_metric(
        &self,
        title: &str,
        value: f64,
        max_value: f64,
        insight: Option<&str>,
    ) -> Result<Spec> {
        let mut row = Record::new();
        row.insert("value".to_string(), number(value));
        row.insert("max".to_string(), number(max_value));

        self.generate(
            ChartType::Gauge,
            ChartData::records(vec![row]),
            ChartOptions::new(title)
                .with_insight(insight)
                .with_max_value(max_value),
        )
    }

    /// Horizontal funnel through ordered stages.
    ///
    /// # Errors
    /// Returns `MismatchedSeriesLength` if the slices differ in length.
    pub fn visualize_funnel<S: AsRef<str>>(
        &self,
        title: &str,
        stages: &[S],
        values: &[f64],
        insight: Option<&str>,
    ) -> Result<Spec> {
        self.generate(
            ChartType::Funnel,
            ChartData::series("stages", stages, values),
            ChartOptions::new(title).with_insight(insight),
        )
    }

    /// Any chart type from a loosely structured payload.
    ///
    /// # Errors
    /// Returns `InvalidCustomSpec` or `UnknownChartType` for a bad payload.
    pub fn visualize_custom(&self, payload: Value) -> Result<Spec> {
        let (chart_type, data, options) = CustomRequest::from_value(payload)?.into_parts();
        self.generate(chart_type, data, options)
    }

    /// [`Assistant::visualize_custom`] from JSON text.
    ///
    /// # Errors
    /// Returns `JsonSerialize` for malformed JSON, otherwise as
    /// [`Assistant::visualize_custom`].
    pub fn visualize_custom_json(&self, payload: &str) -> Result<Spec> {
        let (chart_type, data, options) = CustomRequest::from_json(payload)?.into_parts();
        self.generate(chart_type, data, options)
    }

    /// Every retained chart in generation order.
    #[must_use]
    pub fn get_chart_history(&self) -> Vec<Arc<HistoryEntry>> {
        self.history.all()
    }

    pub fn clear_history(&self) {
        self.history.clear();
    }
}

#[cfg(test)]
#[path = "assistant_tests.rs"]
mod tests;
