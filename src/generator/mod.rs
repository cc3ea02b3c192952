//! Chart-type generators and the registry that dispatches to them.
//!
//! A generator is a pure function from a normalized [`ChartRequest`] to a
//! [`SpecFragment`]: it picks the mark, encodes the axes, and handles
//! degenerate input (empty data, negative values) without failing. It never
//! sees the theme and never writes history.

mod arc;
mod categorical;
mod matrix;
mod temporal;

use indexmap::IndexMap;
use serde_json::Value;

use crate::chart::ChartType;
use crate::error::{Result, VizError};
use crate::request::{ChartRequest, Record, number};
use crate::spec::{Adjustment, SpecFragment};

pub use arc::{gauge, pie, radial};
pub use categorical::{bar, funnel};
pub use matrix::{heatmap, scatter};
pub use temporal::{line, timeline};

/// Produces a spec fragment from normalized data and options.
pub trait Generator: Send + Sync {
    fn generate(&self, request: &ChartRequest) -> SpecFragment;
}

impl<F> Generator for F
where
    F: Fn(&ChartRequest) -> SpecFragment + Send + Sync,
{
    fn generate(&self, request: &ChartRequest) -> SpecFragment {
        self(request)
    }
}

/// Mapping from chart type to its generator.
pub struct GeneratorRegistry {
    generators: IndexMap<ChartType, Box<dyn Generator>>,
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("chart_types", &self.generators.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl GeneratorRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            generators: IndexMap::new(),
        }
    }

    /// Associate `chart_type` with `generator`, replacing any previous one.
    pub fn register(&mut self, chart_type: ChartType, generator: impl Generator + 'static) {
        self.generators.insert(chart_type, Box::new(generator));
    }

    /// # Errors
    /// Returns `UnknownChartType` when no generator is registered.
    pub fn resolve(&self, chart_type: ChartType) -> Result<&dyn Generator> {
        self.generators
            .get(&chart_type)
            .map(|generator| &**generator)
            .ok_or_else(|| VizError::UnknownChartType(chart_type.to_string()))
    }

    #[must_use]
    pub fn contains(&self, chart_type: ChartType) -> bool {
        self.generators.contains_key(&chart_type)
    }

    /// Registered chart types, in registration order.
    pub fn chart_types(&self) -> impl Iterator<Item = ChartType> + '_ {
        self.generators.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl Default for GeneratorRegistry {
    /// Registry with a generator for every supported chart type.
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register(ChartType::Bar, bar);
        registry.register(ChartType::Line, line);
        registry.register(ChartType::Scatter, scatter);
        registry.register(ChartType::Pie, pie);
        registry.register(ChartType::Gauge, gauge);
        registry.register(ChartType::Funnel, funnel);
        registry.register(ChartType::Heatmap, heatmap);
        registry.register(ChartType::Radial, radial);
        registry.register(ChartType::Timeline, timeline);

        registry
    }
}

/// Replace negative numbers in `field` with zero.
fn clamp_negative(data: &mut [Record], field: &str) -> Vec<Adjustment> {
    let mut adjustments = Vec::new();
    for (row, record) in data.iter_mut().enumerate() {
        let Some(value) = record.get(field).and_then(Value::as_f64) else {
            continue;
        };
        if value < 0.0 {
            record.insert(field.to_string(), number(0.0));
            adjustments.push(Adjustment {
                row,
                field: field.to_string(),
                original: value,
                adjusted: 0.0,
            });
        }
    }
    adjustments
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
