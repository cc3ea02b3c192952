//! Generation engine: registry dispatch, theming, insight layer, title.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::chart::ChartType;
use crate::error::Result;
use crate::generator::GeneratorRegistry;
use crate::insight;
use crate::request::{ChartData, ChartOptions, ChartRequest};
use crate::spec::{Body, InlineData, Spec, StyleConfig, Title, VEGA_LITE_SCHEMA};
use crate::theme::ThemeConfig;

/// View size used when a generator does not pick its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDefaults {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            width: 400,
            height: 250,
        }
    }
}

/// Turns chart requests into themed specifications.
///
/// The theme is owned by the engine. Changing it needs `&mut Engine`, while
/// generation only needs `&Engine`, so a shared engine cannot observe a
/// theme change halfway through a call.
#[derive(Debug, Default)]
pub struct Engine {
    registry: GeneratorRegistry,
    theme: ThemeConfig,
    defaults: ChartDefaults,
}

impl Engine {
    /// Engine with every built-in generator and the given theme.
    #[must_use]
    pub fn new(theme: ThemeConfig) -> Self {
        Self::with_registry(theme, GeneratorRegistry::default())
    }

    #[must_use]
    pub fn with_registry(theme: ThemeConfig, registry: GeneratorRegistry) -> Self {
        Self {
            registry,
            theme,
            defaults: ChartDefaults::default(),
        }
    }

    #[must_use]
    pub const fn with_defaults(mut self, defaults: ChartDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    #[must_use]
    pub const fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    /// Mutable access for configuration-time theme overrides.
    pub const fn theme_mut(&mut self) -> &mut ThemeConfig {
        &mut self.theme
    }

    pub fn set_theme(&mut self, theme: ThemeConfig) {
        self.theme = theme;
    }

    #[must_use]
    pub const fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn defaults(&self) -> ChartDefaults {
        self.defaults
    }

    /// Validate inputs and build the normalized request.
    ///
    /// # Errors
    /// Returns `UnknownChartType` if no generator is registered for
    /// `chart_type`, or `MismatchedSeriesLength` for unequal series.
    pub fn prepare(
        &self,
        chart_type: ChartType,
        data: ChartData,
        options: ChartOptions,
    ) -> Result<ChartRequest> {
        self.registry.resolve(chart_type)?;
        ChartRequest::normalize(chart_type, data, options)
    }

    /// Generate the finished spec for a normalized request.
    ///
    /// # Errors
    /// Returns `UnknownChartType` if no generator is registered.
    pub fn render(&self, request: &ChartRequest) -> Result<Spec> {
        let generator = self.registry.resolve(request.chart_type)?;
        debug!(chart_type = %request.chart_type, "Resolved generator");
        info!(
            chart_type = %request.chart_type,
            title = %request.title,
            rows = request.data.len(),
            "Generating chart"
        );

        let fragment = generator.generate(request);
        for adjustment in &fragment.adjustments {
            warn!(
                chart_type = %request.chart_type,
                row = adjustment.row,
                field = %adjustment.field,
                original = adjustment.original,
                adjusted = adjustment.adjusted,
                "Clamped value outside the chart's meaningful range"
            );
        }

        let mut spec = Spec {
            schema: VEGA_LITE_SCHEMA.to_string(),
            title: Title::new(request.title.clone()),
            description: request.description.clone(),
            width: fragment.width.unwrap_or(self.defaults.width),
            height: fragment.height.unwrap_or(self.defaults.height),
            data: InlineData {
                values: fragment.data,
            },
            body: Body::Single(fragment.view),
            config: StyleConfig::default(),
        };

        if let Some(text) = request.insight.as_deref() {
            insight::annotate(&mut spec, request, text);
        }
        spec.resolve_paints(&self.theme);

        Ok(spec)
    }

    /// Validate, normalize, and render in one step.
    ///
    /// # Errors
    /// See [`Engine::prepare`] and [`Engine::render`].
    pub fn generate(
        &self,
        chart_type: ChartType,
        data: ChartData,
        options: ChartOptions,
    ) -> Result<Spec> {
        let request = self.prepare(chart_type, data, options)?;
        self.render(&request)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
