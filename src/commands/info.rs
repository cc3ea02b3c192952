use std::fmt::Write;

use crate::chart::ChartType;
use crate::cli::Cli;
use crate::error::Result;
use crate::generator::GeneratorRegistry;

use super::{finish, load_config, write_output};

/// One line per registered chart type: name, x field, y field.
#[must_use]
pub fn format_chart_types(registry: &GeneratorRegistry) -> String {
    let mut out = String::new();
    for chart_type in registry.chart_types() {
        let _ = writeln!(
            out,
            "{:<10} x={:<9} y={}",
            chart_type.as_str(),
            chart_type.default_x_field(),
            chart_type.default_y_field()
        );
    }
    out
}

#[must_use]
pub fn run_chart_types(cli: &Cli) -> i32 {
    let listing = format_chart_types(&GeneratorRegistry::default());
    finish(write_output(cli.output.as_deref(), listing.trim_end()))
}

/// Effective theme as a `[theme]` TOML table.
///
/// # Errors
/// Returns an error if the configuration or theme is invalid.
pub fn format_theme(cli: &Cli) -> Result<String> {
    let theme = load_config(cli)?.theme.build()?;
    let mut table = toml::Table::new();
    table.insert("theme".to_string(), toml::Value::try_from(theme)?);
    Ok(toml::to_string(&table)?)
}

#[must_use]
pub fn run_theme(cli: &Cli) -> i32 {
    finish(format_theme(cli).and_then(|toml| write_output(cli.output.as_deref(), toml.trim_end())))
}
