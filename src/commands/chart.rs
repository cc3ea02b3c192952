use serde_json::Value;
use tracing::debug;

use crate::assistant::Assistant;
use crate::cli::{BatchArgs, CategoryArgs, Cli, CustomArgs, FunnelArgs, MetricArgs, TrendArgs};
use crate::error::{Result, VizError};
use crate::history::HistoryEntry;
use crate::spec::Spec;

use super::{finish, load_config, read_input, to_json, write_output};

/// An intent subcommand with its arguments.
#[derive(Debug, Clone, Copy)]
pub enum Intent<'a> {
    Comparison(&'a CategoryArgs),
    Trend(&'a TrendArgs),
    Distribution(&'a CategoryArgs),
    Metric(&'a MetricArgs),
    Funnel(&'a FunnelArgs),
}

impl Intent<'_> {
    fn visualize(self, assistant: &Assistant) -> Result<Spec> {
        match self {
            Self::Comparison(args) => assistant.visualize_comparison(
                &args.common.title,
                &args.categories,
                &args.values,
                args.common.insight.as_deref(),
            ),
            Self::Trend(args) => assistant.visualize_trend(
                &args.common.title,
                &args.dates,
                &args.values,
                args.common.insight.as_deref(),
            ),
            Self::Distribution(args) => assistant.visualize_distribution(
                &args.common.title,
                &args.categories,
                &args.values,
                args.common.insight.as_deref(),
            ),
            Self::Metric(args) => assistant.visualize_metric(
                &args.common.title,
                args.value,
                args.max_value,
                args.common.insight.as_deref(),
            ),
            Self::Funnel(args) => assistant.visualize_funnel(
                &args.common.title,
                &args.stages,
                &args.values,
                args.common.insight.as_deref(),
            ),
        }
    }
}

fn assistant(cli: &Cli) -> Result<Assistant> {
    Assistant::from_config(&load_config(cli)?)
}

fn emit(cli: &Cli, spec: &Spec) -> Result<()> {
    let json = if cli.pretty {
        spec.to_json_pretty()?
    } else {
        spec.to_json()?
    };
    write_output(cli.output.as_deref(), &json)
}

#[must_use]
pub fn run_intent(intent: Intent<'_>, cli: &Cli) -> i32 {
    finish(assistant(cli).and_then(|assistant| emit(cli, &intent.visualize(&assistant)?)))
}

#[must_use]
pub fn run_custom(args: &CustomArgs, cli: &Cli) -> i32 {
    finish(run_custom_impl(args, cli))
}

fn run_custom_impl(args: &CustomArgs, cli: &Cli) -> Result<()> {
    let assistant = assistant(cli)?;
    let payload = read_input(&args.input)?;
    let spec = assistant.visualize_custom_json(&payload)?;
    emit(cli, &spec)
}

#[must_use]
pub fn run_batch(args: &BatchArgs, cli: &Cli) -> i32 {
    finish(run_batch_impl(args, cli))
}

/// Generate each payload in order, then print the whole history.
///
/// Stops at the first invalid payload.
fn run_batch_impl(args: &BatchArgs, cli: &Cli) -> Result<()> {
    let assistant = assistant(cli)?;
    let content = read_input(&args.input)?;
    let Value::Array(payloads) = serde_json::from_str(&content)? else {
        return Err(VizError::invalid_custom("<root>", "must be a JSON array of payloads"));
    };

    debug!(count = payloads.len(), "Running batch");
    for payload in payloads {
        assistant.visualize_custom(payload)?;
    }

    let history = assistant.get_chart_history();
    let entries: Vec<&HistoryEntry> = history.iter().map(|entry| &**entry).collect();
    write_output(cli.output.as_deref(), &to_json(&entries, cli.pretty)?)
}
