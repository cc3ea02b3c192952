use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dynamic-viz")]
#[command(author, version, about = "Generate themed Vega-Lite chart specifications")]
#[command(long_about = "Turns intent-level chart requests into Vega-Lite v5 JSON.\n\n\
    Exit codes:\n  \
    0 - Chart generated\n  \
    1 - Invalid chart request\n  \
    2 - Configuration or I/O error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bar chart comparing values across categories
    Comparison(CategoryArgs),

    /// Line chart of values over dates
    Trend(TrendArgs),

    /// Donut chart of parts of a whole
    Distribution(CategoryArgs),

    /// Gauge of a single value against a maximum
    Metric(MetricArgs),

    /// Funnel through ordered stages
    Funnel(FunnelArgs),

    /// Any chart type from a JSON payload
    Custom(CustomArgs),

    /// Generate every payload in a JSON array and print the history
    Batch(BatchArgs),

    /// List supported chart types
    ChartTypes,

    /// Print the effective theme as TOML
    Theme,

    /// Generate a starter configuration file
    Init(InitArgs),
}

/// Options shared by every intent command.
#[derive(Args, Debug, Clone)]
pub struct ChartCommonArgs {
    /// Chart title
    #[arg(short, long)]
    pub title: String,

    /// Key finding to annotate on the chart
    #[arg(short, long)]
    pub insight: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct CategoryArgs {
    #[command(flatten)]
    pub common: ChartCommonArgs,

    /// Category labels (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub categories: Vec<String>,

    /// Values, one per category (comma-separated)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub values: Vec<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct TrendArgs {
    #[command(flatten)]
    pub common: ChartCommonArgs,

    /// Dates (comma-separated, e.g. 2024-01,2024-02)
    #[arg(long, value_delimiter = ',', required = true)]
    pub dates: Vec<String>,

    /// Values, one per date (comma-separated)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub values: Vec<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct FunnelArgs {
    #[command(flatten)]
    pub common: ChartCommonArgs,

    /// Stage names in funnel order (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub stages: Vec<String>,

    /// Values, one per stage (comma-separated)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub values: Vec<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct MetricArgs {
    #[command(flatten)]
    pub common: ChartCommonArgs,

    /// Current value
    #[arg(long, allow_hyphen_values = true)]
    pub value: f64,

    /// Upper bound of the gauge
    #[arg(long, default_value_t = 100.0)]
    pub max_value: f64,
}

#[derive(Args, Debug, Clone)]
pub struct CustomArgs {
    /// JSON payload file, or "-" for stdin
    pub input: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// JSON file holding an array of custom payloads, or "-" for stdin
    pub input: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(default_value = ".dynamic-viz.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
