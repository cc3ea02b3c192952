use clap::Parser;

use dynamic_viz::cli::{Cli, Commands};
use dynamic_viz::commands::{
    Intent, run_batch, run_chart_types, run_custom, run_init, run_intent, run_theme,
};
use dynamic_viz::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Comparison(args) => run_intent(Intent::Comparison(args), &cli),
        Commands::Trend(args) => run_intent(Intent::Trend(args), &cli),
        Commands::Distribution(args) => run_intent(Intent::Distribution(args), &cli),
        Commands::Metric(args) => run_intent(Intent::Metric(args), &cli),
        Commands::Funnel(args) => run_intent(Intent::Funnel(args), &cli),
        Commands::Custom(args) => run_custom(args, &cli),
        Commands::Batch(args) => run_batch(args, &cli),
        Commands::ChartTypes => run_chart_types(&cli),
        Commands::Theme => run_theme(&cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
