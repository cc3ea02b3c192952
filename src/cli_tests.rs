use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn cli_comparison_splits_lists() {
    let cli = Cli::parse_from([
        "dynamic-viz",
        "comparison",
        "--title",
        "Market Share",
        "--categories",
        "Microsoft,Google,Amazon",
        "--values",
        "35,30,25",
    ]);
    match cli.command {
        Commands::Comparison(args) => {
            assert_eq!(args.common.title, "Market Share");
            assert_eq!(args.categories, ["Microsoft", "Google", "Amazon"]);
            assert_eq!(args.values, [35.0, 30.0, 25.0]);
            assert!(args.common.insight.is_none());
        }
        _ => panic!("Expected Comparison command"),
    }
}

#[test]
fn cli_values_accept_negative_numbers() {
    let cli = Cli::parse_from([
        "dynamic-viz",
        "trend",
        "-t",
        "Delta",
        "--dates",
        "2024-01,2024-02",
        "--values",
        "-3.5,2",
    ]);
    match cli.command {
        Commands::Trend(args) => assert_eq!(args.values, [-3.5, 2.0]),
        _ => panic!("Expected Trend command"),
    }
}

#[test]
fn cli_metric_defaults_max_value() {
    let cli = Cli::parse_from(["dynamic-viz", "metric", "--title", "CSAT", "--value", "85"]);
    match cli.command {
        Commands::Metric(args) => {
            assert!((args.value - 85.0).abs() < f64::EPSILON);
            assert!((args.max_value - 100.0).abs() < f64::EPSILON);
        }
        _ => panic!("Expected Metric command"),
    }
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "dynamic-viz",
        "custom",
        "payload.json",
        "--pretty",
        "-vv",
        "--output",
        "chart.json",
    ]);
    assert!(cli.pretty);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.output, Some(PathBuf::from("chart.json")));
    match cli.command {
        Commands::Custom(args) => assert_eq!(args.input, PathBuf::from("payload.json")),
        _ => panic!("Expected Custom command"),
    }
}

#[test]
fn cli_init_default_path() {
    let cli = Cli::parse_from(["dynamic-viz", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.path, PathBuf::from(".dynamic-viz.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_config_and_no_config_conflict() {
    let result = Cli::try_parse_from(["dynamic-viz", "theme", "--config", "a.toml", "--no-config"]);
    assert!(result.is_err());
}

#[test]
fn cli_quiet_and_verbose_conflict() {
    assert!(Cli::try_parse_from(["dynamic-viz", "chart-types", "-q", "-v"]).is_err());
}

#[test]
fn cli_funnel_requires_stages() {
    assert!(Cli::try_parse_from(["dynamic-viz", "funnel", "-t", "F", "--values", "1"]).is_err());
}
