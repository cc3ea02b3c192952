//! Subcommand runners. Each returns the process exit code.

mod chart;
mod info;
mod init;

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{Result, VizError};
use crate::{EXIT_CONFIG_ERROR, EXIT_REQUEST_ERROR, EXIT_SUCCESS};

pub use chart::{Intent, run_batch, run_custom, run_intent};
pub use info::{format_chart_types, format_theme, run_chart_types, run_theme};
pub use init::{generate_config_template, run_init, run_init_impl};

/// Exit code for a failed command.
#[must_use]
pub fn exit_code_for(error: &VizError) -> i32 {
    if error.is_request_error() {
        EXIT_REQUEST_ERROR
    } else {
        EXIT_CONFIG_ERROR
    }
}

/// Print the error, if any, and map the outcome to an exit code.
#[must_use]
pub fn finish(result: Result<()>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

/// Load configuration honoring `--config` and `--no-config`.
///
/// # Errors
/// Returns an error if the config file cannot be read or is invalid.
pub fn load_config(cli: &Cli) -> Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let result = cli
        .config
        .as_deref()
        .map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    Ok(result.config)
}

/// Read a file, or stdin when `path` is `-`.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    fs::read_to_string(path).map_err(|source| VizError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content).map_err(|source| VizError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
    } else {
        println!("{content}");
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
