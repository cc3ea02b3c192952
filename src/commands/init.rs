use std::fs;

use crate::cli::InitArgs;
use crate::error::{Result, VizError};

use super::finish;

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    finish(run_init_impl(args))
}

/// Writes a starter configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.path;

    if output_path.exists() && !args.force {
        return Err(VizError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        VizError::FileAccess {
            path: output_path.clone(),
            source,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# dynamic-viz configuration file

[theme]
# Starting palette: "dark" (default) or "light"
preset = "dark"

# Override any role (hex colour or CSS colour keyword):
# primary, secondary, accent, success, highlight, background,
# text, text-muted, grid, track
# primary = "#00F5FF"
# background = "#111827"

[chart]
# View size for charts that do not choose their own
width = 400
height = 250

[history]
# Keep only the most recent entries in memory (unbounded when unset)
# max_entries = 500

# Append every generated chart to a JSON Lines file
# path = "charts.jsonl"
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
