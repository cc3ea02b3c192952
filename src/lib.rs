//! Themed Vega-Lite chart specifications from intent-level requests.
//!
//! ```
//! use dynamic_viz::Assistant;
//!
//! let assistant = Assistant::new();
//! let spec = assistant
//!     .visualize_comparison("Market Share", &["A", "B"], &[60.0, 40.0], None)
//!     .unwrap();
//! assert_eq!(spec.title.text, "Market Share");
//! assert_eq!(assistant.get_chart_history().len(), 1);
//! ```

pub mod assistant;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod history;
pub mod insight;
pub mod logging;
pub mod request;
pub mod spec;
pub mod theme;

pub use assistant::Assistant;
pub use chart::ChartType;
pub use engine::{ChartDefaults, Engine};
pub use error::{Result, VizError};
pub use history::{HistoryEntry, HistoryStore};
pub use request::{ChartData, ChartOptions, ChartRequest};
pub use spec::Spec;
pub use theme::{ThemeConfig, ThemeRole};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_REQUEST_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
