//! Configuration file discovery and the settings it carries.

mod filesystem;
mod loader;
mod model;

pub use filesystem::{APP_NAME, FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{ChartSection, Config, HistorySection, ThemeSection};

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
