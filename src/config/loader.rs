use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, VizError};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};

pub const LOCAL_CONFIG_NAME: &str = ".dynamic-viz.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// A loaded configuration and the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub config: Config,
    /// `None` when no file was found and defaults are in effect.
    pub source: Option<PathBuf>,
}

pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.dynamic-viz.toml` in the current directory
/// 2. `config.toml` in the platform config directory (see [`FileSystem::config_dir`])
/// 3. Built-in defaults
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        // Surface bad presets and colours at load time, not on first chart.
        config.theme.build()?;
        if config.chart.width == 0 || config.chart.height == 0 {
            return Err(VizError::Config(
                "[chart] width and height must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        for path in [self.local_config_path(), self.user_config_path()]
            .into_iter()
            .flatten()
        {
            debug!(path = %path.display(), "Looking for config file");
            if self.fs.exists(&path) {
                return self.load_from_path(&path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(LoadResult {
            config: Config::default(),
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| VizError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::parse_config(&content)?;
        debug!(path = %path.display(), "Loaded config file");

        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
