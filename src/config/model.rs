use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::engine::ChartDefaults;
use crate::error::{Result, VizError};
use crate::theme::{DEFAULT_PRESET, ThemeConfig, ThemeRole, load_preset};

/// `[theme]`: a preset name plus per-role colour overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThemeSection {
    /// Preset to start from (default: "dark").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Role overrides, keyed by role name. Validated when the theme is built.
    #[serde(flatten)]
    pub overrides: toml::Table,
}

/// `[chart]`: view size for generators that do not pick their own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChartSection {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for ChartSection {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl From<ChartSection> for ChartDefaults {
    fn from(section: ChartSection) -> Self {
        Self {
            width: section.width,
            height: section.height,
        }
    }
}

const fn default_width() -> u32 {
    400
}

const fn default_height() -> u32 {
    250
}

/// `[history]`: retention and persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HistorySection {
    /// Keep at most this many entries in memory (unbounded when unset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<usize>,

    /// Append every entry to this JSON Lines file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeSection,

    #[serde(default)]
    pub chart: ChartSection,

    #[serde(default)]
    pub history: HistorySection,
}

impl ThemeSection {
    /// Build the effective theme: the preset with each override applied.
    ///
    /// # Errors
    /// Returns `Config` for an unknown preset, `UnknownThemeRole` for an
    /// override key outside the role set, and `InvalidThemeValue` for a
    /// value that is not a colour string.
    pub fn build(&self) -> Result<ThemeConfig> {
        let preset = self.preset.as_deref().unwrap_or(DEFAULT_PRESET);
        let mut theme = load_preset(preset)?;

        for (key, value) in &self.overrides {
            let role: ThemeRole = key.parse()?;
            let color = value.as_str().ok_or_else(|| VizError::InvalidThemeValue {
                role: role.to_string(),
                value: value.to_string(),
            })?;
            theme.set(role, color)?;
        }
        Ok(theme)
    }
}
