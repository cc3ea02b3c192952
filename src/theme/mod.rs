//! Theme roles and the colour configuration injected into every chart.
//!
//! Generators never read the theme. They emit role placeholders which the
//! engine resolves against the active [`ThemeConfig`] at generation time, so
//! an override applies uniformly across all chart types.

mod color;
pub mod presets;
mod role;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VizError};

pub use color::is_valid_color;
pub use presets::{AVAILABLE_PRESETS, DEFAULT_PRESET, load_preset};
pub use role::ThemeRole;

/// Colour value for every [`ThemeRole`].
///
/// Fields are private so every write goes through validation; use
/// [`ThemeConfig::set`] or [`ThemeConfig::with`] to override a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ThemeConfig {
    primary: String,
    secondary: String,
    accent: String,
    success: String,
    highlight: String,
    background: String,
    text: String,
    text_muted: String,
    grid: String,
    track: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        presets::dark()
    }
}

impl ThemeConfig {
    #[must_use]
    pub fn get(&self, role: ThemeRole) -> &str {
        match role {
            ThemeRole::Primary => &self.primary,
            ThemeRole::Secondary => &self.secondary,
            ThemeRole::Accent => &self.accent,
            ThemeRole::Success => &self.success,
            ThemeRole::Highlight => &self.highlight,
            ThemeRole::Background => &self.background,
            ThemeRole::Text => &self.text,
            ThemeRole::TextMuted => &self.text_muted,
            ThemeRole::Grid => &self.grid,
            ThemeRole::Track => &self.track,
        }
    }

    fn slot_mut(&mut self, role: ThemeRole) -> &mut String {
        match role {
            ThemeRole::Primary => &mut self.primary,
            ThemeRole::Secondary => &mut self.secondary,
            ThemeRole::Accent => &mut self.accent,
            ThemeRole::Success => &mut self.success,
            ThemeRole::Highlight => &mut self.highlight,
            ThemeRole::Background => &mut self.background,
            ThemeRole::Text => &mut self.text,
            ThemeRole::TextMuted => &mut self.text_muted,
            ThemeRole::Grid => &mut self.grid,
            ThemeRole::Track => &mut self.track,
        }
    }

    /// Override one role.
    ///
    /// # Errors
    /// Returns `InvalidThemeValue` if `value` is not a colour.
    pub fn set(&mut self, role: ThemeRole, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        if !is_valid_color(&value) {
            return Err(VizError::InvalidThemeValue {
                role: role.to_string(),
                value,
            });
        }
        *self.slot_mut(role) = value;
        Ok(())
    }

    /// Override a role named by string (`"text-muted"` or `"text_muted"`).
    ///
    /// # Errors
    /// Returns `UnknownThemeRole` for keys outside the fixed set and
    /// `InvalidThemeValue` for values that are not colours.
    pub fn set_named(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let role: ThemeRole = key.parse()?;
        self.set(role, value)
    }

    /// Builder form of [`ThemeConfig::set`].
    ///
    /// # Errors
    /// Returns `InvalidThemeValue` if `value` is not a colour.
    pub fn with(mut self, role: ThemeRole, value: impl Into<String>) -> Result<Self> {
        self.set(role, value)?;
        Ok(self)
    }

    /// Categorical palette colours, in scale order.
    #[must_use]
    pub fn palette(&self) -> Vec<&str> {
        ThemeRole::PALETTE.iter().map(|&role| self.get(role)).collect()
    }

    /// Every role with its current value, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeRole, &str)> {
        ThemeRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    /// Check every value, e.g. after deserializing from a file.
    ///
    /// # Errors
    /// Returns `InvalidThemeValue` for the first role holding a non-colour.
    pub fn validate(&self) -> Result<()> {
        match self.iter().find(|(_, value)| !is_valid_color(value)) {
            Some((role, value)) => Err(VizError::InvalidThemeValue {
                role: role.to_string(),
                value: value.to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
