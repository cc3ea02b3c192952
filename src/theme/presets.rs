use crate::error::{Result, VizError};

use super::ThemeConfig;

/// Available preset names.
pub const AVAILABLE_PRESETS: &[&str] = &["dark", "light"];

/// Name of the preset used when nothing else is configured.
pub const DEFAULT_PRESET: &str = "dark";

/// Load a built-in theme preset by name.
///
/// # Errors
/// Returns an error if the preset name is unknown.
pub fn load_preset(name: &str) -> Result<ThemeConfig> {
    match name.trim().to_ascii_lowercase().as_str() {
        "dark" => Ok(dark()),
        "light" => Ok(light()),
        _ => Err(VizError::Config(format!(
            "Unknown theme preset: '{}'. Available presets: {}",
            name,
            AVAILABLE_PRESETS.join(", ")
        ))),
    }
}

/// Neon-on-slate brand palette.
#[must_use]
pub fn dark() -> ThemeConfig {
    ThemeConfig {
        primary: "#00F5FF".to_string(),
        secondary: "#E000FF".to_string(),
        accent: "#7B2CFF".to_string(),
        success: "#5BFF8A".to_string(),
        highlight: "#FF7A2F".to_string(),
        background: "#111827".to_string(),
        text: "#e2e8f0".to_string(),
        text_muted: "#94a3b8".to_string(),
        grid: "#374151".to_string(),
        track: "#1e293b".to_string(),
    }
}

/// Same hues as [`dark`], darkened for a white background.
#[must_use]
pub fn light() -> ThemeConfig {
    ThemeConfig {
        primary: "#0891b2".to_string(),
        secondary: "#c026d3".to_string(),
        accent: "#6d28d9".to_string(),
        success: "#16a34a".to_string(),
        highlight: "#ea580c".to_string(),
        background: "#ffffff".to_string(),
        text: "#1e293b".to_string(),
        text_muted: "#64748b".to_string(),
        grid: "#e2e8f0".to_string(),
        track: "#f1f5f9".to_string(),
    }
}
