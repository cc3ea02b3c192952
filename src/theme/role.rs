use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VizError;

/// A semantic style role. The set is fixed; unknown roles are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeRole {
    Primary,
    Secondary,
    Accent,
    Success,
    Highlight,
    Background,
    Text,
    TextMuted,
    Grid,
    Track,
}

impl ThemeRole {
    pub const ALL: [Self; 10] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Success,
        Self::Highlight,
        Self::Background,
        Self::Text,
        Self::TextMuted,
        Self::Grid,
        Self::Track,
    ];

    /// Categorical palette, in scale order.
    pub const PALETTE: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Success,
        Self::Highlight,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Highlight => "highlight",
            Self::Background => "background",
            Self::Text => "text",
            Self::TextMuted => "text-muted",
            Self::Grid => "grid",
            Self::Track => "track",
        }
    }
}

impl fmt::Display for ThemeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeRole {
    type Err = VizError;

    /// Accepts kebab-case or snake_case names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| VizError::UnknownThemeRole(s.to_string()))
    }
}
