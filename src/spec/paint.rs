//! Colour slots: theme role placeholders and resolved colours.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::theme::{ThemeConfig, ThemeRole};

/// Colour value inside a chart specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paint {
    /// Direct colour (e.g., "#22c55e")
    Hex(String),
    /// Theme role placeholder, resolved by the engine
    Role(ThemeRole),
}

impl Paint {
    #[must_use]
    pub const fn role(role: ThemeRole) -> Self {
        Self::Role(role)
    }

    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Palette placeholders in scale order.
    #[must_use]
    pub fn palette() -> Vec<Self> {
        ThemeRole::PALETTE.into_iter().map(Self::Role).collect()
    }

    /// Convert to a CSS value string. Unresolved roles render as a CSS
    /// variable so a fragment stays displayable before theming.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::Role(role) => format!("var(--viz-{role})"),
        }
    }

    /// Replace a role placeholder with the theme's colour.
    pub fn resolve(&mut self, theme: &ThemeConfig) {
        if let Self::Role(role) = self {
            *self = Self::Hex(theme.get(*role).to_string());
        }
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Hex(_))
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for Paint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}
