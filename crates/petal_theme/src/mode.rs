//! User-selectable theme mode

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::theme::ColorScheme;

/// Theme mode chosen by the user; `Auto` follows the system scheme
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto];

    /// Stable id for config/serialization
    pub fn id(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        }
    }

    /// User-facing label
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Claro",
            ThemeMode::Dark => "Escuro",
            ThemeMode::Auto => "Automático",
        }
    }

    /// Icon name shown next to the label
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "sunny",
            ThemeMode::Dark => "moon",
            ThemeMode::Auto => "phone-portrait",
        }
    }

    /// Scheme this mode resolves to given the system scheme
    pub fn resolve(self, system: ColorScheme) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::Light,
            ThemeMode::Dark => ColorScheme::Dark,
            ThemeMode::Auto => system,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeMode::ALL
            .into_iter()
            .find(|mode| mode.id() == s)
            .ok_or_else(|| s.to_string())
    }
}
