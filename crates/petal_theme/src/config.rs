//! TOML theme configuration
//!
//! ```toml
//! mode = "dark"
//! theme = "Petal"
//!
//! [colors]
//! primary = "#e11d48"
//! border-focus = "#e11d48"
//! ```

use std::collections::BTreeMap;

use petal_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::mode::ThemeMode;
use crate::tokens::ColorToken;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Initial theme mode
    pub mode: ThemeMode,
    /// Bundle name; informational, the host picks the bundle
    pub theme: Option<String>,
    /// Color overrides keyed by kebab-case token name
    pub colors: BTreeMap<String, String>,
}

impl ThemeConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Parse the `[colors]` table into typed overrides
    pub fn color_overrides(&self) -> Result<Vec<(ColorToken, Color)>> {
        self.colors
            .iter()
            .map(|(name, value)| {
                let token = name
                    .parse::<ColorToken>()
                    .map_err(ThemeError::UnknownToken)?;
                let color = Color::parse_hex(value).map_err(|source| ThemeError::InvalidColor {
                    token: name.clone(),
                    source,
                })?;
                Ok((token, color))
            })
            .collect()
    }
}
