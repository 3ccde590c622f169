//! Theme values and light/dark bundles

use petal_core::Color;
use serde::{Deserialize, Serialize};

use crate::tokens::*;

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

/// A complete, immutable set of design tokens for one color scheme
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    name: String,
    scheme: ColorScheme,
    colors: ColorTokens,
    typography: TypographyTokens,
    spacing: SpacingTokens,
    radii: RadiusTokens,
    shadows: ShadowTokens,
    opacity: OpacityTokens,
    borders: BorderTokens,
    animations: AnimationTokens,
}

impl Theme {
    /// Assemble a theme from colors; the remaining tokens use the default scale
    pub fn new(name: impl Into<String>, scheme: ColorScheme, colors: ColorTokens) -> Self {
        let shadows = match scheme {
            ColorScheme::Light => ShadowTokens::light(),
            ColorScheme::Dark => ShadowTokens::dark(),
        };
        Self {
            name: name.into(),
            scheme,
            colors,
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            shadows,
            opacity: OpacityTokens::default(),
            borders: BorderTokens::default(),
            animations: AnimationTokens::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }

    pub fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    pub fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    /// Shorthand for `spacing().get(token)`
    pub fn space(&self, token: SpacingToken) -> f32 {
        self.spacing.get(token)
    }

    pub fn radii(&self) -> &RadiusTokens {
        &self.radii
    }

    pub fn radius(&self, token: RadiusToken) -> f32 {
        self.radii.get(token)
    }

    pub fn shadows(&self) -> &ShadowTokens {
        &self.shadows
    }

    pub fn opacity(&self) -> &OpacityTokens {
        &self.opacity
    }

    pub fn borders(&self) -> &BorderTokens {
        &self.borders
    }

    pub fn animations(&self) -> &AnimationTokens {
        &self.animations
    }

    pub fn duration(&self, token: DurationToken) -> u32 {
        self.animations.get(token)
    }

    /// Copy of this theme with one color replaced
    pub fn with_color(mut self, token: ColorToken, color: Color) -> Self {
        *self.colors.slot_mut(token) = color;
        self
    }

    pub fn with_typography(mut self, typography: TypographyTokens) -> Self {
        self.typography = typography;
        self
    }

    pub fn with_spacing(mut self, spacing: SpacingTokens) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_animations(mut self, animations: AnimationTokens) -> Self {
        self.animations = animations;
        self
    }
}

/// Light and dark variants of one theme
#[derive(Clone, Debug)]
pub struct ThemeBundle {
    pub name: String,
    pub light: Theme,
    pub dark: Theme,
}

impl ThemeBundle {
    pub fn new(name: impl Into<String>, light: Theme, dark: Theme) -> Self {
        Self {
            name: name.into(),
            light,
            dark,
        }
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &Theme {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}
