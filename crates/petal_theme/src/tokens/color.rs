//! Color tokens for theming

use std::fmt;
use std::str::FromStr;

use petal_core::Color;
use serde::{Deserialize, Serialize};

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryLight,
    PrimaryDark,
    Secondary,

    // Semantic colors
    Success,
    Warning,
    Error,
    Info,

    // Surface colors
    Background,
    Surface,
    SurfaceVariant,
    Overlay,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextDisabled,
    TextInverse,

    // Border colors
    Border,
    BorderFocus,
    BorderError,
    BorderSuccess,

    // Input element colors
    InputBg,
    InputBgDisabled,

    // Muted tones for disabled controls
    DisabledBg,
    DisabledText,
}

impl ColorToken {
    pub const ALL: [ColorToken; 24] = [
        ColorToken::Primary,
        ColorToken::PrimaryLight,
        ColorToken::PrimaryDark,
        ColorToken::Secondary,
        ColorToken::Success,
        ColorToken::Warning,
        ColorToken::Error,
        ColorToken::Info,
        ColorToken::Background,
        ColorToken::Surface,
        ColorToken::SurfaceVariant,
        ColorToken::Overlay,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
        ColorToken::TextDisabled,
        ColorToken::TextInverse,
        ColorToken::Border,
        ColorToken::BorderFocus,
        ColorToken::BorderError,
        ColorToken::BorderSuccess,
        ColorToken::InputBg,
        ColorToken::InputBgDisabled,
        ColorToken::DisabledBg,
        ColorToken::DisabledText,
    ];

    /// Kebab-case name used in configuration files
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::PrimaryLight => "primary-light",
            ColorToken::PrimaryDark => "primary-dark",
            ColorToken::Secondary => "secondary",
            ColorToken::Success => "success",
            ColorToken::Warning => "warning",
            ColorToken::Error => "error",
            ColorToken::Info => "info",
            ColorToken::Background => "background",
            ColorToken::Surface => "surface",
            ColorToken::SurfaceVariant => "surface-variant",
            ColorToken::Overlay => "overlay",
            ColorToken::TextPrimary => "text-primary",
            ColorToken::TextSecondary => "text-secondary",
            ColorToken::TextDisabled => "text-disabled",
            ColorToken::TextInverse => "text-inverse",
            ColorToken::Border => "border",
            ColorToken::BorderFocus => "border-focus",
            ColorToken::BorderError => "border-error",
            ColorToken::BorderSuccess => "border-success",
            ColorToken::InputBg => "input-bg",
            ColorToken::InputBgDisabled => "input-bg-disabled",
            ColorToken::DisabledBg => "disabled-bg",
            ColorToken::DisabledText => "disabled-text",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorToken {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorToken::ALL
            .into_iter()
            .find(|token| token.name() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,
    pub secondary: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    pub background: Color,
    pub surface: Color,
    pub surface_variant: Color,
    /// Modal backdrop
    pub overlay: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,
    pub text_inverse: Color,

    pub border: Color,
    pub border_focus: Color,
    pub border_error: Color,
    pub border_success: Color,

    pub input_bg: Color,
    pub input_bg_disabled: Color,

    pub disabled_bg: Color,
    pub disabled_text: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryLight => self.primary_light,
            ColorToken::PrimaryDark => self.primary_dark,
            ColorToken::Secondary => self.secondary,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Error => self.error,
            ColorToken::Info => self.info,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceVariant => self.surface_variant,
            ColorToken::Overlay => self.overlay,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextDisabled => self.text_disabled,
            ColorToken::TextInverse => self.text_inverse,
            ColorToken::Border => self.border,
            ColorToken::BorderFocus => self.border_focus,
            ColorToken::BorderError => self.border_error,
            ColorToken::BorderSuccess => self.border_success,
            ColorToken::InputBg => self.input_bg,
            ColorToken::InputBgDisabled => self.input_bg_disabled,
            ColorToken::DisabledBg => self.disabled_bg,
            ColorToken::DisabledText => self.disabled_text,
        }
    }

    /// Mutable slot for a token, used when applying overrides
    pub fn slot_mut(&mut self, token: ColorToken) -> &mut Color {
        match token {
            ColorToken::Primary => &mut self.primary,
            ColorToken::PrimaryLight => &mut self.primary_light,
            ColorToken::PrimaryDark => &mut self.primary_dark,
            ColorToken::Secondary => &mut self.secondary,
            ColorToken::Success => &mut self.success,
            ColorToken::Warning => &mut self.warning,
            ColorToken::Error => &mut self.error,
            ColorToken::Info => &mut self.info,
            ColorToken::Background => &mut self.background,
            ColorToken::Surface => &mut self.surface,
            ColorToken::SurfaceVariant => &mut self.surface_variant,
            ColorToken::Overlay => &mut self.overlay,
            ColorToken::TextPrimary => &mut self.text_primary,
            ColorToken::TextSecondary => &mut self.text_secondary,
            ColorToken::TextDisabled => &mut self.text_disabled,
            ColorToken::TextInverse => &mut self.text_inverse,
            ColorToken::Border => &mut self.border,
            ColorToken::BorderFocus => &mut self.border_focus,
            ColorToken::BorderError => &mut self.border_error,
            ColorToken::BorderSuccess => &mut self.border_success,
            ColorToken::InputBg => &mut self.input_bg,
            ColorToken::InputBgDisabled => &mut self.input_bg_disabled,
            ColorToken::DisabledBg => &mut self.disabled_bg,
            ColorToken::DisabledText => &mut self.disabled_text,
        }
    }
}
