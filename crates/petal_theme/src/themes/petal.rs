//! Default Petal theme
//!
//! Indigo brand color over slate neutrals. Light mode uses white surfaces,
//! dark mode uses slate 900/800 surfaces with lightened brand tones.

use petal_core::Color;

use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::tokens::ColorTokens;

/// Raw palette the semantic tokens are picked from
pub mod palette {
    pub const INDIGO_300: u32 = 0xA5B4FC;
    pub const INDIGO_400: u32 = 0x818CF8;
    pub const INDIGO_500: u32 = 0x6366F1;
    pub const INDIGO_700: u32 = 0x4338CA;
    pub const VIOLET_400: u32 = 0xA78BFA;
    pub const VIOLET_600: u32 = 0x7C3AED;

    pub const EMERALD_400: u32 = 0x34D399;
    pub const EMERALD_600: u32 = 0x059669;
    pub const AMBER_400: u32 = 0xFBBF24;
    pub const AMBER_500: u32 = 0xF59E0B;
    pub const RED_400: u32 = 0xF87171;
    pub const RED_600: u32 = 0xDC2626;
    pub const SKY_400: u32 = 0x38BDF8;
    pub const SKY_600: u32 = 0x0284C7;

    pub const SLATE_50: u32 = 0xF8FAFC;
    pub const SLATE_100: u32 = 0xF1F5F9;
    pub const SLATE_200: u32 = 0xE2E8F0;
    pub const SLATE_300: u32 = 0xCBD5E1;
    pub const SLATE_400: u32 = 0x94A3B8;
    pub const SLATE_500: u32 = 0x64748B;
    pub const SLATE_600: u32 = 0x475569;
    pub const SLATE_700: u32 = 0x334155;
    pub const SLATE_800: u32 = 0x1E293B;
    pub const SLATE_900: u32 = 0x0F172A;
    pub const SLATE_950: u32 = 0x020617;
}

/// Default Petal theme
pub struct PetalTheme;

impl PetalTheme {
    pub const NAME: &'static str = "Petal";

    pub fn light() -> Theme {
        use palette::*;
        let hex = Color::from_hex;

        Theme::new(
            Self::NAME,
            ColorScheme::Light,
            ColorTokens {
                primary: hex(INDIGO_500),
                primary_light: hex(INDIGO_300),
                primary_dark: hex(INDIGO_700),
                secondary: hex(VIOLET_600),
                success: hex(EMERALD_600),
                warning: hex(AMBER_500),
                error: hex(RED_600),
                info: hex(SKY_600),
                background: hex(SLATE_50),
                surface: Color::WHITE,
                surface_variant: hex(SLATE_100),
                overlay: Color::BLACK.with_alpha(0.5),
                text_primary: hex(SLATE_900),
                text_secondary: hex(SLATE_500),
                text_disabled: hex(SLATE_400),
                text_inverse: Color::WHITE,
                border: hex(SLATE_300),
                border_focus: hex(INDIGO_500),
                border_error: hex(RED_600),
                border_success: hex(EMERALD_600),
                input_bg: Color::WHITE,
                input_bg_disabled: hex(SLATE_100),
                disabled_bg: hex(SLATE_200),
                disabled_text: hex(SLATE_400),
            },
        )
    }

    pub fn dark() -> Theme {
        use palette::*;
        let hex = Color::from_hex;

        Theme::new(
            Self::NAME,
            ColorScheme::Dark,
            ColorTokens {
                primary: hex(INDIGO_400),
                primary_light: hex(INDIGO_300),
                primary_dark: hex(INDIGO_500),
                secondary: hex(VIOLET_400),
                success: hex(EMERALD_400),
                warning: hex(AMBER_400),
                error: hex(RED_400),
                info: hex(SKY_400),
                background: hex(SLATE_950),
                surface: hex(SLATE_900),
                surface_variant: hex(SLATE_800),
                overlay: Color::BLACK.with_alpha(0.7),
                text_primary: hex(SLATE_50),
                text_secondary: hex(SLATE_400),
                text_disabled: hex(SLATE_600),
                text_inverse: Color::WHITE,
                border: hex(SLATE_700),
                border_focus: hex(INDIGO_400),
                border_error: hex(RED_400),
                border_success: hex(EMERALD_400),
                input_bg: hex(SLATE_900),
                input_bg_disabled: hex(SLATE_800),
                disabled_bg: hex(SLATE_700),
                disabled_text: hex(SLATE_500),
            },
        )
    }

    /// Light/dark pair
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new(Self::NAME, Self::light(), Self::dark())
    }
}
