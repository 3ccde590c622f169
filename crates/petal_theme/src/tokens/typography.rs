//! Typography tokens

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
}

/// Font weight on the CSS 100-900 scale
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const REGULAR: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const SEMIBOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypographyTokens {
    pub font_family: String,
    pub text_xs: f32,
    pub text_sm: f32,
    pub text_md: f32,
    pub text_lg: f32,
    pub text_xl: f32,
    pub text_xxl: f32,
    pub text_xxxl: f32,
    /// Line height as a multiple of the font size
    pub line_height: f32,
}

impl TypographyTokens {
    pub fn size(&self, size: FontSize) -> f32 {
        match size {
            FontSize::Xs => self.text_xs,
            FontSize::Sm => self.text_sm,
            FontSize::Md => self.text_md,
            FontSize::Lg => self.text_lg,
            FontSize::Xl => self.text_xl,
            FontSize::Xxl => self.text_xxl,
            FontSize::Xxxl => self.text_xxxl,
        }
    }

    pub fn line_height_for(&self, font_size: f32) -> f32 {
        (font_size * self.line_height).round()
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: "System".to_string(),
            text_xs: 12.0,
            text_sm: 14.0,
            text_md: 16.0,
            text_lg: 18.0,
            text_xl: 20.0,
            text_xxl: 24.0,
            text_xxxl: 30.0,
            line_height: 1.5,
        }
    }
}
