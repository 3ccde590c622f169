//! Shadow tokens
//!
//! Mobile shadows carry both the iOS-style offset/blur/opacity description
//! and an Android elevation.

use petal_core::Color;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowToken {
    None,
    Sm,
    Md,
    Lg,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub opacity: f32,
    pub elevation: f32,
    pub color: Color,
}

impl Shadow {
    pub fn new(offset_y: f32, blur: f32, opacity: f32, elevation: f32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y,
            blur,
            opacity,
            elevation,
            color: Color::BLACK,
        }
    }

    pub fn none() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowTokens {
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
}

impl ShadowTokens {
    pub fn get(&self, token: ShadowToken) -> Shadow {
        match token {
            ShadowToken::None => Shadow::none(),
            ShadowToken::Sm => self.sm.clone(),
            ShadowToken::Md => self.md.clone(),
            ShadowToken::Lg => self.lg.clone(),
        }
    }

    pub fn light() -> Self {
        Self {
            sm: Shadow::new(1.0, 2.0, 0.05, 1.0),
            md: Shadow::new(2.0, 4.0, 0.1, 3.0),
            lg: Shadow::new(4.0, 8.0, 0.15, 6.0),
        }
    }

    /// Dark surfaces need stronger shadows to read as elevated
    pub fn dark() -> Self {
        Self {
            sm: Shadow::new(1.0, 2.0, 0.3, 1.0),
            md: Shadow::new(2.0, 4.0, 0.4, 3.0),
            lg: Shadow::new(4.0, 8.0, 0.5, 6.0),
        }
    }
}
