//! Opacity tokens

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpacityToken {
    Disabled,
    Pressed,
    Backdrop,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpacityTokens {
    pub disabled: f32,
    pub pressed: f32,
    pub backdrop: f32,
}

impl OpacityTokens {
    pub fn get(&self, token: OpacityToken) -> f32 {
        match token {
            OpacityToken::Disabled => self.disabled,
            OpacityToken::Pressed => self.pressed,
            OpacityToken::Backdrop => self.backdrop,
        }
    }
}

impl Default for OpacityTokens {
    fn default() -> Self {
        Self {
            disabled: 0.5,
            pressed: 0.8,
            backdrop: 0.5,
        }
    }
}
