//! Border width tokens

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BorderTokens {
    pub none: f32,
    pub thin: f32,
    pub thick: f32,
}

impl Default for BorderTokens {
    fn default() -> Self {
        Self {
            none: 0.0,
            thin: 1.0,
            thick: 2.0,
        }
    }
}
