//! Animation duration tokens

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationToken {
    Fast,
    Normal,
    Slow,
}

/// Durations in milliseconds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationTokens {
    pub fast: u32,
    pub normal: u32,
    pub slow: u32,
}

impl AnimationTokens {
    pub fn get(&self, token: DurationToken) -> u32 {
        match token {
            DurationToken::Fast => self.fast,
            DurationToken::Normal => self.normal,
            DurationToken::Slow => self.slow,
        }
    }
}

impl Default for AnimationTokens {
    fn default() -> Self {
        Self {
            fast: 150,
            normal: 250,
            slow: 350,
        }
    }
}
