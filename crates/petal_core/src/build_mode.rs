//! Build mode flag
//!
//! Debug-only checks (prop validation) consult a `BuildMode` value passed in
//! explicitly, so tests can exercise both modes from a single build.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Contract checks run and report violations
    #[default]
    Development,
    /// Contract checks are skipped
    Production,
}

impl BuildMode {
    /// `Development` when compiled with `debug_assertions`, else `Production`
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, BuildMode::Development)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_follows_debug_assertions() {
        assert_eq!(
            BuildMode::current().is_development(),
            cfg!(debug_assertions)
        );
    }
}
