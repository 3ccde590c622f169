//! Theme error types

use petal_core::ColorParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    /// The configuration file is not valid TOML for [`crate::ThemeConfig`]
    #[error("invalid theme config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unknown color token `{0}`")]
    UnknownToken(String),

    #[error("invalid color for `{token}`: {source}")]
    InvalidColor {
        token: String,
        #[source]
        source: ColorParseError,
    },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
