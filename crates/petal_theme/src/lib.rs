//! Petal Theme System
//!
//! Design tokens, the built-in light/dark theme pair, and the theme context
//! components read colors from.
//!
//! # Overview
//!
//! - **Design tokens**: colors, typography, spacing, radii, shadows, opacity,
//!   border widths, animation durations
//! - **Themes**: a [`ThemeBundle`] holds a light and a dark [`Theme`]
//! - **Theme context**: [`ThemeContext`] tracks the selected [`ThemeMode`]
//!   (light, dark, auto) and resolves the active theme
//! - **Configuration**: [`ThemeConfig`] loads the initial mode and color
//!   overrides from TOML
//!
//! # Quick Start
//!
//! ```rust
//! use petal_theme::{ColorScheme, ColorToken, PetalTheme, ThemeContext, ThemeMode};
//!
//! let mut ctx = ThemeContext::new(PetalTheme::bundle(), ThemeMode::Light, ColorScheme::Light);
//! let primary = ctx.theme().color(ColorToken::Primary);
//!
//! ctx.set_theme(ThemeMode::Dark);
//! assert!(ctx.is_dark());
//! assert_ne!(ctx.theme().color(ColorToken::Background), primary);
//! ```
//!
//! Components never reach for a global theme: the active [`Theme`] is passed
//! to them explicitly.

pub mod config;
pub mod context;
pub mod error;
pub mod mode;
pub mod theme;
pub mod themes;
pub mod tokens;

pub use config::ThemeConfig;
pub use context::{ThemeChange, ThemeContext};
pub use error::ThemeError;
pub use mode::ThemeMode;
pub use theme::{ColorScheme, Theme, ThemeBundle};
pub use themes::PetalTheme;
pub use tokens::*;
