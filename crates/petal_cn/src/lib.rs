//! Petal Component Library
//!
//! Themed mobile components rendered into [`petal_layout`] element trees:
//! buttons, text inputs with validation, animated modals, and the settings
//! screen pieces (theme selector, settings panel).
//!
//! # Quick Start
//!
//! ```rust
//! use petal_cn::prelude::*;
//! use petal_theme::PetalTheme;
//!
//! let theme = PetalTheme::light();
//! let ctx = RenderContext::new(&theme);
//!
//! let tree = cn::button("Entrar")
//!     .variant(ButtonVariant::Outline)
//!     .on_press(|| Ok(()))
//!     .test_id("login")
//!     .render(&ctx)
//!     .unwrap();
//!
//! assert!(tree.find_by_test_id("login-text").is_some());
//! ```
//!
//! Every component takes its theme through a [`RenderContext`]. Props are
//! checked in development builds; in release builds an invalid prop falls
//! back to its documented default.

pub mod callback;
pub mod components;
pub mod context;
pub mod defaults;
pub mod error;
pub mod validate;

pub use components::*;
pub use context::RenderContext;
pub use defaults::{defaults_table, ComponentDefaults};
pub use error::PropError;
pub use validate::{PropEnum, PropValidator};

/// Shorthand constructors, `cn::button("Salvar")`
pub mod cn {
    use crate::components::{Button, Input, Modal, SettingsPanel, ThemeSelector};

    pub fn button(title: impl Into<String>) -> Button {
        Button::new(title)
    }

    pub fn input() -> Input {
        Input::new()
    }

    pub fn modal() -> Modal {
        Modal::new()
    }

    pub fn theme_selector() -> ThemeSelector {
        ThemeSelector::new()
    }

    pub fn settings_panel(title: impl Into<String>) -> SettingsPanel {
        SettingsPanel::new(title)
    }
}

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::callback::{ModeHandler, PressHandler, TextHandler, ToggleHandler};
    pub use crate::cn;
    pub use crate::components::validators;
    pub use crate::components::*;
    pub use crate::context::RenderContext;
    pub use crate::defaults::{defaults_table, ComponentDefaults};
    pub use crate::error::PropError;
    pub use crate::validate::{PropEnum, PropValidator};

    pub use petal_animation::{AnimationDriver, AnimationScheduler, ImmediateDriver};
    pub use petal_core::{BackHandler, BuildMode, Color};
    pub use petal_layout::prelude::*;
    pub use petal_theme::{ColorScheme, ThemeContext, ThemeMode};
}
