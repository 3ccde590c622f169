use petal_core::BuildMode;
use petal_theme::{Theme, ThemeContext};

use crate::validate::PropValidator;

/// Inputs every render receives explicitly: the active theme and the build
/// mode that decides whether prop validation runs.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub mode: BuildMode,
}

impl<'a> RenderContext<'a> {
    /// Render with the build mode of the current compilation
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            mode: BuildMode::current(),
        }
    }

    pub fn from_theme_context(ctx: &'a ThemeContext) -> Self {
        Self::new(ctx.theme())
    }

    pub fn with_mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validator(&self, component: &'static str) -> PropValidator {
        PropValidator::new(component, self.mode)
    }
}
