//! Theme context
//!
//! Owns the light/dark bundle, the user's [`ThemeMode`] and the system color
//! scheme, and resolves the [`Theme`] components render with. Unlike a global
//! singleton the context is passed explicitly; components only read from it.

use petal_core::Color;
use rustc_hash::FxHashMap;

use crate::config::ThemeConfig;
use crate::error::Result;
use crate::mode::ThemeMode;
use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::tokens::ColorToken;

/// Notification delivered to change listeners
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub mode: ThemeMode,
    pub previous_scheme: ColorScheme,
    pub scheme: ColorScheme,
}

impl ThemeChange {
    /// Whether the resolved colors actually changed
    pub fn scheme_changed(&self) -> bool {
        self.previous_scheme != self.scheme
    }
}

type ChangeListener = Box<dyn FnMut(&ThemeChange)>;

pub struct ThemeContext {
    bundle: ThemeBundle,
    mode: ThemeMode,
    system_scheme: ColorScheme,
    color_overrides: FxHashMap<ColorToken, Color>,
    /// Active theme with overrides applied
    resolved: Theme,
    listeners: Vec<ChangeListener>,
}

impl ThemeContext {
    pub fn new(bundle: ThemeBundle, mode: ThemeMode, system_scheme: ColorScheme) -> Self {
        let resolved = bundle.for_scheme(mode.resolve(system_scheme)).clone();
        Self {
            bundle,
            mode,
            system_scheme,
            color_overrides: FxHashMap::default(),
            resolved,
            listeners: Vec::new(),
        }
    }

    /// Build a context from a parsed configuration file
    pub fn from_config(
        bundle: ThemeBundle,
        config: &ThemeConfig,
        system_scheme: ColorScheme,
    ) -> Result<Self> {
        let mut ctx = Self::new(bundle, config.mode, system_scheme);
        for (token, color) in config.color_overrides()? {
            ctx.color_overrides.insert(token, color);
        }
        ctx.refresh();
        tracing::debug!(
            "theme context from config: mode={:?}, {} color override(s)",
            ctx.mode,
            ctx.color_overrides.len()
        );
        Ok(ctx)
    }

    /// Active theme
    pub fn theme(&self) -> &Theme {
        &self.resolved
    }

    pub fn bundle(&self) -> &ThemeBundle {
        &self.bundle
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn theme_mode_label(&self) -> &'static str {
        self.mode.label()
    }

    pub fn scheme(&self) -> ColorScheme {
        self.mode.resolve(self.system_scheme)
    }

    pub fn system_scheme(&self) -> ColorScheme {
        self.system_scheme
    }

    pub fn is_dark(&self) -> bool {
        self.scheme().is_dark()
    }

    /// Select a theme mode
    pub fn set_theme(&mut self, mode: ThemeMode) {
        if self.mode == mode {
            return;
        }
        let previous_scheme = self.scheme();
        tracing::debug!("ThemeContext::set_theme - {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.apply(previous_scheme);
    }

    /// Flip between light and dark, leaving `Auto`
    pub fn toggle(&mut self) {
        let next = match self.scheme() {
            ColorScheme::Light => ThemeMode::Dark,
            ColorScheme::Dark => ThemeMode::Light,
        };
        self.set_theme(next);
    }

    /// Report a system appearance change; only affects `Auto`
    pub fn set_system_scheme(&mut self, scheme: ColorScheme) {
        if self.system_scheme == scheme {
            return;
        }
        let previous_scheme = self.scheme();
        self.system_scheme = scheme;
        if self.mode == ThemeMode::Auto {
            tracing::debug!("ThemeContext: system scheme now {:?}", scheme);
            self.apply(previous_scheme);
        }
    }

    /// Override a single color token in both schemes
    pub fn set_color_override(&mut self, token: ColorToken, color: Color) {
        self.color_overrides.insert(token, color);
        self.refresh();
    }

    pub fn remove_color_override(&mut self, token: ColorToken) {
        if self.color_overrides.remove(&token).is_some() {
            self.refresh();
        }
    }

    pub fn clear_overrides(&mut self) {
        if !self.color_overrides.is_empty() {
            self.color_overrides.clear();
            self.refresh();
        }
    }

    /// Register a listener called after every mode or scheme change
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&ThemeChange) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn apply(&mut self, previous_scheme: ColorScheme) {
        self.refresh();
        let change = ThemeChange {
            mode: self.mode,
            previous_scheme,
            scheme: self.scheme(),
        };
        for listener in self.listeners.iter_mut() {
            listener(&change);
        }
    }

    fn refresh(&mut self) {
        let mut theme = self.bundle.for_scheme(self.scheme()).clone();
        for (&token, &color) in &self.color_overrides {
            theme = theme.with_color(token, color);
        }
        self.resolved = theme;
    }
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext")
            .field("bundle", &self.bundle.name)
            .field("mode", &self.mode)
            .field("system_scheme", &self.system_scheme)
            .field("overrides", &self.color_overrides.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::PetalTheme;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ctx(mode: ThemeMode) -> ThemeContext {
        ThemeContext::new(PetalTheme::bundle(), mode, ColorScheme::Light)
    }

    #[test]
    fn test_set_theme_switches_bundle_half() {
        let mut ctx = ctx(ThemeMode::Light);
        assert!(!ctx.is_dark());
        assert_eq!(ctx.theme_mode_label(), "Claro");

        ctx.set_theme(ThemeMode::Dark);
        assert!(ctx.is_dark());
        assert_eq!(ctx.theme(), &PetalTheme::dark());
        assert_eq!(ctx.theme_mode_label(), "Escuro");
    }

    #[test]
    fn test_auto_tracks_system_scheme() {
        let mut ctx = ctx(ThemeMode::Auto);
        assert!(!ctx.is_dark());

        ctx.set_system_scheme(ColorScheme::Dark);
        assert!(ctx.is_dark());

        ctx.set_theme(ThemeMode::Light);
        ctx.set_system_scheme(ColorScheme::Light);
        ctx.set_system_scheme(ColorScheme::Dark);
        assert!(!ctx.is_dark());
    }

    #[test]
    fn test_toggle_leaves_auto() {
        let mut ctx = ctx(ThemeMode::Auto);
        ctx.toggle();
        assert_eq!(ctx.theme_mode(), ThemeMode::Dark);
        ctx.toggle();
        assert_eq!(ctx.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_listeners_see_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let mut ctx = ctx(ThemeMode::Light);
        ctx.on_change(move |change| sink.borrow_mut().push(*change));

        ctx.set_theme(ThemeMode::Light);
        ctx.set_theme(ThemeMode::Auto);
        ctx.set_theme(ThemeMode::Dark);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(!seen[0].scheme_changed());
        assert!(seen[1].scheme_changed());
    }

    #[test]
    fn test_overrides_survive_scheme_switch() {
        let brand = Color::from_hex(0xE11D48);
        let mut ctx = ctx(ThemeMode::Light);
        ctx.set_color_override(ColorToken::Primary, brand);
        assert_eq!(ctx.theme().color(ColorToken::Primary), brand);

        ctx.set_theme(ThemeMode::Dark);
        assert_eq!(ctx.theme().color(ColorToken::Primary), brand);

        ctx.remove_color_override(ColorToken::Primary);
        assert_eq!(
            ctx.theme().color(ColorToken::Primary),
            PetalTheme::dark().color(ColorToken::Primary)
        );
    }
}
