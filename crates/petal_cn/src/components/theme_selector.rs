//! Theme mode picker
//!
//! One radio option per [`ThemeMode`]; selecting an option updates the
//! [`ThemeContext`] and notifies `on_change`.

use std::sync::Arc;

use petal_layout::prelude::*;
use petal_theme::{ColorToken, FontWeight, RadiusToken, SpacingToken, ThemeContext, ThemeMode};

use crate::callback::{dispatch, ModeHandler};
use crate::components::suffixed;
use crate::context::RenderContext;
use crate::defaults::{component_defaults, ComponentDefaults};
use crate::error::PropError;
use crate::validate::{non_empty, prop_enum};

/// Group label when no title is given
const DEFAULT_LABEL: &str = "Tema";

prop_enum! {
    pub enum ThemeSelectorLayout {
        /// Stacked list rows
        Vertical => "vertical",
        /// Segmented control
        Horizontal => "horizontal",
    }
    default = Vertical;
}

component_defaults! {
    pub struct ThemeSelectorOptions for "ThemeSelector" {
        layout: ThemeSelectorLayout = ThemeSelectorLayout::Vertical,
        show_icons: bool = true,
    }
}

#[derive(Clone, Default)]
pub struct ThemeSelector {
    title: Option<String>,
    on_change: Option<ModeHandler>,
    options: ThemeSelectorOptions,
    disabled: bool,
    accessibility_label: Option<String>,
    accessibility_hint: Option<String>,
    test_id: Option<String>,
}

impl ThemeSelector {
    pub const NAME: &'static str = "ThemeSelector";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn layout(mut self, layout: ThemeSelectorLayout) -> Self {
        self.options.layout = Some(layout);
        self
    }

    pub fn show_icons(mut self, show: bool) -> Self {
        self.options.show_icons = Some(show);
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(ThemeMode) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Options render as disabled and `select` becomes a no-op
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Radio group label; defaults to the title
    pub fn accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    pub fn accessibility_hint(mut self, hint: impl Into<String>) -> Self {
        self.accessibility_hint = Some(hint.into());
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    /// Pick a mode. Returns whether the mode changed.
    pub fn select(&self, mode: ThemeMode, theme: &mut ThemeContext) -> bool {
        if self.disabled || theme.theme_mode() == mode {
            return false;
        }
        theme.set_theme(mode);
        if let Some(handler) = &self.on_change {
            dispatch(Self::NAME, "on_change", || handler(mode));
        }
        true
    }

    pub fn render(
        &self,
        ctx: &RenderContext<'_>,
        current: ThemeMode,
    ) -> Result<Element, PropError> {
        ctx.validator(Self::NAME).assert_type(
            self.title.as_deref(),
            non_empty,
            "a non-empty string",
            "title",
        )?;

        let theme = ctx.theme;
        let opts = self.options.with_defaults();
        let horizontal = opts.layout() == ThemeSelectorLayout::Horizontal;
        let id = self.test_id.as_deref();

        let options = ThemeMode::ALL.into_iter().map(|mode| {
            let selected = mode == current;
            let (bg, fg) = match (selected, horizontal) {
                (true, true) => (
                    theme.color(ColorToken::Primary),
                    theme.color(ColorToken::TextInverse),
                ),
                (true, false) => (
                    theme.color(ColorToken::SurfaceVariant),
                    theme.color(ColorToken::Primary),
                ),
                (false, _) => (
                    theme.color(ColorToken::Surface),
                    theme.color(ColorToken::TextPrimary),
                ),
            };

            let glyph = opts
                .show_icons()
                .then(|| icon(mode.icon(), 20.0).icon_color(fg));
            let weight = if selected {
                FontWeight::SEMIBOLD
            } else {
                FontWeight::REGULAR
            };

            let mut row_style = Style::new()
                .row()
                .align(Align::Center)
                .gap(theme.space(SpacingToken::Sm))
                .padding(theme.space(SpacingToken::Md), theme.space(SpacingToken::Sm))
                .rounded(theme.radius(RadiusToken::Md))
                .bg(bg);
            if horizontal {
                row_style = row_style.justify(Align::Center);
            }

            pressable()
                .test_id_opt(suffixed(id, &format!("-{}", mode.id())))
                .accessibility(
                    Accessibility::new(Role::Radio)
                        .label(mode.label())
                        .selected(selected)
                        .checked(selected)
                        .disabled(self.disabled),
                )
                .style(row_style)
                .child_opt(glyph)
                .child(text(mode.label()).style(Style::new().text_color(fg).font_weight(weight)))
        });

        let group_style = if horizontal {
            Style::new()
                .row()
                .gap(theme.space(SpacingToken::Xs))
                .bg(theme.color(ColorToken::SurfaceVariant))
                .rounded(theme.radius(RadiusToken::Lg))
                .padding(theme.space(SpacingToken::Xs), theme.space(SpacingToken::Xs))
        } else {
            Style::new().column().gap(theme.space(SpacingToken::Xs))
        };

        let group_label = self
            .accessibility_label
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or(DEFAULT_LABEL);
        let heading = self.title.as_ref().map(|title| {
            text(title).style(
                Style::new()
                    .text_color(theme.color(ColorToken::TextSecondary))
                    .font_size(theme.typography().text_sm)
                    .font_weight(FontWeight::MEDIUM),
            )
        });

        Ok(view()
            .test_id_opt(self.test_id.clone())
            .style(Style::new().column().gap(theme.space(SpacingToken::Sm)))
            .child_opt(heading)
            .child(
                view()
                    .accessibility(
                        Accessibility::new(Role::RadioGroup)
                            .label(group_label)
                            .hint(self.accessibility_hint.as_deref())
                            .disabled(self.disabled),
                    )
                    .style(group_style)
                    .children(options),
            ))
    }
}

impl std::fmt::Debug for ThemeSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeSelector")
            .field("title", &self.title)
            .field("options", &self.options)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
