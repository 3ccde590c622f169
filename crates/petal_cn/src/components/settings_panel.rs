//! Settings screen panel
//!
//! Titled sections of rows. A row is a switch, a navigation link, a
//! read-only value, or an embedded [`ThemeSelector`]. Items are addressed by
//! their id, which is also their test id.

use std::sync::Arc;

use petal_layout::prelude::*;
use petal_theme::{ColorToken, FontWeight, RadiusToken, SpacingToken, ThemeContext, ThemeMode};

use crate::callback::{dispatch, PressHandler, ToggleHandler};
use crate::components::theme_selector::ThemeSelector;
use crate::context::RenderContext;
use crate::error::PropError;
use crate::validate::non_empty;

#[derive(Clone)]
pub enum ItemKind {
    Toggle {
        value: bool,
        on_toggle: Option<ToggleHandler>,
    },
    Navigation {
        value: Option<String>,
        on_press: Option<PressHandler>,
    },
    Info {
        value: String,
    },
    Theme(ThemeSelector),
}

#[derive(Clone)]
pub struct SettingsItem {
    id: String,
    label: String,
    description: Option<String>,
    icon: Option<String>,
    disabled: bool,
    kind: ItemKind,
}

impl SettingsItem {
    fn new(id: impl Into<String>, label: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            icon: None,
            disabled: false,
            kind,
        }
    }

    pub fn toggle(id: impl Into<String>, label: impl Into<String>, value: bool) -> Self {
        Self::new(
            id,
            label,
            ItemKind::Toggle {
                value,
                on_toggle: None,
            },
        )
    }

    pub fn navigation(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(
            id,
            label,
            ItemKind::Navigation {
                value: None,
                on_press: None,
            },
        )
    }

    pub fn info(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(
            id,
            label,
            ItemKind::Info {
                value: value.into(),
            },
        )
    }

    pub fn theme(id: impl Into<String>, label: impl Into<String>, selector: ThemeSelector) -> Self {
        Self::new(id, label, ItemKind::Theme(selector))
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(name.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Handler for toggle rows; ignored on other kinds
    pub fn on_toggle<F>(mut self, handler: F) -> Self
    where
        F: Fn(bool) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        if let ItemKind::Toggle { on_toggle, .. } = &mut self.kind {
            *on_toggle = Some(Arc::new(handler));
        }
        self
    }

    /// Handler for navigation rows; ignored on other kinds
    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        if let ItemKind::Navigation { on_press, .. } = &mut self.kind {
            *on_press = Some(Arc::new(handler));
        }
        self
    }

    /// Trailing value of a navigation row
    pub fn value(mut self, text: impl Into<String>) -> Self {
        if let ItemKind::Navigation { value, .. } = &mut self.kind {
            *value = Some(text.into());
        }
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }
}

#[derive(Clone)]
pub struct SettingsSection {
    title: String,
    items: Vec<SettingsItem>,
}

impl SettingsSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn item(mut self, item: SettingsItem) -> Self {
        self.items.push(item);
        self
    }
}

#[derive(Clone)]
pub struct SettingsPanel {
    title: String,
    sections: Vec<SettingsSection>,
    test_id: Option<String>,
}

impl SettingsPanel {
    pub const NAME: &'static str = "SettingsPanel";

    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
            test_id: None,
        }
    }

    pub fn section(mut self, section: SettingsSection) -> Self {
        self.sections.push(section);
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    pub fn item(&self, id: &str) -> Option<&SettingsItem> {
        self.sections
            .iter()
            .flat_map(|section| section.items.iter())
            .find(|item| item.id == id)
    }

    /// Flip a toggle row. Returns whether `on_toggle` was invoked.
    pub fn toggle(&self, id: &str) -> bool {
        match self.item(id) {
            Some(SettingsItem {
                disabled: false,
                kind:
                    ItemKind::Toggle {
                        value,
                        on_toggle: Some(handler),
                    },
                ..
            }) => {
                let next = !*value;
                dispatch(Self::NAME, "on_toggle", || handler(next));
                true
            }
            _ => false,
        }
    }

    /// Press a navigation row. Returns whether `on_press` was invoked.
    pub fn press(&self, id: &str) -> bool {
        match self.item(id) {
            Some(SettingsItem {
                disabled: false,
                kind:
                    ItemKind::Navigation {
                        on_press: Some(handler),
                        ..
                    },
                ..
            }) => {
                dispatch(Self::NAME, "on_press", || handler());
                true
            }
            _ => false,
        }
    }

    /// Pick a mode in an embedded theme selector
    pub fn select_theme(&self, id: &str, mode: ThemeMode, theme: &mut ThemeContext) -> bool {
        match self.item(id) {
            Some(SettingsItem {
                disabled: false,
                kind: ItemKind::Theme(selector),
                ..
            }) => selector.select(mode, theme),
            _ => false,
        }
    }

    pub fn validate(&self, ctx: &RenderContext<'_>) -> Result<(), PropError> {
        let v = ctx.validator(Self::NAME);
        v.assert_type(Some(self.title.as_str()), non_empty, "a non-empty string", "title")?;
        for item in self.sections.iter().flat_map(|s| s.items.iter()) {
            v.assert_type(Some(item.id.as_str()), non_empty, "a non-empty item id", "items")?;
            v.assert_type(
                Some(item.label.as_str()),
                non_empty,
                "a non-empty item label",
                "items",
            )?;
        }
        Ok(())
    }

    pub fn render(&self, ctx: &RenderContext<'_>, mode: ThemeMode) -> Result<Element, PropError> {
        self.validate(ctx)?;
        let theme = ctx.theme;

        let heading = text(&self.title)
            .accessibility(Accessibility::new(Role::Header))
            .style(
                Style::new()
                    .text_color(theme.color(ColorToken::TextPrimary))
                    .font_size(theme.typography().text_xxl)
                    .font_weight(FontWeight::BOLD),
            );

        let mut sections = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            let mut rows = Vec::with_capacity(section.items.len());
            for item in &section.items {
                rows.push(self.render_item(ctx, item, mode)?);
            }
            sections.push(
                view()
                    .style(Style::new().column().gap(theme.space(SpacingToken::Sm)))
                    .child(
                        text(section.title.to_uppercase()).style(
                            Style::new()
                                .text_color(theme.color(ColorToken::TextSecondary))
                                .font_size(theme.typography().text_xs)
                                .font_weight(FontWeight::SEMIBOLD),
                        ),
                    )
                    .child(
                        view()
                            .style(
                                Style::new()
                                    .column()
                                    .bg(theme.color(ColorToken::Surface))
                                    .rounded(theme.radius(RadiusToken::Lg))
                                    .border(theme.borders().thin, theme.color(ColorToken::Border)),
                            )
                            .children(rows),
                    ),
            );
        }

        Ok(view()
            .test_id_opt(self.test_id.clone())
            .style(
                Style::new()
                    .column()
                    .gap(theme.space(SpacingToken::Lg))
                    .padding(theme.space(SpacingToken::Md), theme.space(SpacingToken::Lg))
                    .bg(theme.color(ColorToken::Background)),
            )
            .child(heading)
            .children(sections))
    }

    fn render_item(
        &self,
        ctx: &RenderContext<'_>,
        item: &SettingsItem,
        mode: ThemeMode,
    ) -> Result<Element, PropError> {
        let theme = ctx.theme;
        let muted = |color| {
            if item.disabled {
                theme.color(ColorToken::TextDisabled)
            } else {
                color
            }
        };

        let leading = item.icon.as_ref().map(|name| {
            icon(name, 22.0).icon_color(muted(theme.color(ColorToken::Primary)))
        });
        let labels = view()
            .style(Style::new().column())
            .child(
                text(&item.label)
                    .style(Style::new().text_color(muted(theme.color(ColorToken::TextPrimary)))),
            )
            .child_opt(item.description.as_ref().map(|description| {
                text(description).style(
                    Style::new()
                        .text_color(muted(theme.color(ColorToken::TextSecondary)))
                        .font_size(theme.typography().text_sm),
                )
            }));

        let row_style = Style::new()
            .row()
            .align(Align::Center)
            .gap(theme.space(SpacingToken::Md))
            .padding(theme.space(SpacingToken::Md), theme.space(SpacingToken::Md) - 4.0)
            .min_h(52.0);

        let row = match &item.kind {
            ItemKind::Toggle { value, .. } => view()
                .style(row_style)
                .child_opt(leading)
                .child(labels)
                .child(
                    switch(*value)
                        .test_id(item.id.as_str())
                        .accessibility(
                            Accessibility::new(Role::Switch)
                                .label(item.label.as_str())
                                .hint(item.description.as_deref())
                                .checked(*value)
                                .disabled(item.disabled),
                        ),
                ),
            ItemKind::Navigation { value, .. } => pressable()
                .test_id(item.id.as_str())
                .accessibility(
                    Accessibility::new(Role::Button)
                        .label(item.label.as_str())
                        .hint(item.description.as_deref())
                        .disabled(item.disabled),
                )
                .style(row_style)
                .child_opt(leading)
                .child(labels)
                .child_opt(value.as_ref().map(|value| {
                    text(value).style(
                        Style::new().text_color(muted(theme.color(ColorToken::TextSecondary))),
                    )
                }))
                .child(
                    icon("chevron-forward", 18.0)
                        .icon_color(muted(theme.color(ColorToken::TextSecondary))),
                ),
            ItemKind::Info { value } => view()
                .test_id(item.id.as_str())
                .accessibility(
                    Accessibility::new(Role::Text)
                        .label(format!("{}: {}", item.label, value))
                        .hint(item.description.as_deref()),
                )
                .style(row_style)
                .child_opt(leading)
                .child(labels)
                .child(text(value).style(
                    Style::new().text_color(theme.color(ColorToken::TextSecondary)),
                )),
            ItemKind::Theme(selector) => {
                let mut selector = selector
                    .clone()
                    .title(item.label.as_str())
                    .test_id(item.id.as_str())
                    .disabled(item.disabled);
                if let Some(description) = &item.description {
                    selector = selector.accessibility_hint(description.as_str());
                }
                view()
                    .style(Style::new().column().padding(
                        theme.space(SpacingToken::Md),
                        theme.space(SpacingToken::Md),
                    ))
                    .child(selector.render(ctx, mode)?)
            }
        };
        Ok(row)
    }
}

impl std::fmt::Debug for SettingsPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsPanel")
            .field("title", &self.title)
            .field("sections", &self.sections.len())
            .finish()
    }
}
