//! Input component
//!
//! A labeled text field with focus tracking, validation, icon slots and an
//! optional floating label. [`Input`] holds the props; [`InputController`]
//! owns the per-instance state (focus, text buffer, validation message,
//! label animation) and is the imperative handle.
//!
//! # Example
//!
//! ```rust
//! use petal_cn::prelude::*;
//! use petal_theme::PetalTheme;
//!
//! let theme = PetalTheme::light();
//! let ctx = RenderContext::new(&theme);
//!
//! let mut name = InputController::new(
//!     cn::input()
//!         .label("Nome")
//!         .required(true)
//!         .validator(validators::min_length(3))
//!         .validate_on_change(true),
//! );
//!
//! name.change_text("ab");
//! assert_eq!(name.displayed_error(), Some("Mínimo 3 caracteres"));
//!
//! name.change_text("abc");
//! assert_eq!(name.displayed_error(), None);
//! assert!(name.render(&ctx).unwrap().find_by_text("*").is_some());
//! ```

use std::sync::Arc;

use petal_animation::{AnimatedValue, AnimationSpec, Easing};
use petal_core::Color;
use petal_layout::prelude::*;
use petal_theme::{AnimationTokens, ColorToken, FontWeight, RadiusToken, SpacingToken, Theme};

use crate::callback::{dispatch, PressHandler, TextHandler};
use crate::components::suffixed;
use crate::context::RenderContext;
use crate::defaults::{component_defaults, ComponentDefaults};
use crate::error::PropError;
use crate::validate::{non_empty, prop_enum};

/// Maps text to an error message, `None` when valid
pub type Validator = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

prop_enum! {
    pub enum InputVariant {
        Default => "default",
        Filled => "filled",
        Outline => "outline",
    }
    default = Default;
}

prop_enum! {
    pub enum InputSize {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
    }
    default = Md;
}

component_defaults! {
    /// Optional Input settings
    pub struct InputOptions for "Input" {
        variant: InputVariant = InputVariant::Default,
        size: InputSize = InputSize::Md,
        required: bool = false,
        disabled: bool = false,
        success: bool = false,
        secure: bool = false,
        floating_label: bool = false,
        validate_on_blur: bool = true,
        validate_on_change: bool = false,
    }
}

/// Visual state of the field, highest precedence first
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    Error,
    Success,
    Focused,
    Default,
}

impl FieldState {
    /// error > success > focus > default
    pub fn resolve(has_error: bool, success: bool, focused: bool) -> Self {
        if has_error {
            FieldState::Error
        } else if success {
            FieldState::Success
        } else if focused {
            FieldState::Focused
        } else {
            FieldState::Default
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputColors {
    pub border: Color,
    pub background: Color,
    pub border_width: f32,
}

impl InputVariant {
    pub fn colors(self, state: FieldState, disabled: bool, theme: &Theme) -> InputColors {
        let c = |token| theme.color(token);
        let border = match state {
            FieldState::Error => c(ColorToken::BorderError),
            FieldState::Success => c(ColorToken::BorderSuccess),
            FieldState::Focused => c(ColorToken::BorderFocus),
            FieldState::Default => c(ColorToken::Border),
        };
        let borders = theme.borders();

        let (background, border_width) = match self {
            InputVariant::Default => (c(ColorToken::InputBg), borders.thin),
            InputVariant::Outline => {
                let width = if state == FieldState::Default {
                    borders.thin
                } else {
                    borders.thick
                };
                (Color::TRANSPARENT, width)
            }
            InputVariant::Filled => {
                let background = match state {
                    FieldState::Error => c(ColorToken::Error).with_alpha(0.08),
                    FieldState::Success => c(ColorToken::Success).with_alpha(0.08),
                    FieldState::Focused => c(ColorToken::InputBg),
                    FieldState::Default => c(ColorToken::SurfaceVariant),
                };
                let width = if state == FieldState::Default {
                    borders.none
                } else {
                    borders.thin
                };
                (background, width)
            }
        };

        if disabled {
            return InputColors {
                border: c(ColorToken::Border),
                background: c(ColorToken::InputBgDisabled),
                border_width,
            };
        }

        InputColors {
            border,
            background,
            border_width,
        }
    }
}

impl InputSize {
    fn padding_y(self, theme: &Theme) -> f32 {
        match self {
            InputSize::Sm => theme.spacing().scale(1.5),
            InputSize::Md => theme.spacing().scale(2.5),
            InputSize::Lg => theme.spacing().scale(3.5),
        }
    }

    fn font_size(self, theme: &Theme) -> f32 {
        let type_scale = theme.typography();
        match self {
            InputSize::Sm => type_scale.text_sm,
            InputSize::Md => type_scale.text_md,
            InputSize::Lg => type_scale.text_lg,
        }
    }

    fn min_height(self) -> f32 {
        match self {
            InputSize::Sm => 36.0,
            InputSize::Md => 44.0,
            InputSize::Lg => 52.0,
        }
    }
}

/// Input props
#[derive(Clone, Default)]
pub struct Input {
    label: Option<String>,
    placeholder: Option<String>,
    value: Option<String>,
    on_change_text: Option<TextHandler>,
    on_focus: Option<PressHandler>,
    on_blur: Option<PressHandler>,
    error: Option<String>,
    hint: Option<String>,
    left_icon: Option<String>,
    right_icon: Option<String>,
    on_right_icon_press: Option<PressHandler>,
    validator: Option<Validator>,
    max_length: Option<usize>,
    options: InputOptions,
    accessibility_label: Option<String>,
    accessibility_hint: Option<String>,
    test_id: Option<String>,
    style: Option<Style>,
}

impl Input {
    pub const NAME: &'static str = "Input";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Controlled value; the parent owns the text
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn on_change_text<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.on_change_text = Some(Arc::new(handler));
        self
    }

    pub fn on_focus<F>(mut self, handler: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.on_focus = Some(Arc::new(handler));
        self
    }

    pub fn on_blur<F>(mut self, handler: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.on_blur = Some(Arc::new(handler));
        self
    }

    /// External error message; overrides validation
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn clear_error(mut self) -> Self {
        self.error = None;
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.options.variant = Some(variant);
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.options.size = Some(size);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.options.required = Some(required);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.options.disabled = Some(disabled);
        self
    }

    pub fn success(mut self, success: bool) -> Self {
        self.options.success = Some(success);
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.options.secure = Some(secure);
        self
    }

    pub fn floating_label(mut self, floating: bool) -> Self {
        self.options.floating_label = Some(floating);
        self
    }

    pub fn validate_on_blur(mut self, enabled: bool) -> Self {
        self.options.validate_on_blur = Some(enabled);
        self
    }

    pub fn validate_on_change(mut self, enabled: bool) -> Self {
        self.options.validate_on_change = Some(enabled);
        self
    }

    pub fn left_icon(mut self, name: impl Into<String>) -> Self {
        self.left_icon = Some(name.into());
        self
    }

    pub fn right_icon(mut self, name: impl Into<String>) -> Self {
        self.right_icon = Some(name.into());
        self
    }

    pub fn on_right_icon_press<F>(mut self, handler: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.on_right_icon_press = Some(Arc::new(handler));
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

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

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    pub fn is_controlled(&self) -> bool {
        self.value.is_some()
    }

    pub fn validate(&self, ctx: &RenderContext<'_>) -> Result<(), PropError> {
        let v = ctx.validator(Self::NAME);
        v.assert_type(self.label.as_deref(), non_empty, "a non-empty string", "label")?;
        v.assert_type(
            self.max_length.as_ref(),
            |max| *max > 0,
            "a positive length",
            "max_length",
        )?;
        if self.on_right_icon_press.is_some() {
            v.assert_required(self.right_icon.as_deref(), "right_icon")?;
        }
        if self.options.floating_label() {
            v.assert_required(self.label.as_deref(), "label")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Input")
            .field("label", &self.label)
            .field("value", &self.value)
            .field("error", &self.error)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Label offset above the text baseline when raised
const FLOAT_OFFSET: f32 = -22.0;

/// Per-instance input state and imperative handle
pub struct InputController {
    props: Input,
    buffer: String,
    focused: bool,
    validation_error: Option<String>,
    /// 0.0 = resting inside the field, 1.0 = raised
    label: AnimatedValue,
    animations: AnimationTokens,
}

impl InputController {
    pub fn new(props: Input) -> Self {
        let buffer = props.value.clone().unwrap_or_default();
        let raised = if buffer.is_empty() { 0.0 } else { 1.0 };
        Self {
            props,
            buffer,
            focused: false,
            validation_error: None,
            label: AnimatedValue::new(raised),
            animations: AnimationTokens::default(),
        }
    }

    /// Take label animation timing from a theme
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.animations = theme.animations().clone();
        self
    }

    pub fn props(&self) -> &Input {
        &self.props
    }

    /// Replace props after a parent re-render.
    ///
    /// Clearing the `error` prop also drops a stale validation message.
    pub fn set_props(&mut self, props: Input) {
        if self.props.error.is_some() && props.error.is_none() {
            self.validation_error = None;
        }
        if props.options.disabled() && self.focused {
            self.focused = false;
        }
        self.props = props;
        self.sync_label();
    }

    // =========================================================================
    // Imperative handle
    // =========================================================================

    pub fn focus(&mut self) {
        if self.props.options.disabled() || self.focused {
            return;
        }
        self.focused = true;
        if let Some(handler) = &self.props.on_focus {
            dispatch(Input::NAME, "on_focus", || handler());
        }
        self.sync_label();
    }

    pub fn blur(&mut self) {
        if !self.focused {
            return;
        }
        self.focused = false;
        if let Some(handler) = &self.props.on_blur {
            dispatch(Input::NAME, "on_blur", || handler());
        }
        if self.props.options.validate_on_blur() {
            self.validate();
        }
        self.sync_label();
    }

    pub fn clear(&mut self) {
        self.validation_error = None;
        self.set_value("");
    }

    /// Current text: the controlled value when one is supplied
    pub fn get_value(&self) -> &str {
        self.props.value.as_deref().unwrap_or(&self.buffer)
    }

    /// Replace the text programmatically
    pub fn set_value(&mut self, value: &str) {
        let value = self.truncate(value);
        self.buffer = value.clone();
        if let Some(handler) = &self.props.on_change_text {
            dispatch(Input::NAME, "on_change_text", || handler(value.as_str()));
        }
        self.sync_label();
    }

    /// Run the validator on the current text and keep its verdict
    pub fn validate(&mut self) -> Option<String> {
        let text = self.get_value().to_string();
        self.validation_error = self.run_validator(&text);
        tracing::debug!(
            "Input {:?}: validation -> {:?}",
            self.props.label,
            self.validation_error
        );
        self.validation_error.clone()
    }

    // =========================================================================
    // User interaction
    // =========================================================================

    /// A user edit
    pub fn change_text(&mut self, text: &str) {
        if self.props.options.disabled() {
            return;
        }
        self.validation_error = None;

        let text = self.truncate(text);
        self.buffer = text.clone();
        if let Some(handler) = &self.props.on_change_text {
            dispatch(Input::NAME, "on_change_text", || handler(text.as_str()));
        }

        if self.props.options.validate_on_change() {
            self.validation_error = self.run_validator(&text);
        }
        self.sync_label_for(&text);
    }

    /// Press on the trailing icon. Returns whether the handler ran.
    pub fn press_right_icon(&self) -> bool {
        if self.props.options.disabled() {
            return false;
        }
        match &self.props.on_right_icon_press {
            Some(handler) => {
                dispatch(Input::NAME, "on_right_icon_press", || handler());
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    /// The `error` prop wins over the internal validation message
    pub fn displayed_error(&self) -> Option<&str> {
        self.props
            .error
            .as_deref()
            .or(self.validation_error.as_deref())
    }

    pub fn field_state(&self) -> FieldState {
        FieldState::resolve(
            self.displayed_error().is_some(),
            self.props.options.success(),
            self.focused,
        )
    }

    /// Floating label progress, 0.0 resting to 1.0 raised
    pub fn label_progress(&self) -> f32 {
        self.label.value()
    }

    /// Advance the label animation by `dt` seconds
    pub fn tick(&mut self, dt: f32) -> bool {
        self.label.tick(dt)
    }

    fn run_validator(&self, text: &str) -> Option<String> {
        if self.props.options.required() && text.trim().is_empty() {
            return Some("Campo obrigatório".to_string());
        }
        self.props
            .validator
            .as_ref()
            .and_then(|validate| validate(text))
    }

    fn truncate(&self, text: &str) -> String {
        match self.props.max_length {
            Some(max) => text.chars().take(max).collect(),
            None => text.to_string(),
        }
    }

    fn sync_label(&mut self) {
        let text = self.get_value().to_string();
        self.sync_label_for(&text);
    }

    fn sync_label_for(&mut self, text: &str) {
        let target = if self.focused || !text.is_empty() {
            1.0
        } else {
            0.0
        };
        if self.label.target() != target {
            self.label.animate_to(
                target,
                AnimationSpec::timing_with(self.animations.fast, Easing::EaseOutQuad),
            );
        }
    }

    // =========================================================================
    // Render
    // =========================================================================

    pub fn render(&self, ctx: &RenderContext<'_>) -> Result<Element, PropError> {
        let props = &self.props;
        props.validate(ctx)?;

        let theme = ctx.theme;
        let opts = props.options.with_defaults();
        let disabled = opts.disabled();
        let size = opts.size();
        let id = props.test_id.as_deref();
        let state = self.field_state();
        let colors = opts.variant().colors(state, disabled, theme);
        let font_size = size.font_size(theme);
        let error = self.displayed_error();
        let floating = opts.floating_label() && props.label.is_some();

        let label_color = match state {
            FieldState::Error => theme.color(ColorToken::Error),
            FieldState::Focused => theme.color(ColorToken::Primary),
            _ if disabled => theme.color(ColorToken::TextDisabled),
            _ => theme.color(ColorToken::TextSecondary),
        };

        let label_row = props.label.as_ref().map(|label| {
            let mut label_style = Style::new()
                .text_color(label_color)
                .font_weight(FontWeight::MEDIUM);
            if floating {
                let p = self.label_progress();
                let small = theme.typography().text_xs;
                label_style = label_style
                    .font_size(font_size + (small - font_size) * p)
                    .translate_y(FLOAT_OFFSET * p);
            } else {
                label_style = label_style.font_size(theme.typography().text_sm);
            }

            let indicator = opts.required().then(|| {
                text("*")
                    .test_id_opt(suffixed(id, "-required"))
                    .style(Style::new().text_color(theme.color(ColorToken::Error)))
            });

            view()
                .test_id_opt(suffixed(id, "-label"))
                .style(Style::new().row().gap(theme.space(SpacingToken::Xs)))
                .child(text(label).style(label_style))
                .child_opt(indicator)
        });

        // A resting floating label stands in for the placeholder
        let placeholder = if floating && self.label_progress() < 1.0 {
            None
        } else {
            props.placeholder.clone()
        };

        let field = text_field(TextFieldProps {
            value: self.get_value().to_string(),
            placeholder,
            secure: opts.secure(),
            editable: !disabled,
            max_length: props.max_length,
        })
        .test_id_opt(suffixed(id, "-field"))
        .style(
            Style::new()
                .font_size(font_size)
                .text_color(if disabled {
                    theme.color(ColorToken::TextDisabled)
                } else {
                    theme.color(ColorToken::TextPrimary)
                }),
        )
        .accessibility(
            Accessibility::new(Role::TextField)
                .label_or(
                    props.accessibility_label.as_deref(),
                    props
                        .label
                        .as_deref()
                        .or(props.placeholder.as_deref())
                        .unwrap_or_default(),
                )
                .hint(props.accessibility_hint.as_deref().or(props.hint.as_deref()))
                .disabled(disabled),
        );

        let icon_size = font_size + 4.0;
        let icon_color = theme.color(ColorToken::TextSecondary);
        let left = props.left_icon.as_ref().map(|name| {
            icon(name, icon_size)
                .icon_color(icon_color)
                .test_id_opt(suffixed(id, "-left-icon"))
        });
        let right = props.right_icon.as_ref().map(|name| {
            let glyph = icon(name, icon_size).icon_color(icon_color);
            if props.on_right_icon_press.is_some() {
                pressable()
                    .test_id_opt(suffixed(id, "-right-icon"))
                    .accessibility(
                        Accessibility::new(Role::Button)
                            .label(name.as_str())
                            .disabled(disabled),
                    )
                    .child(glyph)
            } else {
                glyph.test_id_opt(suffixed(id, "-right-icon"))
            }
        });

        let mut container = view()
            .test_id_opt(suffixed(id, "-container"))
            .style(
                Style::new()
                    .row()
                    .align(Align::Center)
                    .gap(theme.space(SpacingToken::Sm))
                    .bg(colors.background)
                    .border(colors.border_width, colors.border)
                    .rounded(theme.radius(RadiusToken::Md))
                    .padding(theme.space(SpacingToken::Md) - 4.0, size.padding_y(theme))
                    .min_h(size.min_height()),
            )
            .child_opt(left);
        let mut outer_label = label_row;
        if floating {
            container = container.child_opt(outer_label.take());
        }
        let container = container.child(field).child_opt(right);

        let helper = match (error, props.hint.as_ref()) {
            (Some(message), _) => Some(
                text(message)
                    .test_id_opt(suffixed(id, "-error"))
                    .accessibility(Accessibility::new(Role::Alert).label(message))
                    .style(
                        Style::new()
                            .text_color(theme.color(ColorToken::Error))
                            .font_size(theme.typography().text_xs),
                    ),
            ),
            (None, Some(hint)) => Some(
                text(hint)
                    .test_id_opt(suffixed(id, "-hint"))
                    .style(
                        Style::new()
                            .text_color(theme.color(ColorToken::TextSecondary))
                            .font_size(theme.typography().text_xs),
                    ),
            ),
            (None, None) => None,
        };

        let base = Style::new().column().gap(theme.space(SpacingToken::Xs));
        Ok(view()
            .test_id_opt(props.test_id.clone())
            .style(base.merge_opt(props.style.as_ref()))
            .child_opt(outer_label)
            .child(container)
            .child_opt(helper))
    }
}

impl std::fmt::Debug for InputController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputController")
            .field("value", &self.get_value())
            .field("focused", &self.focused)
            .field("validation_error", &self.validation_error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_theme::PetalTheme;

    #[test]
    fn test_precedence_order() {
        assert_eq!(FieldState::resolve(true, true, true), FieldState::Error);
        assert_eq!(FieldState::resolve(false, true, true), FieldState::Success);
        assert_eq!(FieldState::resolve(false, false, true), FieldState::Focused);
        assert_eq!(FieldState::resolve(false, false, false), FieldState::Default);
    }

    #[test]
    fn test_border_follows_state() {
        let theme = PetalTheme::light();
        let border = |state| InputVariant::Default.colors(state, false, &theme).border;
        assert_eq!(border(FieldState::Error), theme.color(ColorToken::BorderError));
        assert_eq!(border(FieldState::Success), theme.color(ColorToken::BorderSuccess));
        assert_eq!(border(FieldState::Focused), theme.color(ColorToken::BorderFocus));
        assert_eq!(border(FieldState::Default), theme.color(ColorToken::Border));
    }

    #[test]
    fn test_disabled_background() {
        let theme = PetalTheme::light();
        for variant in [InputVariant::Default, InputVariant::Filled, InputVariant::Outline] {
            assert_eq!(
                variant.colors(FieldState::Focused, true, &theme).background,
                theme.color(ColorToken::InputBgDisabled)
            );
        }
    }

    #[test]
    fn test_floating_label_rises_and_falls() {
        let mut input = InputController::new(Input::new().label("E-mail").floating_label(true));
        assert_eq!(input.label_progress(), 0.0);

        input.focus();
        while input.tick(1.0 / 60.0) {}
        assert_eq!(input.label_progress(), 1.0);

        input.change_text("a");
        input.blur();
        while input.tick(1.0 / 60.0) {}
        assert_eq!(input.label_progress(), 1.0);

        input.clear();
        while input.tick(1.0 / 60.0) {}
        assert_eq!(input.label_progress(), 0.0);
    }

    #[test]
    fn test_max_length_truncates_chars() {
        let mut input = InputController::new(Input::new().max_length(3));
        input.change_text("ação!");
        assert_eq!(input.get_value(), "açã");
    }
}
