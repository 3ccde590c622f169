//! Button component
//!
//! A pressable label with variant/size driven styling, an optional icon, and
//! a loading state that swaps the icon for a spinner.
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
//! let save = cn::button("Salvar")
//!     .variant(ButtonVariant::Primary)
//!     .size(ButtonSize::Lg)
//!     .icon("save")
//!     .on_press(|| Ok(()));
//!
//! let tree = save.render(&ctx).unwrap();
//! assert!(tree.find_by_text("Salvar").is_some());
//! assert!(save.press());
//! ```

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use petal_core::Color;
use petal_layout::prelude::*;
use petal_theme::{ColorToken, FontWeight, RadiusToken, SpacingToken, Theme};

use crate::callback::{dispatch, PressHandler};
use crate::components::suffixed;
use crate::context::RenderContext;
use crate::defaults::{component_defaults, ComponentDefaults};
use crate::error::PropError;
use crate::validate::{non_empty, prop_enum};

prop_enum! {
    /// Button visual style
    pub enum ButtonVariant {
        Primary => "primary",
        Secondary => "secondary",
        Outline => "outline",
        Ghost => "ghost",
        Danger => "danger",
    }
    default = Primary;
}

prop_enum! {
    pub enum ButtonSize {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
    }
    default = Md;
}

prop_enum! {
    pub enum IconPosition {
        Left => "left",
        Right => "right",
    }
    default = Left;
}

component_defaults! {
    /// Optional Button settings
    pub struct ButtonOptions for "Button" {
        variant: ButtonVariant = ButtonVariant::Primary,
        size: ButtonSize = ButtonSize::Md,
        icon_position: IconPosition = IconPosition::Left,
        disabled: bool = false,
        loading: bool = false,
        full_width: bool = false,
    }
}

/// Resolved colors for one `(variant, disabled)` pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonColors {
    pub background: Color,
    pub border: Color,
    pub text: Color,
}

impl ButtonVariant {
    /// Variants with a solid brand background
    pub fn is_filled(self) -> bool {
        matches!(
            self,
            ButtonVariant::Primary | ButtonVariant::Secondary | ButtonVariant::Danger
        )
    }

    pub fn colors(self, disabled: bool, theme: &Theme) -> ButtonColors {
        let c = |token| theme.color(token);

        if disabled {
            let muted = c(ColorToken::DisabledBg);
            return match self {
                ButtonVariant::Primary | ButtonVariant::Secondary | ButtonVariant::Danger => {
                    ButtonColors {
                        background: muted,
                        border: muted,
                        text: c(ColorToken::DisabledText),
                    }
                }
                ButtonVariant::Outline => ButtonColors {
                    background: Color::TRANSPARENT,
                    border: muted,
                    text: c(ColorToken::DisabledText),
                },
                ButtonVariant::Ghost => ButtonColors {
                    background: Color::TRANSPARENT,
                    border: Color::TRANSPARENT,
                    text: c(ColorToken::DisabledText),
                },
            };
        }

        let filled = |token| ButtonColors {
            background: c(token),
            border: c(token),
            text: c(ColorToken::TextInverse),
        };

        match self {
            ButtonVariant::Primary => filled(ColorToken::Primary),
            ButtonVariant::Secondary => filled(ColorToken::Secondary),
            ButtonVariant::Danger => filled(ColorToken::Error),
            ButtonVariant::Outline => ButtonColors {
                background: Color::TRANSPARENT,
                border: c(ColorToken::Primary),
                text: c(ColorToken::Primary),
            },
            ButtonVariant::Ghost => ButtonColors {
                background: Color::TRANSPARENT,
                border: Color::TRANSPARENT,
                text: c(ColorToken::Primary),
            },
        }
    }

    /// Loading indicator color: inverse on filled variants, brand otherwise
    pub fn spinner_color(self, theme: &Theme) -> Color {
        if self.is_filled() {
            theme.color(ColorToken::TextInverse)
        } else {
            theme.color(ColorToken::Primary)
        }
    }
}

/// Box and type metrics for one size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonMetrics {
    pub padding_x: f32,
    pub padding_y: f32,
    pub font_size: f32,
    pub icon_size: f32,
    pub min_height: f32,
}

impl ButtonSize {
    pub fn metrics(self, theme: &Theme) -> ButtonMetrics {
        let space = theme.spacing();
        let type_scale = theme.typography();
        match self {
            ButtonSize::Sm => ButtonMetrics {
                padding_x: space.scale(3.0),
                padding_y: space.scale(1.5),
                font_size: type_scale.text_sm,
                icon_size: 16.0,
                min_height: 32.0,
            },
            ButtonSize::Md => ButtonMetrics {
                padding_x: space.scale(4.0),
                padding_y: space.scale(2.5),
                font_size: type_scale.text_md,
                icon_size: 18.0,
                min_height: 40.0,
            },
            ButtonSize::Lg => ButtonMetrics {
                padding_x: space.scale(5.0),
                padding_y: space.scale(3.0),
                font_size: type_scale.text_lg,
                icon_size: 20.0,
                min_height: 48.0,
            },
            ButtonSize::Xl => ButtonMetrics {
                padding_x: space.scale(6.0),
                padding_y: space.scale(4.0),
                font_size: type_scale.text_xl,
                icon_size: 24.0,
                min_height: 56.0,
            },
        }
    }
}

/// Button props
#[derive(Clone)]
pub struct Button {
    title: String,
    on_press: Option<PressHandler>,
    icon: Option<String>,
    options: ButtonOptions,
    accessibility_label: Option<String>,
    accessibility_hint: Option<String>,
    test_id: Option<String>,
    style: Option<Style>,
}

impl Button {
    pub const NAME: &'static str = "Button";

    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            on_press: None,
            icon: None,
            options: ButtonOptions::default(),
            accessibility_label: None,
            accessibility_hint: None,
            test_id: None,
            style: None,
        }
    }

    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.on_press = Some(Arc::new(handler));
        self
    }

    pub(crate) fn on_press_handler(mut self, handler: PressHandler) -> Self {
        self.on_press = Some(handler);
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.options.variant = Some(variant);
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.options.size = Some(size);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.options.disabled = Some(disabled);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.options.loading = Some(loading);
        self
    }

    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(name.into());
        self
    }

    pub fn icon_position(mut self, position: IconPosition) -> Self {
        self.options.icon_position = Some(position);
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.options.full_width = Some(full_width);
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

    pub(crate) fn test_id_opt(mut self, id: Option<String>) -> Self {
        if id.is_some() {
            self.test_id = id;
        }
        self
    }

    /// Style merged over the derived one
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &ButtonOptions {
        &self.options
    }

    /// Whether a press would reach `on_press`
    pub fn is_interactive(&self) -> bool {
        !self.options.disabled() && !self.options.loading()
    }

    /// Handle a press. Returns whether `on_press` was invoked.
    pub fn press(&self) -> bool {
        if !self.is_interactive() {
            tracing::trace!("Button `{}`: press ignored (disabled or loading)", self.title);
            return false;
        }
        match &self.on_press {
            Some(handler) => {
                dispatch(Self::NAME, "on_press", || handler());
                true
            }
            None => false,
        }
    }

    pub fn validate(&self, ctx: &RenderContext<'_>) -> Result<(), PropError> {
        let v = ctx.validator(Self::NAME);
        v.assert_type(Some(self.title.as_str()), non_empty, "a non-empty string", "title")?;
        v.assert_required(self.on_press.as_ref(), "on_press")?;
        v.assert_type(
            self.icon.as_deref(),
            non_empty,
            "a non-empty icon name",
            "icon",
        )?;
        Ok(())
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> Result<Element, PropError> {
        self.validate(ctx)?;

        let theme = ctx.theme;
        let opts = self.options.with_defaults();
        let variant = opts.variant();
        let disabled = opts.disabled();
        let loading = opts.loading();
        let colors = variant.colors(disabled, theme);
        let metrics = opts.size().metrics(theme);
        let id = self.test_id.as_deref();

        let mut base = Style::new()
            .bg(colors.background)
            .border(theme.borders().thin, colors.border)
            .rounded(theme.radius(RadiusToken::Md))
            .padding(metrics.padding_x, metrics.padding_y)
            .min_h(metrics.min_height)
            .gap(theme.space(SpacingToken::Sm))
            .row()
            .center();
        if opts.full_width() {
            base = base.w_full();
        }

        let adornment = if loading {
            Some(
                spinner(variant.spinner_color(theme))
                    .test_id_opt(suffixed(id, "-spinner"))
                    .style(Style::new().w(metrics.icon_size)),
            )
        } else {
            self.icon.as_ref().map(|name| {
                icon(name, metrics.icon_size)
                    .icon_color(colors.text)
                    .test_id_opt(suffixed(id, "-icon"))
            })
        };

        let label = text(&self.title)
            .test_id_opt(suffixed(id, "-text"))
            .style(
                Style::new()
                    .text_color(colors.text)
                    .font_size(metrics.font_size)
                    .font_weight(FontWeight::SEMIBOLD),
            );

        let children = match opts.icon_position() {
            IconPosition::Left => vec![adornment, Some(label)],
            IconPosition::Right => vec![Some(label), adornment],
        };

        Ok(pressable()
            .test_id_opt(self.test_id.clone())
            .style(base.merge_opt(self.style.as_ref()))
            .accessibility(
                Accessibility::new(Role::Button)
                    .label_or(self.accessibility_label.as_deref(), &self.title)
                    .hint(self.accessibility_hint.as_deref())
                    .disabled(disabled)
                    .busy(loading),
            )
            .children(children.into_iter().flatten()))
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("title", &self.title)
            .field("options", &self.options)
            .field("has_on_press", &self.on_press.is_some())
            .finish()
    }
}

/// Loading flag around an async action.
///
/// [`ButtonLoading::run`] raises the flag, awaits the action, and lowers the
/// flag from a drop guard, so it is cleared on success, on error, and when
/// the future is dropped mid-flight.
#[derive(Clone, Debug, Default)]
pub struct ButtonLoading {
    in_flight: Arc<AtomicUsize>,
}

struct LoadingGuard<'a>(&'a AtomicUsize);

impl<'a> LoadingGuard<'a> {
    fn engage(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl ButtonLoading {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Run `action` with the loading flag raised
    pub async fn run<F, Fut, T>(&self, action: F) -> anyhow::Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        let _guard = LoadingGuard::engage(&self.in_flight);
        action().await
    }

    /// Apply the current flag to a button
    pub fn bind(&self, button: Button) -> Button {
        button.loading(self.is_loading())
    }
}
