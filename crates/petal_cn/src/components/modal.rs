//! Modal component
//!
//! An overlay with a dimmed backdrop and an animated dialog container
//! (header, body, footer). [`ModalController`] owns the open/close state
//! machine, the animation tracks and the hardware-back registration:
//!
//! ```text
//! Hidden --show--> Opening --complete--> Visible
//!   ^                 |  ^                  |
//!   |               close show              |
//!   |                 v  |                  |
//!   +--complete-- Closing <-----close-------+
//! ```
//!
//! A transition that interrupts another cancels its tracks and restarts
//! from the current animated values; only the latest transition's
//! `on_show`/`on_hide` fires.

use std::sync::Arc;

use petal_animation::{
    AnimationDriver, AnimationId, AnimationScheduler, AnimationSpec, Easing, ParallelGroup,
    SpringConfig,
};
use petal_core::{BackHandler, BackSubscription, StateMachine};
use petal_layout::prelude::*;
use petal_theme::{AnimationTokens, ColorToken, FontWeight, RadiusToken, SpacingToken, Theme};

use crate::callback::{dispatch, PressHandler};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::suffixed;
use crate::context::RenderContext;
use crate::defaults::{component_defaults, ComponentDefaults};
use crate::error::PropError;
use crate::validate::{non_empty, prop_enum};

prop_enum! {
    pub enum ModalPosition {
        Center => "center",
        Top => "top",
        Bottom => "bottom",
    }
    default = Center;
}

prop_enum! {
    pub enum ModalSize {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Full => "full",
    }
    default = Md;
}

prop_enum! {
    pub enum ModalAnimation {
        Fade => "fade",
        Scale => "scale",
        Slide => "slide",
    }
    default = Fade;
}

component_defaults! {
    /// Optional Modal settings
    pub struct ModalOptions for "Modal" {
        position: ModalPosition = ModalPosition::Center,
        size: ModalSize = ModalSize::Md,
        animation: ModalAnimation = ModalAnimation::Fade,
        close_on_backdrop_press: bool = true,
        close_on_back_press: bool = true,
        show_close_button: bool = true,
    }
}

impl ModalPosition {
    /// Vertical distance the container travels when it slides
    fn slide_offset(self) -> f32 {
        match self {
            ModalPosition::Center => 48.0,
            ModalPosition::Top => -320.0,
            ModalPosition::Bottom => 320.0,
        }
    }

    fn justify(self) -> Align {
        match self {
            ModalPosition::Center => Align::Center,
            ModalPosition::Top => Align::Start,
            ModalPosition::Bottom => Align::End,
        }
    }
}

impl ModalSize {
    fn max_width(self) -> Option<f32> {
        match self {
            ModalSize::Sm => Some(320.0),
            ModalSize::Md => Some(480.0),
            ModalSize::Lg => Some(640.0),
            ModalSize::Full => None,
        }
    }
}

impl ModalOptions {
    fn animates_scale(&self) -> bool {
        self.animation() == ModalAnimation::Scale
    }

    fn animates_translate(&self) -> bool {
        self.animation() == ModalAnimation::Slide || self.position() != ModalPosition::Center
    }
}

/// One footer button
#[derive(Clone)]
pub struct ModalAction {
    pub title: String,
    pub on_press: PressHandler,
    pub loading: bool,
    pub disabled: bool,
    pub variant: Option<ButtonVariant>,
}

impl ModalAction {
    pub fn new<F>(title: impl Into<String>, on_press: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            title: title.into(),
            on_press: Arc::new(on_press),
            loading: false,
            disabled: false,
            variant: None,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    fn button(&self, fallback: ButtonVariant) -> Button {
        Button::new(&self.title)
            .on_press_handler(self.on_press.clone())
            .variant(self.variant.unwrap_or(fallback))
            .size(ButtonSize::Md)
            .loading(self.loading)
            .disabled(self.disabled)
    }
}

impl std::fmt::Debug for ModalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalAction")
            .field("title", &self.title)
            .field("loading", &self.loading)
            .field("disabled", &self.disabled)
            .field("variant", &self.variant)
            .finish()
    }
}

/// Modal props
#[derive(Clone, Default)]
pub struct Modal {
    visible: bool,
    title: Option<String>,
    content: Option<Element>,
    footer: Option<Element>,
    primary_action: Option<ModalAction>,
    secondary_action: Option<ModalAction>,
    on_close: Option<PressHandler>,
    on_show: Option<PressHandler>,
    on_hide: Option<PressHandler>,
    options: ModalOptions,
    accessibility_label: Option<String>,
    accessibility_hint: Option<String>,
    test_id: Option<String>,
    style: Option<Style>,
}

impl Modal {
    pub const NAME: &'static str = "Modal";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Body content
    pub fn content(mut self, content: Element) -> Self {
        self.content = Some(content);
        self
    }

    /// Custom footer; replaces the action buttons
    pub fn footer(mut self, footer: Element) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn primary_action(mut self, action: ModalAction) -> Self {
        self.primary_action = Some(action);
        self
    }

    pub fn secondary_action(mut self, action: ModalAction) -> Self {
        self.secondary_action = Some(action);
        self
    }

    /// Called when the user dismisses the modal (backdrop, back, close button)
    pub fn on_close<F>(mut self, handler: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.on_close = Some(Arc::new(handler));
        self
    }

    pub fn on_show<F>(mut self, handler: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.on_show = Some(Arc::new(handler));
        self
    }

    pub fn on_hide<F>(mut self, handler: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.on_hide = Some(Arc::new(handler));
        self
    }

    pub fn position(mut self, position: ModalPosition) -> Self {
        self.options.position = Some(position);
        self
    }

    pub fn size(mut self, size: ModalSize) -> Self {
        self.options.size = Some(size);
        self
    }

    pub fn animation(mut self, animation: ModalAnimation) -> Self {
        self.options.animation = Some(animation);
        self
    }

    pub fn close_on_backdrop_press(mut self, enabled: bool) -> Self {
        self.options.close_on_backdrop_press = Some(enabled);
        self
    }

    pub fn close_on_back_press(mut self, enabled: bool) -> Self {
        self.options.close_on_back_press = Some(enabled);
        self
    }

    pub fn show_close_button(mut self, show: bool) -> Self {
        self.options.show_close_button = Some(show);
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

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn options(&self) -> &ModalOptions {
        &self.options
    }

    pub fn validate(&self, ctx: &RenderContext<'_>) -> Result<(), PropError> {
        let v = ctx.validator(Self::NAME);
        v.assert_type(self.title.as_deref(), non_empty, "a non-empty string", "title")?;
        v.assert_type(
            self.primary_action.as_ref().map(|a| a.title.as_str()),
            non_empty,
            "an action with a non-empty title",
            "primary_action",
        )?;
        v.assert_type(
            self.secondary_action.as_ref().map(|a| a.title.as_str()),
            non_empty,
            "an action with a non-empty title",
            "secondary_action",
        )?;
        Ok(())
    }
}

impl std::fmt::Debug for Modal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modal")
            .field("visible", &self.visible)
            .field("title", &self.title)
            .field("primary_action", &self.primary_action)
            .field("secondary_action", &self.secondary_action)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Lifecycle phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalPhase {
    Hidden,
    Opening,
    Visible,
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum ModalEvent {
    Show,
    Close,
    AnimationComplete,
}

fn lifecycle() -> StateMachine<ModalPhase, ModalEvent> {
    use ModalEvent::*;
    use ModalPhase::*;

    StateMachine::builder(Hidden)
        .on(Hidden, Show, Opening)
        .on(Opening, AnimationComplete, Visible)
        .on(Visible, Close, Closing)
        .on(Closing, AnimationComplete, Hidden)
        // Interruptions restart toward the other end
        .on(Opening, Close, Closing)
        .on(Closing, Show, Opening)
        .build()
}

/// Animated scalars of the container
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub opacity: f32,
    pub scale: f32,
    pub translate_y: f32,
}

impl AnimationState {
    pub const SHOWN: AnimationState = AnimationState {
        opacity: 1.0,
        scale: 1.0,
        translate_y: 0.0,
    };

    /// Values while hidden, which are also where an opening starts
    fn resting(options: &ModalOptions) -> Self {
        Self {
            opacity: 0.0,
            scale: if options.animates_scale() { 0.9 } else { 1.0 },
            translate_y: if options.animates_translate() {
                options.position().slide_offset()
            } else {
                0.0
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Tracks {
    opacity: Option<AnimationId>,
    scale: Option<AnimationId>,
    translate_y: Option<AnimationId>,
}

/// Per-instance modal state: lifecycle, animation, back registration
pub struct ModalController<D: AnimationDriver = AnimationScheduler> {
    props: Modal,
    fsm: StateMachine<ModalPhase, ModalEvent>,
    driver: D,
    group: ParallelGroup,
    tracks: Tracks,
    values: AnimationState,
    /// Latest requested visibility, prop or user-initiated
    wants_visible: bool,
    back_handler: BackHandler,
    back_subscription: Option<BackSubscription>,
    animations: AnimationTokens,
}

impl<D: AnimationDriver> ModalController<D> {
    pub fn new(props: Modal, back_handler: BackHandler, driver: D) -> Self {
        let values = AnimationState::resting(&props.options.with_defaults());
        let visible = props.visible;
        let mut controller = Self {
            props,
            fsm: lifecycle(),
            driver,
            group: ParallelGroup::new(),
            tracks: Tracks::default(),
            values,
            wants_visible: false,
            back_handler,
            back_subscription: None,
            animations: AnimationTokens::default(),
        };
        if visible {
            controller.show();
        }
        controller
    }

    /// Take transition durations from a theme
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.animations = theme.animations().clone();
        self
    }

    pub fn props(&self) -> &Modal {
        &self.props
    }

    pub fn phase(&self) -> ModalPhase {
        self.fsm.current_state()
    }

    /// Whether anything is on screen (any phase but `Hidden`)
    pub fn is_rendered(&self) -> bool {
        self.phase() != ModalPhase::Hidden
    }

    pub fn animation_state(&self) -> AnimationState {
        self.values
    }

    pub fn back_listener_attached(&self) -> bool {
        self.back_subscription.is_some()
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Replace props after a parent re-render
    pub fn set_props(&mut self, props: Modal) {
        let visibility_changed = props.visible != self.props.visible;
        self.props = props;
        if visibility_changed {
            self.set_visible(self.props.visible);
        } else {
            self.sync_back_listener();
        }
    }

    pub fn set_visible(&mut self, visible: bool) -> bool {
        if visible {
            self.show()
        } else {
            self.hide()
        }
    }

    /// Start opening. No-op while opening or visible.
    pub fn show(&mut self) -> bool {
        let from = self.phase();
        if matches!(from, ModalPhase::Opening | ModalPhase::Visible) {
            return false;
        }
        self.wants_visible = true;
        self.fsm.send(ModalEvent::Show);
        tracing::debug!("Modal {:?}: {:?} -> Opening", self.props.title, from);

        self.start_transition(true, from == ModalPhase::Hidden);
        self.sync_back_listener();
        self.poll();
        true
    }

    /// Start closing. No-op while closing or hidden.
    pub fn hide(&mut self) -> bool {
        let from = self.phase();
        if matches!(from, ModalPhase::Closing | ModalPhase::Hidden) {
            return false;
        }
        self.wants_visible = false;
        self.fsm.send(ModalEvent::Close);
        tracing::debug!("Modal {:?}: {:?} -> Closing", self.props.title, from);

        self.start_transition(false, false);
        self.sync_back_listener();
        self.poll();
        true
    }

    // =========================================================================
    // User interaction
    // =========================================================================

    pub fn press_backdrop(&mut self) -> bool {
        if !self.props.options.close_on_backdrop_press() || !self.wants_visible {
            return false;
        }
        self.request_close("backdrop");
        true
    }

    pub fn press_close_button(&mut self) -> bool {
        if !self.props.options.show_close_button() || !self.wants_visible {
            return false;
        }
        self.request_close("close button");
        true
    }

    /// Route a hardware back press. Returns whether the modal consumed it.
    pub fn handle_back_press(&mut self) -> bool {
        let consumed = self
            .back_subscription
            .as_ref()
            .is_some_and(BackSubscription::is_top);
        if consumed {
            self.request_close("back press");
        }
        consumed
    }

    pub fn press_primary_action(&self) -> bool {
        self.props
            .primary_action
            .as_ref()
            .is_some_and(|action| action.button(ButtonVariant::Primary).press())
    }

    pub fn press_secondary_action(&self) -> bool {
        self.props
            .secondary_action
            .as_ref()
            .is_some_and(|action| action.button(ButtonVariant::Outline).press())
    }

    fn request_close(&mut self, trigger: &str) {
        tracing::debug!("Modal {:?}: dismissed by {trigger}", self.props.title);
        if let Some(handler) = &self.props.on_close {
            dispatch(Modal::NAME, "on_close", || handler());
        }
        self.hide();
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Advance the driver by `dt` seconds and settle finished transitions
    pub fn tick(&mut self, dt: f32) -> Option<ModalPhase> {
        self.driver.tick(dt);
        self.poll()
    }

    /// Settle the running transition once every track has completed.
    ///
    /// Returns the phase entered, if any.
    pub fn poll(&mut self) -> Option<ModalPhase> {
        self.sample();
        if !matches!(self.phase(), ModalPhase::Opening | ModalPhase::Closing) {
            return None;
        }
        if !self.group.is_complete(&self.driver) {
            return None;
        }

        self.release_tracks();
        let (_, entered) = self.fsm.send(ModalEvent::AnimationComplete)?;
        tracing::debug!("Modal {:?}: {:?}", self.props.title, entered);

        let callback = match entered {
            ModalPhase::Visible => self.props.on_show.as_ref().map(|h| ("on_show", h)),
            ModalPhase::Hidden => self.props.on_hide.as_ref().map(|h| ("on_hide", h)),
            _ => None,
        };
        if let Some((name, handler)) = callback {
            dispatch(Modal::NAME, name, || handler());
        }
        Some(entered)
    }

    fn start_transition(&mut self, opening: bool, from_rest: bool) {
        self.sample();
        self.release_tracks();

        let options = self.props.options.with_defaults();
        let resting = AnimationState::resting(&options);
        if from_rest {
            self.values = resting;
        }
        let target = if opening {
            AnimationState::SHOWN
        } else {
            resting
        };

        let fade = if opening {
            AnimationSpec::timing_with(self.animations.normal, Easing::EaseOutCubic)
        } else {
            AnimationSpec::timing_with(self.animations.fast, Easing::EaseInCubic)
        };

        self.tracks.opacity = Some(self.start(self.values.opacity, target.opacity, fade));
        if options.animates_scale() {
            let spec = if opening {
                AnimationSpec::spring(SpringConfig::snappy())
            } else {
                fade
            };
            self.tracks.scale = Some(self.start(self.values.scale, target.scale, spec));
        }
        if options.animates_translate() {
            self.tracks.translate_y =
                Some(self.start(self.values.translate_y, target.translate_y, fade));
        }
        tracing::trace!("Modal: {} track(s) started", self.group.len());
    }

    fn start(&mut self, from: f32, to: f32, spec: AnimationSpec) -> AnimationId {
        let id = self.driver.animate(from, to, spec);
        self.group.push(id);
        id
    }

    /// Copy current track values into `values`
    fn sample(&mut self) {
        let read = |id: Option<AnimationId>| id.and_then(|id| self.driver.value(id));
        if let Some(v) = read(self.tracks.opacity) {
            self.values.opacity = v;
        }
        if let Some(v) = read(self.tracks.scale) {
            self.values.scale = v;
        }
        if let Some(v) = read(self.tracks.translate_y) {
            self.values.translate_y = v;
        }
    }

    fn release_tracks(&mut self) {
        self.group.cancel_all(&mut self.driver);
        self.tracks = Tracks::default();
    }

    fn sync_back_listener(&mut self) {
        let wanted = self.wants_visible && self.props.options.close_on_back_press();
        match (wanted, self.back_subscription.is_some()) {
            (true, false) => {
                self.back_subscription = Some(self.back_handler.subscribe(Modal::NAME));
            }
            (false, true) => {
                self.back_subscription = None;
            }
            _ => {}
        }
    }

    // =========================================================================
    // Render
    // =========================================================================

    /// Render the overlay; `None` while hidden
    pub fn render(&self, ctx: &RenderContext<'_>) -> Result<Option<Element>, PropError> {
        let props = &self.props;
        props.validate(ctx)?;
        if !self.is_rendered() {
            return Ok(None);
        }

        let theme = ctx.theme;
        let opts = props.options.with_defaults();
        let id = props.test_id.as_deref();
        let values = self.values;

        let backdrop = pressable().test_id_opt(suffixed(id, "-backdrop")).style(
            Style::new()
                .bg(theme.color(ColorToken::Overlay))
                .opacity(values.opacity)
                .w_full(),
        );

        let close_button = opts.show_close_button().then(|| {
            pressable()
                .test_id_opt(suffixed(id, "-close-button"))
                .accessibility(Accessibility::new(Role::Button).label("Fechar"))
                .child(icon("close", 24.0).icon_color(theme.color(ColorToken::TextSecondary)))
        });

        let title = props.title.as_ref().map(|title| {
            text(title)
                .test_id_opt(suffixed(id, "-title"))
                .accessibility(Accessibility::new(Role::Header))
                .style(
                    Style::new()
                        .text_color(theme.color(ColorToken::TextPrimary))
                        .font_size(theme.typography().text_lg)
                        .font_weight(FontWeight::SEMIBOLD),
                )
        });

        let header = (title.is_some() || close_button.is_some()).then(|| {
            view()
                .test_id_opt(suffixed(id, "-header"))
                .style(
                    Style::new()
                        .row()
                        .align(Align::Center)
                        .justify(Align::Stretch)
                        .gap(theme.space(SpacingToken::Sm)),
                )
                .child_opt(title)
                .child_opt(close_button)
        });

        let body = view()
            .test_id_opt(suffixed(id, "-body"))
            .child_opt(props.content.clone());

        let footer_items = match &props.footer {
            Some(custom) => vec![custom.clone()],
            None => self.render_actions(ctx, id)?,
        };
        let footer = (!footer_items.is_empty()).then(|| {
            view()
                .test_id_opt(suffixed(id, "-footer"))
                .style(
                    Style::new()
                        .row()
                        .justify(Align::End)
                        .gap(theme.space(SpacingToken::Sm)),
                )
                .children(footer_items)
        });

        let mut container_style = Style::new()
            .column()
            .gap(theme.space(SpacingToken::Md))
            .bg(theme.color(ColorToken::Surface))
            .rounded(theme.radius(RadiusToken::Lg))
            .padding(theme.space(SpacingToken::Lg), theme.space(SpacingToken::Lg))
            .shadow(theme.shadows().lg.clone())
            .opacity(values.opacity)
            .scale(values.scale)
            .translate_y(values.translate_y);
        container_style = match opts.size().max_width() {
            Some(width) => container_style.max_w(width),
            None => container_style.w_full(),
        };

        let label = props
            .accessibility_label
            .as_deref()
            .or(props.title.as_deref());
        let mut dialog =
            Accessibility::new(Role::Dialog).hint(props.accessibility_hint.as_deref());
        if let Some(label) = label {
            dialog = dialog.label(label);
        }

        let container = view()
            .test_id_opt(suffixed(id, "-modal"))
            .accessibility(dialog)
            .style(container_style.merge_opt(props.style.as_ref()))
            .child_opt(header)
            .child(body)
            .child_opt(footer);

        Ok(Some(
            overlay()
                .test_id_opt(props.test_id.clone())
                .style(
                    Style::new()
                        .column()
                        .align(Align::Center)
                        .justify(opts.position().justify())
                        .w_full(),
                )
                .child(backdrop)
                .child(container),
        ))
    }

    /// Footer buttons, secondary first
    fn render_actions(
        &self,
        ctx: &RenderContext<'_>,
        id: Option<&str>,
    ) -> Result<Vec<Element>, PropError> {
        let props = &self.props;
        let mut buttons = Vec::new();
        if let Some(action) = &props.secondary_action {
            let button = action
                .button(ButtonVariant::Outline)
                .test_id_opt(suffixed(id, "-secondary-action"));
            buttons.push(button.render(ctx)?);
        }
        if let Some(action) = &props.primary_action {
            let button = action
                .button(ButtonVariant::Primary)
                .test_id_opt(suffixed(id, "-primary-action"));
            buttons.push(button.render(ctx)?);
        }
        Ok(buttons)
    }
}

impl<D: AnimationDriver> std::fmt::Debug for ModalController<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalController")
            .field("phase", &self.phase())
            .field("values", &self.values)
            .field("wants_visible", &self.wants_visible)
            .field("back_listener", &self.back_subscription)
            .finish()
    }
}
