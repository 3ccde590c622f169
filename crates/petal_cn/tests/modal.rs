use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use petal_cn::prelude::*;
use petal_theme::PetalTheme;
use pretty_assertions::assert_eq;

const FRAME: f32 = 1.0 / 60.0;

#[derive(Clone, Default)]
struct Calls(Arc<AtomicUsize>);

impl Calls {
    fn handler(&self) -> impl Fn() -> anyhow::Result<()> + Send + Sync + 'static {
        let count = self.0.clone();
        move || {
            count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

fn immediate(props: Modal, back: &BackHandler) -> ModalController<ImmediateDriver> {
    ModalController::new(props, back.clone(), ImmediateDriver::new())
}

fn run_until_settled(modal: &mut ModalController, on_frame: impl Fn(&ModalController)) {
    for _ in 0..600 {
        modal.tick(FRAME);
        on_frame(&*modal);
        if matches!(modal.phase(), ModalPhase::Visible | ModalPhase::Hidden) {
            return;
        }
    }
    panic!("modal never settled, phase {:?}", modal.phase());
}

#[test]
fn hidden_modal_renders_nothing() {
    let theme = PetalTheme::light();
    let ctx = RenderContext::new(&theme);
    let modal = immediate(cn::modal().title("X"), &BackHandler::new());

    assert_eq!(modal.phase(), ModalPhase::Hidden);
    assert_eq!(modal.render(&ctx).unwrap(), None);
}

#[test]
fn visible_modal_renders_sections() {
    let theme = PetalTheme::light();
    let ctx = RenderContext::new(&theme);
    let modal = immediate(
        cn::modal()
            .visible(true)
            .title("X")
            .content(text("Corpo"))
            .primary_action(ModalAction::new("Confirmar", || Ok(())))
            .secondary_action(ModalAction::new("Cancelar", || Ok(())))
            .test_id("confirm"),
        &BackHandler::new(),
    );

    let tree = modal.render(&ctx).unwrap().unwrap();
    for id in [
        "confirm-backdrop",
        "confirm-modal",
        "confirm-header",
        "confirm-close-button",
        "confirm-body",
        "confirm-footer",
    ] {
        assert!(tree.find_by_test_id(id).is_some(), "missing {id}");
    }
    assert_eq!(
        tree.find_by_test_id("confirm-title").and_then(|e| e.text()),
        Some("X")
    );
    assert!(tree.find_by_text("Corpo").is_some());

    let footer = tree.find_by_test_id("confirm-footer").unwrap();
    let order: Vec<_> = footer
        .children
        .iter()
        .filter_map(|c| c.test_id.as_deref())
        .collect();
    assert_eq!(order, vec!["confirm-secondary-action", "confirm-primary-action"]);

    let dialog = tree.find_by_test_id("confirm-modal").unwrap();
    let a11y = dialog.accessibility.as_ref().unwrap();
    assert_eq!(a11y.role, Role::Dialog);
    assert_eq!(a11y.label.as_deref(), Some("X"));
    assert_eq!(dialog.style.opacity, Some(1.0));
    assert_eq!(a11y.hint, None);
}

#[test]
fn dialog_exposes_label_and_hint_overrides() {
    let theme = PetalTheme::light();
    let ctx = RenderContext::new(&theme);
    let modal = immediate(
        cn::modal()
            .visible(true)
            .title("Excluir")
            .accessibility_label("Confirmar exclusão")
            .accessibility_hint("Deslize para baixo para fechar")
            .test_id("delete"),
        &BackHandler::new(),
    );

    let tree = modal.render(&ctx).unwrap().unwrap();
    let a11y = tree
        .find_by_test_id("delete-modal")
        .and_then(|e| e.accessibility.as_ref())
        .unwrap();
    assert_eq!(a11y.label.as_deref(), Some("Confirmar exclusão"));
    assert_eq!(a11y.hint.as_deref(), Some("Deslize para baixo para fechar"));
}

#[test]
fn custom_footer_replaces_actions() {
    let theme = PetalTheme::light();
    let ctx = RenderContext::new(&theme);
    let modal = immediate(
        cn::modal()
            .visible(true)
            .show_close_button(false)
            .footer(text("Rodapé"))
            .primary_action(ModalAction::new("OK", || Ok(())))
            .test_id("m"),
        &BackHandler::new(),
    );

    let tree = modal.render(&ctx).unwrap().unwrap();
    assert!(tree.find_by_text("Rodapé").is_some());
    assert!(tree.find_by_test_id("m-primary-action").is_none());
    assert!(tree.find_by_test_id("m-header").is_none());
}

#[test]
fn back_listener_count_stays_bounded() {
    let back = BackHandler::new();
    let mut modal = immediate(cn::modal().title("Ajustes"), &back);

    for _ in 0..10 {
        assert!(modal.show());
        assert!(modal.back_listener_attached());
        assert_eq!(back.listener_count(), 1);

        assert!(modal.hide());
        assert!(!modal.back_listener_attached());
        assert_eq!(back.listener_count(), 0);
    }

    modal.show();
    assert_eq!(back.listener_count(), 1);
    drop(modal);
    assert_eq!(back.listener_count(), 0);
}

#[test]
fn no_back_listener_when_back_press_disabled() {
    let back = BackHandler::new();
    let mut modal = immediate(
        cn::modal().visible(true).close_on_back_press(false),
        &back,
    );
    assert!(!modal.back_listener_attached());
    assert!(!modal.handle_back_press());
    assert_eq!(modal.phase(), ModalPhase::Visible);
    assert_eq!(back.listener_count(), 0);
}

#[test]
fn each_dismiss_trigger_closes_once() {
    let triggers: [fn(&mut ModalController<ImmediateDriver>) -> bool; 3] = [
        ModalController::press_backdrop,
        ModalController::press_close_button,
        ModalController::handle_back_press,
    ];

    for trigger in triggers {
        let back = BackHandler::new();
        let closed = Calls::default();
        let hidden = Calls::default();
        let props = || {
            cn::modal()
                .title("Sair?")
                .on_close(closed.handler())
                .on_hide(hidden.handler())
        };
        let mut modal = immediate(props().visible(true), &back);

        assert!(trigger(&mut modal));
        assert_eq!(closed.get(), 1);
        assert_eq!(hidden.get(), 1);
        assert_eq!(modal.phase(), ModalPhase::Hidden);
        assert_eq!(back.listener_count(), 0);

        // Parent reacts to on_close by flipping the prop
        modal.set_props(props().visible(false));
        assert!(!modal.set_visible(false));
        assert!(!trigger(&mut modal));
        assert_eq!(closed.get(), 1);
        assert_eq!(hidden.get(), 1);
    }
}

#[test]
fn backdrop_press_can_be_disabled() {
    let closed = Calls::default();
    let mut modal = immediate(
        cn::modal()
            .visible(true)
            .close_on_backdrop_press(false)
            .on_close(closed.handler()),
        &BackHandler::new(),
    );

    assert!(!modal.press_backdrop());
    assert_eq!(modal.phase(), ModalPhase::Visible);
    assert_eq!(closed.get(), 0);
}

#[test]
fn back_press_goes_to_topmost_listener() {
    let back = BackHandler::new();
    let mut modal = immediate(cn::modal().visible(true), &back);

    let screen = back.subscribe("Screen");
    assert!(!modal.handle_back_press());
    assert_eq!(modal.phase(), ModalPhase::Visible);

    drop(screen);
    assert!(modal.handle_back_press());
    assert_eq!(modal.phase(), ModalPhase::Hidden);
}

#[test]
fn on_show_waits_for_every_track() {
    let shown = Calls::default();
    let mut modal = ModalController::new(
        cn::modal()
            .animation(ModalAnimation::Scale)
            .position(ModalPosition::Bottom)
            .on_show(shown.handler()),
        BackHandler::new(),
        AnimationScheduler::new(),
    );

    modal.show();
    assert_eq!(modal.phase(), ModalPhase::Opening);
    assert_eq!(modal.driver().track_count(), 3);
    let start = modal.animation_state();
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.scale, 0.9);

    run_until_settled(&mut modal, |m| {
        if m.phase() == ModalPhase::Opening {
            assert_eq!(shown.get(), 0);
        }
    });

    assert_eq!(modal.phase(), ModalPhase::Visible);
    assert_eq!(shown.get(), 1);
    assert_eq!(modal.animation_state(), AnimationState::SHOWN);
    assert_eq!(modal.driver().track_count(), 0);
}

#[test]
fn interrupted_opening_only_fires_latest_callback() {
    let shown = Calls::default();
    let hidden = Calls::default();
    let mut modal = ModalController::new(
        cn::modal()
            .on_show(shown.handler())
            .on_hide(hidden.handler()),
        BackHandler::new(),
        AnimationScheduler::new(),
    );

    modal.show();
    modal.tick(0.1);
    let midway = modal.animation_state().opacity;
    assert!(midway > 0.0 && midway < 1.0);

    assert!(modal.hide());
    assert_eq!(modal.phase(), ModalPhase::Closing);
    // Restarted from the current value, not from fully shown
    assert_eq!(modal.animation_state().opacity, midway);
    assert_eq!(modal.driver().track_count(), 1);

    run_until_settled(&mut modal, |_| {});
    assert_eq!(modal.phase(), ModalPhase::Hidden);
    assert_eq!(shown.get(), 0);
    assert_eq!(hidden.get(), 1);
}

#[test]
fn interrupted_closing_reopens() {
    let shown = Calls::default();
    let hidden = Calls::default();
    let mut modal = ModalController::new(
        cn::modal()
            .visible(true)
            .on_show(shown.handler())
            .on_hide(hidden.handler()),
        BackHandler::new(),
        AnimationScheduler::new(),
    );
    run_until_settled(&mut modal, |_| {});
    assert_eq!(shown.get(), 1);

    modal.hide();
    modal.tick(FRAME);
    assert!(modal.show());
    assert_eq!(modal.phase(), ModalPhase::Opening);
    assert!(modal.back_listener_attached());

    run_until_settled(&mut modal, |_| {});
    assert_eq!(modal.phase(), ModalPhase::Visible);
    assert_eq!(shown.get(), 2);
    assert_eq!(hidden.get(), 0);
}

#[test]
fn action_flags_are_forwarded() {
    let theme = PetalTheme::light();
    let ctx = RenderContext::new(&theme);
    let saved = Calls::default();
    let cancelled = Calls::default();

    let modal = immediate(
        cn::modal()
            .visible(true)
            .primary_action(ModalAction::new("Salvar", saved.handler()).loading(true))
            .secondary_action(ModalAction::new("Cancelar", cancelled.handler()).disabled(true))
            .test_id("edit"),
        &BackHandler::new(),
    );

    let tree = modal.render(&ctx).unwrap().unwrap();
    let primary = tree.find_by_test_id("edit-primary-action").unwrap();
    assert!(primary.accessibility.as_ref().unwrap().state.busy);
    assert!(primary.has_spinner());
    let secondary = tree.find_by_test_id("edit-secondary-action").unwrap();
    assert!(secondary.accessibility.as_ref().unwrap().state.disabled);

    assert!(!modal.press_primary_action());
    assert!(!modal.press_secondary_action());
    assert_eq!(saved.get(), 0);
    assert_eq!(cancelled.get(), 0);
}

#[test]
fn primary_action_runs_when_idle() {
    let saved = Calls::default();
    let modal = immediate(
        cn::modal()
            .visible(true)
            .primary_action(ModalAction::new("Salvar", saved.handler())),
        &BackHandler::new(),
    );
    assert!(modal.press_primary_action());
    assert_eq!(saved.get(), 1);
}

#[test]
fn empty_title_is_rejected_in_development() {
    let theme = PetalTheme::light();
    let ctx = RenderContext::new(&theme).with_mode(BuildMode::Development);
    let modal = immediate(cn::modal().visible(true).title("  "), &BackHandler::new());
    let err = modal.render(&ctx).unwrap_err();
    assert_eq!(err.component(), "Modal");
    assert_eq!(err.prop(), "title");
}
