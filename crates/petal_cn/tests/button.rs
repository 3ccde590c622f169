use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use petal_cn::prelude::*;
use petal_theme::{ColorToken, PetalTheme};
use pretty_assertions::assert_eq;

const VARIANTS: [ButtonVariant; 5] = [
    ButtonVariant::Primary,
    ButtonVariant::Secondary,
    ButtonVariant::Outline,
    ButtonVariant::Ghost,
    ButtonVariant::Danger,
];

fn counter() -> (Arc<AtomicUsize>, impl Fn() -> anyhow::Result<()> + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let inner = count.clone();
    (count, move || {
        inner.fetch_add(1, Ordering::SeqCst);
        Ok(())
    })
}

#[test]
fn text_color_follows_variant_and_disabled() {
    for theme in [PetalTheme::light(), PetalTheme::dark()] {
        let ctx = RenderContext::new(&theme);
        for variant in VARIANTS {
            for disabled in [false, true] {
                let tree = cn::button("Salvar")
                    .variant(variant)
                    .disabled(disabled)
                    .on_press(|| Ok(()))
                    .test_id("save")
                    .render(&ctx)
                    .unwrap();

                let label = tree.find_by_test_id("save-text").unwrap();
                let expected = if disabled {
                    theme.color(ColorToken::DisabledText)
                } else if variant.is_filled() {
                    theme.color(ColorToken::TextInverse)
                } else {
                    theme.color(ColorToken::Primary)
                };
                assert_eq!(label.style.text_color, Some(expected), "{variant} disabled={disabled}");
            }
        }
    }
}

#[test]
fn press_is_blocked_while_disabled_or_loading() {
    for disabled in [false, true] {
        for loading in [false, true] {
            let (count, handler) = counter();
            let button = cn::button("Enviar")
                .disabled(disabled)
                .loading(loading)
                .on_press(handler);

            let pressed = button.press();
            let expected = !disabled && !loading;
            assert_eq!(pressed, expected);
            assert_eq!(count.load(Ordering::SeqCst), usize::from(expected));
        }
    }
}

#[test]
fn loading_replaces_icon_with_spinner() {
    let theme = PetalTheme::light();
    let ctx = RenderContext::new(&theme);

    let idle = cn::button("Salvar")
        .icon("save")
        .on_press(|| Ok(()))
        .test_id("save");
    let tree = idle.render(&ctx).unwrap();
    assert!(tree.find_by_test_id("save-icon").is_some());
    assert!(!tree.has_spinner());

    let busy = idle.loading(true).render(&ctx).unwrap();
    assert!(busy.find_by_test_id("save-icon").is_none());
    assert!(busy.find_by_test_id("save-spinner").is_some());
    let a11y = busy.accessibility.as_ref().unwrap();
    assert!(a11y.state.busy);
    assert_eq!(a11y.label.as_deref(), Some("Salvar"));
}

#[test]
fn icon_position_orders_children() {
    let theme = PetalTheme::light();
    let ctx = RenderContext::new(&theme);
    let tree = cn::button("Próximo")
        .icon("arrow-forward")
        .icon_position(IconPosition::Right)
        .on_press(|| Ok(()))
        .test_id("next")
        .render(&ctx)
        .unwrap();

    let ids: Vec<_> = tree
        .children
        .iter()
        .filter_map(|child| child.test_id.as_deref())
        .collect();
    assert_eq!(ids, vec!["next-text", "next-icon"]);
}

#[test]
fn failing_handler_is_swallowed() {
    let button = cn::button("Excluir").on_press(|| anyhow::bail!("network down"));
    assert!(button.press());
}

#[test]
fn missing_on_press_is_reported_in_development() {
    let theme = PetalTheme::light();
    let dev = RenderContext::new(&theme).with_mode(BuildMode::Development);
    let err = cn::button("Salvar").render(&dev).unwrap_err();
    assert_eq!(
        err,
        PropError::MissingProp {
            component: "Button",
            prop: "on_press",
        }
    );

    let prod = RenderContext::new(&theme).with_mode(BuildMode::Production);
    assert!(cn::button("Salvar").render(&prod).is_ok());
}

#[tokio::test]
async fn loading_flag_resets_on_success_and_error() {
    let loading = ButtonLoading::new();

    let value = loading
        .run(|| async {
            tokio::task::yield_now().await;
            Ok(7)
        })
        .await
        .unwrap();
    assert_eq!(value, 7);
    assert!(!loading.is_loading());

    let err = loading
        .run(|| async { Err::<(), _>(anyhow::anyhow!("timeout")) })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "timeout");
    assert!(!loading.is_loading());
}

#[tokio::test]
async fn loading_flag_is_raised_while_in_flight() {
    let loading = ButtonLoading::new();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let task = {
        let loading = loading.clone();
        tokio::spawn(async move {
            loading
                .run(|| async move {
                    rx.await?;
                    Ok(())
                })
                .await
        })
    };

    tokio::task::yield_now().await;
    while !loading.is_loading() {
        tokio::task::yield_now().await;
    }
    let (count, handler) = counter();
    let bound = loading.bind(cn::button("Salvar").on_press(handler));
    assert!(!bound.press());
    assert_eq!(count.load(Ordering::SeqCst), 0);

    tx.send(()).unwrap();
    task.await.unwrap().unwrap();
    assert!(!loading.is_loading());
    assert!(loading.bind(cn::button("Salvar").on_press(|| Ok(()))).press());
}

#[tokio::test]
async fn loading_flag_resets_when_cancelled() {
    let loading = ButtonLoading::new();
    let slow = loading.run(|| async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(())
    });

    let outcome = tokio::time::timeout(Duration::from_millis(10), slow).await;
    assert!(outcome.is_err());
    assert!(!loading.is_loading());
}
