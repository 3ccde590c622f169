//! Settings screen demo
//!
//! Loads a theme configuration, renders a settings panel, then runs a
//! confirmation modal through its open/close animation.
//!
//! Run with: `RUST_LOG=petal_cn=debug cargo run -p petal_cn --example settings_demo`

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use petal_cn::prelude::*;
use petal_theme::{PetalTheme, ThemeConfig};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r##"
mode = "auto"

[colors]
primary = "#0ea5e9"
border-focus = "#0ea5e9"
"##;

const FRAME: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ThemeConfig::from_toml_str(CONFIG)?;
    let mut theme = ThemeContext::from_config(PetalTheme::bundle(), &config, ColorScheme::Dark)?;
    theme.on_change(|change| {
        tracing::info!("theme mode {:?}, scheme {:?}", change.mode, change.scheme);
    });

    let wants_logout = Arc::new(AtomicBool::new(false));
    let logout = wants_logout.clone();
    let panel = cn::settings_panel("Configurações")
        .section(
            SettingsSection::new("Aparência")
                .item(SettingsItem::theme("theme", "Tema", cn::theme_selector())),
        )
        .section(
            SettingsSection::new("Conta")
                .item(SettingsItem::info("email", "E-mail", "ana@example.com"))
                .item(SettingsItem::navigation("logout", "Sair").on_press(move || {
                    logout.store(true, Ordering::SeqCst);
                    Ok(())
                })),
        );

    let tree = panel.render(&RenderContext::from_theme_context(&theme), theme.theme_mode())?;
    println!("{}", serde_json::to_string_pretty(&tree)?);

    panel.select_theme("theme", ThemeMode::Light, &mut theme);
    panel.press("logout");

    let back = BackHandler::new();
    let mut confirm = ModalController::new(
        cn::modal()
            .title("Sair da conta?")
            .content(text("Você precisará entrar novamente."))
            .primary_action(ModalAction::new("Sair", || Ok(())).variant(ButtonVariant::Danger))
            .secondary_action(ModalAction::new("Cancelar", || Ok(())))
            .on_show(|| {
                tracing::info!("confirmation shown");
                Ok(())
            }),
        back.clone(),
        AnimationScheduler::new(),
    )
    .with_theme(theme.theme());

    confirm.set_visible(wants_logout.load(Ordering::SeqCst));
    let mut frames = 0;
    while confirm.phase() == ModalPhase::Opening {
        confirm.tick(FRAME);
        frames += 1;
    }
    println!("modal opened after {frames} frame(s)");

    let ctx = RenderContext::from_theme_context(&theme);
    if let Some(overlay) = confirm.render(&ctx)? {
        println!("modal texts: {:?}", overlay.texts());
    }

    // Real time from here on, as a host render loop would drive it.
    confirm.handle_back_press();
    while confirm.phase() == ModalPhase::Closing {
        std::thread::sleep(Duration::from_secs_f32(FRAME));
        confirm.driver_mut().frame();
        confirm.poll();
    }
    println!(
        "modal {:?}, back listeners: {}",
        confirm.phase(),
        back.listener_count()
    );
    Ok(())
}
