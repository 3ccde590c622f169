use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use petal_cn::prelude::*;
use petal_theme::{ColorToken, PetalTheme};
use pretty_assertions::assert_eq;

fn context(mode: ThemeMode) -> ThemeContext {
    ThemeContext::new(PetalTheme::bundle(), mode, ColorScheme::Light)
}

#[test]
fn selecting_a_mode_updates_context_and_notifies() {
    let mut theme = context(ThemeMode::Auto);
    let picked = Arc::new(Mutex::new(Vec::new()));
    let sink = picked.clone();
    let selector = cn::theme_selector().on_change(move |mode| {
        sink.lock().unwrap().push(mode);
        Ok(())
    });

    let changes = Rc::new(RefCell::new(0));
    let counter = changes.clone();
    theme.on_change(move |_| *counter.borrow_mut() += 1);

    assert!(selector.select(ThemeMode::Dark, &mut theme));
    assert_eq!(theme.theme_mode(), ThemeMode::Dark);
    assert!(theme.is_dark());

    // Re-selecting the current mode is a no-op
    assert!(!selector.select(ThemeMode::Dark, &mut theme));
    assert_eq!(*picked.lock().unwrap(), vec![ThemeMode::Dark]);
    assert_eq!(*changes.borrow(), 1);
}

#[test]
fn selector_marks_the_current_mode() {
    let theme = context(ThemeMode::Light);
    let ctx = RenderContext::from_theme_context(&theme);
    let tree = cn::theme_selector()
        .title("Aparência")
        .test_id("theme")
        .render(&ctx, theme.theme_mode())
        .unwrap();

    let radios = tree.find_all_by_role(Role::Radio);
    assert_eq!(radios.len(), 3);
    let labels: Vec<_> = radios
        .iter()
        .filter_map(|r| r.accessibility.as_ref()?.label.as_deref())
        .collect();
    assert_eq!(labels, vec!["Claro", "Escuro", "Automático"]);

    let selected: Vec<_> = radios
        .iter()
        .filter(|r| r.accessibility.as_ref().is_some_and(|a| a.state.selected))
        .filter_map(|r| r.test_id.as_deref())
        .collect();
    assert_eq!(selected, vec!["theme-light"]);

    let group = tree.find_all_by_role(Role::RadioGroup);
    assert_eq!(
        group[0].accessibility.as_ref().unwrap().label.as_deref(),
        Some("Aparência")
    );
}

#[test]
fn selector_icons_can_be_hidden() {
    let theme = PetalTheme::light();
    let ctx = RenderContext::new(&theme);
    let with_icons = cn::theme_selector().render(&ctx, ThemeMode::Auto).unwrap();
    let without = cn::theme_selector()
        .show_icons(false)
        .layout(ThemeSelectorLayout::Horizontal)
        .render(&ctx, ThemeMode::Auto)
        .unwrap();

    let is_icon = |e: &Element| matches!(e.kind, ElementKind::Icon { .. });
    assert_eq!(with_icons.count(is_icon), 3);
    assert_eq!(without.count(is_icon), 0);
    assert!(with_icons.find_by_label("Tema").is_some());
}

fn panel(notifications: Arc<Mutex<Vec<bool>>>, opened: Arc<Mutex<u32>>) -> SettingsPanel {
    cn::settings_panel("Configurações")
        .section(
            SettingsSection::new("Preferências")
                .item(SettingsItem::theme("theme", "Tema", cn::theme_selector()))
                .item(
                    SettingsItem::toggle("notifications", "Notificações", true)
                        .description("Alertas de novas mensagens")
                        .on_toggle(move |on| {
                            notifications.lock().unwrap().push(on);
                            Ok(())
                        }),
                ),
        )
        .section(
            SettingsSection::new("Conta")
                .item(
                    SettingsItem::navigation("profile", "Perfil")
                        .value("Ana")
                        .icon("person")
                        .on_press(move || {
                            *opened.lock().unwrap() += 1;
                            Ok(())
                        }),
                )
                .item(SettingsItem::navigation("billing", "Pagamentos").disabled(true))
                .item(SettingsItem::info("version", "Versão", "1.4.2")),
        )
        .test_id("settings")
}

#[test]
fn settings_rows_dispatch_to_their_handlers() {
    let notifications = Arc::new(Mutex::new(Vec::new()));
    let opened = Arc::new(Mutex::new(0));
    let panel = panel(notifications.clone(), opened.clone());

    assert!(panel.toggle("notifications"));
    assert_eq!(*notifications.lock().unwrap(), vec![false]);

    assert!(panel.press("profile"));
    assert_eq!(*opened.lock().unwrap(), 1);

    assert!(!panel.press("billing"));
    assert!(!panel.press("version"));
    assert!(!panel.toggle("profile"));
    assert!(!panel.press("missing"));

    let mut theme = context(ThemeMode::Light);
    assert!(panel.select_theme("theme", ThemeMode::Dark, &mut theme));
    assert!(theme.is_dark());
    assert!(!panel.select_theme("notifications", ThemeMode::Light, &mut theme));
}

#[test]
fn settings_panel_renders_rows() {
    let theme = context(ThemeMode::Dark);
    let ctx = RenderContext::from_theme_context(&theme);
    let panel = panel(Arc::default(), Arc::default());
    let tree = panel.render(&ctx, theme.theme_mode()).unwrap();

    assert_eq!(tree.test_id.as_deref(), Some("settings"));
    assert!(tree.find_by_text("Configurações").is_some());
    assert!(tree.find_by_text("PREFERÊNCIAS").is_some());
    assert!(tree.find_by_text("Alertas de novas mensagens").is_some());

    let switch = tree.find_by_test_id("notifications").unwrap();
    assert_eq!(switch.kind, ElementKind::Switch { value: true });
    let switch_a11y = switch.accessibility.as_ref().unwrap();
    assert_eq!(switch_a11y.state.checked, Some(true));
    assert_eq!(
        switch_a11y.hint.as_deref(),
        Some("Alertas de novas mensagens")
    );

    let profile = tree.find_by_test_id("profile").unwrap();
    assert!(profile.is_pressable());
    assert!(profile.find_by_text("Ana").is_some());

    let billing = tree.find_by_test_id("billing").unwrap();
    assert!(billing.accessibility.as_ref().unwrap().state.disabled);

    assert!(tree.find_by_test_id("theme-dark").is_some());
    assert_eq!(
        tree.find_by_text("1.4.2").unwrap().style.text_color,
        Some(theme.theme().color(ColorToken::TextSecondary))
    );
}

#[test]
fn row_descriptions_become_hints() {
    let theme = PetalTheme::light();
    let ctx = RenderContext::new(&theme);
    let tree = cn::settings_panel("Configurações")
        .section(
            SettingsSection::new("Conta")
                .item(
                    SettingsItem::navigation("privacy", "Privacidade")
                        .description("Quem pode ver seu perfil"),
                )
                .item(SettingsItem::navigation("help", "Ajuda")),
        )
        .render(&ctx, ThemeMode::Auto)
        .unwrap();

    let hint = |id: &str| {
        tree.find_by_test_id(id)
            .and_then(|e| e.accessibility.as_ref())
            .and_then(|a| a.hint.clone())
    };
    assert_eq!(hint("privacy").as_deref(), Some("Quem pode ver seu perfil"));
    assert_eq!(hint("help"), None);
}

#[test]
fn disabled_theme_row_renders_disabled_options() {
    let mut theme = context(ThemeMode::Light);
    let panel = cn::settings_panel("Configurações").section(
        SettingsSection::new("Aparência").item(
            SettingsItem::theme("theme", "Tema", cn::theme_selector())
                .description("Escolha claro ou escuro")
                .disabled(true),
        ),
    );

    let tree = panel
        .render(&RenderContext::from_theme_context(&theme), theme.theme_mode())
        .unwrap();
    let radios = tree.find_all_by_role(Role::Radio);
    assert_eq!(radios.len(), 3);
    assert!(radios
        .iter()
        .all(|r| r.accessibility.as_ref().is_some_and(|a| a.state.disabled)));

    let group = tree.find_all_by_role(Role::RadioGroup);
    let group_a11y = group[0].accessibility.as_ref().unwrap();
    assert!(group_a11y.state.disabled);
    assert_eq!(group_a11y.hint.as_deref(), Some("Escolha claro ou escuro"));

    assert!(!panel.select_theme("theme", ThemeMode::Dark, &mut theme));
    assert_eq!(theme.theme_mode(), ThemeMode::Light);
}

#[test]
fn disabled_selector_ignores_selection() {
    let mut theme = context(ThemeMode::Light);
    let selector = cn::theme_selector()
        .accessibility_label("Modo de cor")
        .disabled(true);
    assert!(!selector.select(ThemeMode::Dark, &mut theme));
    assert_eq!(theme.theme_mode(), ThemeMode::Light);

    let ctx = RenderContext::from_theme_context(&theme);
    let tree = selector.render(&ctx, theme.theme_mode()).unwrap();
    assert!(tree.find_by_label("Modo de cor").is_some());
}

#[test]
fn blank_panel_title_is_rejected() {
    let theme = PetalTheme::light();
    let ctx = RenderContext::new(&theme).with_mode(BuildMode::Development);
    let err = cn::settings_panel("")
        .render(&ctx, ThemeMode::Auto)
        .unwrap_err();
    assert_eq!(err.component(), "SettingsPanel");
}
