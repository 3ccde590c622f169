use petal_core::Color;
use petal_layout::prelude::*;
use pretty_assertions::assert_eq;

fn sample() -> Element {
    view()
        .test_id("root")
        .child(text("Title").test_id("root-title"))
        .child(
            pressable()
                .test_id("root-ok")
                .accessibility(Accessibility::new(Role::Button).label("Confirm"))
                .child(text("OK")),
        )
        .child(
            pressable()
                .accessibility(Accessibility::new(Role::Button).disabled(true))
                .child(spinner(Color::WHITE)),
        )
}

#[test]
fn test_walk_is_preorder() {
    let tree = sample();
    assert_eq!(tree.texts(), vec!["Title", "OK"]);
    assert_eq!(tree.walk().count(), 6);
}

#[test]
fn test_find_by_test_id_and_text() {
    let tree = sample();
    assert!(tree.find_by_test_id("root-ok").unwrap().is_pressable());
    assert!(tree.find_by_test_id("missing").is_none());
    assert_eq!(tree.find_by_text("Title").unwrap().test_id.as_deref(), Some("root-title"));
    assert!(tree.find_by_text("Tit").is_none());
    assert!(tree.find_by_text_containing("Tit").is_some());
}

#[test]
fn test_role_and_label_queries() {
    let tree = sample();
    let buttons = tree.find_all_by_role(Role::Button);
    assert_eq!(buttons.len(), 2);
    assert!(buttons[1].accessibility.as_ref().unwrap().state.disabled);
    assert_eq!(tree.find_by_label("Confirm").unwrap().test_id.as_deref(), Some("root-ok"));
    assert!(tree.has_spinner());
}

#[test]
fn test_snapshot_json() {
    let tree = view()
        .test_id("card")
        .style(Style::new().bg(Color::WHITE).rounded(8.0))
        .child(text("Hi"));

    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "kind": { "type": "view" },
            "testId": "card",
            "style": { "background": "#ffffff", "cornerRadius": 8.0 },
            "children": [
                { "kind": { "type": "text", "content": "Hi" } }
            ]
        })
    );
}
