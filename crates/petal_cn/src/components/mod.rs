//! Themed components

pub mod button;
pub mod input;
pub mod modal;
pub mod settings_panel;
pub mod theme_selector;
pub mod validators;

pub use button::{
    Button, ButtonColors, ButtonLoading, ButtonMetrics, ButtonOptions, ButtonSize, ButtonVariant,
    IconPosition,
};
pub use input::{
    FieldState, Input, InputColors, InputController, InputOptions, InputSize, InputVariant,
    Validator,
};
pub use modal::{
    AnimationState, Modal, ModalAction, ModalAnimation, ModalController, ModalOptions,
    ModalPhase, ModalPosition, ModalSize,
};
pub use settings_panel::{ItemKind, SettingsItem, SettingsPanel, SettingsSection};
pub use theme_selector::{ThemeSelector, ThemeSelectorLayout, ThemeSelectorOptions};

/// `{id}{suffix}` when the component has a test id
pub(crate) fn suffixed(test_id: Option<&str>, suffix: &str) -> Option<String> {
    test_id.map(|id| format!("{id}{suffix}"))
}
