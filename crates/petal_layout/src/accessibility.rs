//! Accessibility attributes carried by interactive elements

use serde::Serialize;

/// Semantic role announced by screen readers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    None,
    Button,
    Text,
    Header,
    TextField,
    Image,
    Dialog,
    Radio,
    RadioGroup,
    Switch,
    Link,
    ProgressBar,
    Alert,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AccessibilityState {
    pub disabled: bool,
    pub busy: bool,
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Accessibility {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub role: Role,
    pub state: AccessibilityState,
}

impl Accessibility {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Use `label` when present, otherwise the visible text
    pub fn label_or(mut self, label: Option<&str>, visible: &str) -> Self {
        self.label = Some(label.unwrap_or(visible).to_string());
        self
    }

    pub fn hint(mut self, hint: Option<&str>) -> Self {
        self.hint = hint.map(str::to_string);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.state.disabled = disabled;
        self
    }

    pub fn busy(mut self, busy: bool) -> Self {
        self.state.busy = busy;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.state.selected = selected;
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.state.expanded = Some(expanded);
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.state.checked = Some(checked);
        self
    }
}
