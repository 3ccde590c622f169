//! Element tree
//!
//! Free functions build elements (`view()`, `text("...")`, ...); chained
//! methods attach style, accessibility, test ids and children.

use petal_core::Color;
use serde::Serialize;

use crate::accessibility::Accessibility;
use crate::style::Style;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFieldProps {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub secure: bool,
    pub editable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ElementKind {
    View,
    Text { content: String },
    Pressable,
    TextField(TextFieldProps),
    Spinner { color: Color },
    Icon { name: String, size: f32, color: Option<Color> },
    Switch { value: bool },
    /// Full-screen layer hosted above the app (modals)
    Overlay,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub kind: ElementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Accessibility>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            test_id: None,
            style: Style::default(),
            accessibility: None,
            children: Vec::new(),
        }
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    /// Set the test id when one is given
    pub fn test_id_opt(mut self, id: Option<String>) -> Self {
        if id.is_some() {
            self.test_id = id;
        }
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn child_opt(mut self, child: Option<Element>) -> Self {
        self.children.extend(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Text content of a `Text` element
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Text { content } => Some(content),
            _ => None,
        }
    }

    pub fn is_pressable(&self) -> bool {
        matches!(self.kind, ElementKind::Pressable)
    }
}

pub fn view() -> Element {
    Element::new(ElementKind::View)
}

pub fn text(content: impl Into<String>) -> Element {
    Element::new(ElementKind::Text {
        content: content.into(),
    })
}

pub fn pressable() -> Element {
    Element::new(ElementKind::Pressable)
}

pub fn text_field(props: TextFieldProps) -> Element {
    Element::new(ElementKind::TextField(props))
}

pub fn spinner(color: Color) -> Element {
    Element::new(ElementKind::Spinner { color })
}

pub fn icon(name: impl Into<String>, size: f32) -> Element {
    Element::new(ElementKind::Icon {
        name: name.into(),
        size,
        color: None,
    })
}

pub fn switch(value: bool) -> Element {
    Element::new(ElementKind::Switch { value })
}

pub fn overlay() -> Element {
    Element::new(ElementKind::Overlay)
}

impl Element {
    /// Tint an `Icon` element; no-op for other kinds
    pub fn icon_color(mut self, tint: Color) -> Self {
        if let ElementKind::Icon { color, .. } = &mut self.kind {
            *color = Some(tint);
        }
        self
    }
}
