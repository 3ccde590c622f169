//! Petal View Primitives
//!
//! Components render into a plain [`Element`] tree: views, text, pressables,
//! text fields, spinners, icons, switches and overlays, each carrying a
//! [`Style`] record, optional [`Accessibility`] attributes and a test id.
//! The host maps the tree onto native widgets; tests query it directly.

pub mod accessibility;
pub mod element;
pub mod query;
pub mod style;

pub use accessibility::{Accessibility, AccessibilityState, Role};
pub use element::{
    icon, overlay, pressable, spinner, switch, text, text_field, view, Element, ElementKind,
    TextFieldProps,
};
pub use style::{Align, Direction, Style};

pub mod prelude {
    pub use crate::accessibility::{Accessibility, AccessibilityState, Role};
    pub use crate::element::*;
    pub use crate::style::{Align, Direction, Style};
}
