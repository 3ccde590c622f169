//! Per-component defaults
//!
//! Each component keeps its optional settings in an options struct whose
//! fields are all `Option`. The defaults table row fills the gaps:
//! explicitly set fields always win, and merging twice changes nothing.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::components::button::ButtonOptions;
use crate::components::input::InputOptions;
use crate::components::modal::ModalOptions;
use crate::components::theme_selector::ThemeSelectorOptions;

/// Options struct backed by a row of the defaults table
pub trait ComponentDefaults: Sized + Serialize {
    /// Component name the row belongs to
    const COMPONENT: &'static str;

    /// Field names covered by the row
    const FIELDS: &'static [&'static str];

    /// The table row itself: every field set
    fn table() -> Self;

    /// Fill every unset field from the table
    fn with_defaults(&self) -> Self;

    /// Fields not explicitly set
    fn missing_fields(&self) -> Vec<&'static str>;
}

/// Declare an options struct and its defaults row
macro_rules! component_defaults {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident for $component:literal {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty = $default:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
        $vis struct $name {
            $( $(#[$fmeta])* pub $field: Option<$ty>, )+
        }

        impl $crate::defaults::ComponentDefaults for $name {
            const COMPONENT: &'static str = $component;
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),+];

            fn table() -> Self {
                Self { $( $field: Some($default), )+ }
            }

            fn with_defaults(&self) -> Self {
                Self { $( $field: self.$field.clone().or_else(|| Some($default)), )+ }
            }

            fn missing_fields(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $(
                    if self.$field.is_none() {
                        missing.push(stringify!($field));
                    }
                )+
                missing
            }
        }

        impl $name {
            $(
                /// Resolved value (explicit or table default)
                pub fn $field(&self) -> $ty {
                    self.$field.clone().unwrap_or_else(|| $default)
                }
            )+
        }
    };
}

pub(crate) use component_defaults;

fn row<T: ComponentDefaults>(table: &mut Map<String, Value>) -> serde_json::Result<()> {
    table.insert(T::COMPONENT.to_string(), serde_json::to_value(T::table())?);
    Ok(())
}

/// The whole defaults table as `component -> { field -> value }`
pub fn defaults_table() -> serde_json::Result<Value> {
    let mut table = Map::new();
    row::<ButtonOptions>(&mut table)?;
    row::<InputOptions>(&mut table)?;
    row::<ModalOptions>(&mut table)?;
    row::<ThemeSelectorOptions>(&mut table)?;
    Ok(Value::Object(table))
}
