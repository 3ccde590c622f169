//! Development-time prop validation
//!
//! Each check returns `Ok(())` immediately in [`BuildMode::Production`]. In
//! development a violation is logged at `error` level and returned; values
//! are never coerced.

use petal_core::BuildMode;

use crate::error::PropError;

/// A closed set of string-named prop values (variant, size, position, ...)
pub trait PropEnum: Copy + Default + 'static {
    /// Every accepted name, in declaration order
    const NAMES: &'static [&'static str];

    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self>;
}

/// Declare a prop enum together with its string names
macro_rules! prop_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant, )+
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl $crate::validate::PropEnum for $name {
            const NAMES: &'static [&'static str] = &[$($label),+];

            fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $label => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::validate::PropEnum::name(*self))
            }
        }
    };
}

pub(crate) use prop_enum;

/// Prop checks for one component
#[derive(Clone, Copy, Debug)]
pub struct PropValidator {
    component: &'static str,
    mode: BuildMode,
}

impl PropValidator {
    pub fn new(component: &'static str, mode: BuildMode) -> Self {
        Self { component, mode }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    /// Whether checks run at all
    pub fn is_active(&self) -> bool {
        self.mode.is_development()
    }

    /// Fails with `MissingProp` when `value` is absent
    pub fn assert_required<T: ?Sized>(
        &self,
        value: Option<&T>,
        name: &'static str,
    ) -> Result<(), PropError> {
        if !self.is_active() || value.is_some() {
            return Ok(());
        }
        self.fail(PropError::MissingProp {
            component: self.component,
            prop: name,
        })
    }

    /// Fails with `InvalidEnum` when `value` is present but not in `allowed`
    pub fn assert_one_of(
        &self,
        value: Option<&str>,
        allowed: &'static [&'static str],
        name: &'static str,
    ) -> Result<(), PropError> {
        if !self.is_active() {
            return Ok(());
        }
        match value {
            Some(value) if !allowed.contains(&value) => self.fail(PropError::InvalidEnum {
                component: self.component,
                prop: name,
                value: value.to_string(),
                expected: allowed.to_vec(),
            }),
            _ => Ok(()),
        }
    }

    /// Fails with `TypeMismatch` when `value` is present but `predicate`
    /// rejects it. `expected` describes the accepted shape.
    pub fn assert_type<T: ?Sized>(
        &self,
        value: Option<&T>,
        predicate: impl Fn(&T) -> bool,
        expected: &'static str,
        name: &'static str,
    ) -> Result<(), PropError> {
        if !self.is_active() {
            return Ok(());
        }
        match value {
            Some(value) if !predicate(value) => self.fail(PropError::TypeMismatch {
                component: self.component,
                prop: name,
                expected,
            }),
            _ => Ok(()),
        }
    }

    /// Parse a string-valued prop into its enum.
    ///
    /// In production there is no check to fail, so an unknown name falls back
    /// to the enum default.
    pub fn parse_prop<E: PropEnum>(&self, raw: &str, name: &'static str) -> Result<E, PropError> {
        if let Some(value) = E::from_name(raw) {
            return Ok(value);
        }
        self.assert_one_of(Some(raw), E::NAMES, name)?;
        let fallback = E::default();
        tracing::warn!(
            "{}: unknown `{}` value `{}`, using `{}`",
            self.component,
            name,
            raw,
            fallback.name()
        );
        Ok(fallback)
    }

    fn fail(&self, err: PropError) -> Result<(), PropError> {
        tracing::error!("prop contract violation: {err}");
        Err(err)
    }
}

/// Predicate for `assert_type`: string with visible content
pub fn non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    prop_enum! {
        enum Tone {
            Soft => "soft",
            Loud => "loud",
        }
        default = Soft;
    }

    fn dev() -> PropValidator {
        PropValidator::new("Widget", BuildMode::Development)
    }

    fn prod() -> PropValidator {
        PropValidator::new("Widget", BuildMode::Production)
    }

    #[test]
    fn test_required() {
        assert!(dev().assert_required(Some("x"), "title").is_ok());
        assert_eq!(
            dev().assert_required::<str>(None, "title"),
            Err(PropError::MissingProp {
                component: "Widget",
                prop: "title"
            })
        );
        assert!(prod().assert_required::<str>(None, "title").is_ok());
    }

    #[test]
    fn test_one_of() {
        assert!(dev().assert_one_of(None, Tone::NAMES, "tone").is_ok());
        assert!(dev().assert_one_of(Some("loud"), Tone::NAMES, "tone").is_ok());

        let err = dev()
            .assert_one_of(Some("shouty"), Tone::NAMES, "tone")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Widget: invalid value `shouty` for prop `tone`, expected one of [soft, loud]"
        );
    }

    #[test]
    fn test_type_predicate() {
        let err = dev()
            .assert_type(Some("  "), non_empty, "a non-empty string", "title")
            .unwrap_err();
        assert_eq!(err.prop(), "title");
        assert!(matches!(err, PropError::TypeMismatch { .. }));

        assert!(dev()
            .assert_type::<usize>(Some(&0), |n| *n > 0, "a positive length", "max_length")
            .is_err());
        assert!(prod()
            .assert_type::<usize>(Some(&0), |n| *n > 0, "a positive length", "max_length")
            .is_ok());
    }

    #[test]
    fn test_parse_prop() {
        assert_eq!(dev().parse_prop::<Tone>("loud", "tone"), Ok(Tone::Loud));
        assert!(dev().parse_prop::<Tone>("LOUD", "tone").is_err());
        assert_eq!(prod().parse_prop::<Tone>("LOUD", "tone"), Ok(Tone::Soft));
    }

    #[test]
    fn test_prop_enum_display_and_serde() {
        assert_eq!(Tone::Loud.to_string(), "loud");
        assert_eq!(serde_json::to_string(&Tone::Loud).unwrap(), "\"loud\"");
    }
}
