//! Prop contract violations

use thiserror::Error;

/// A prop that breaks its component's contract.
///
/// Only produced in development builds; see [`crate::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropError {
    #[error("{component}: missing required prop `{prop}`")]
    MissingProp {
        component: &'static str,
        prop: &'static str,
    },

    #[error(
        "{component}: invalid value `{value}` for prop `{prop}`, expected one of [{}]",
        .expected.join(", ")
    )]
    InvalidEnum {
        component: &'static str,
        prop: &'static str,
        value: String,
        expected: Vec<&'static str>,
    },

    #[error("{component}: prop `{prop}` must be {expected}")]
    TypeMismatch {
        component: &'static str,
        prop: &'static str,
        expected: &'static str,
    },
}

impl PropError {
    pub fn component(&self) -> &'static str {
        match self {
            PropError::MissingProp { component, .. }
            | PropError::InvalidEnum { component, .. }
            | PropError::TypeMismatch { component, .. } => component,
        }
    }

    pub fn prop(&self) -> &'static str {
        match self {
            PropError::MissingProp { prop, .. }
            | PropError::InvalidEnum { prop, .. }
            | PropError::TypeMismatch { prop, .. } => prop,
        }
    }
}
