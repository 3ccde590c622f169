//! Built-in input validators
//!
//! A validator maps the current text to an error message, or `None` when the
//! text is acceptable. Length rules skip empty text; pair them with
//! [`required`] when the field must be filled.

use std::sync::{Arc, OnceLock};

use regex::Regex;

use super::input::Validator;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub fn required() -> Validator {
    Arc::new(|text: &str| text.trim().is_empty().then(|| "Campo obrigatório".to_string()))
}

pub fn min_length(min: usize) -> Validator {
    Arc::new(move |text: &str| {
        let len = text.chars().count();
        (len > 0 && len < min).then(|| format!("Mínimo {min} caracteres"))
    })
}

pub fn max_length(max: usize) -> Validator {
    Arc::new(move |text: &str| {
        (text.chars().count() > max).then(|| format!("Máximo {max} caracteres"))
    })
}

pub fn email() -> Validator {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("Invalid regex pattern"));
    Arc::new(move |text: &str| {
        (!text.is_empty() && !re.is_match(text)).then(|| "E-mail inválido".to_string())
    })
}

/// Match `pattern` against non-empty text; fails if the pattern does not compile
pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Validator, regex::Error> {
    let re = Regex::new(pattern)?;
    let message = message.into();
    Ok(Arc::new(move |text: &str| {
        (!text.is_empty() && !re.is_match(text)).then(|| message.clone())
    }))
}

/// First failing validator wins
pub fn compose(validators: impl IntoIterator<Item = Validator>) -> Validator {
    let validators: Vec<Validator> = validators.into_iter().collect();
    Arc::new(move |text: &str| validators.iter().find_map(|validate| validate(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let v = required();
        assert_eq!(v("").as_deref(), Some("Campo obrigatório"));
        assert_eq!(v("   ").as_deref(), Some("Campo obrigatório"));
        assert_eq!(v("a"), None);
    }

    #[test]
    fn test_lengths_count_chars() {
        let min = min_length(3);
        assert_eq!(min("ab").as_deref(), Some("Mínimo 3 caracteres"));
        assert_eq!(min("ção"), None);
        assert_eq!(min(""), None);

        let max = max_length(2);
        assert_eq!(max("abc").as_deref(), Some("Máximo 2 caracteres"));
        assert_eq!(max("çã"), None);
    }

    #[test]
    fn test_email() {
        let v = email();
        assert_eq!(v("ana@exemplo.com"), None);
        assert_eq!(v("ana@exemplo").as_deref(), Some("E-mail inválido"));
        assert_eq!(v("ana exemplo@x.com").as_deref(), Some("E-mail inválido"));
        assert_eq!(v(""), None);
    }

    #[test]
    fn test_pattern_and_compose() {
        let digits = pattern(r"^\d+$", "Apenas números").unwrap();
        assert!(pattern("(", "x").is_err());

        let v = compose([required(), digits, max_length(4)]);
        assert_eq!(v("").as_deref(), Some("Campo obrigatório"));
        assert_eq!(v("12a").as_deref(), Some("Apenas números"));
        assert_eq!(v("12345").as_deref(), Some("Máximo 4 caracteres"));
        assert_eq!(v("1234"), None);
    }
}
