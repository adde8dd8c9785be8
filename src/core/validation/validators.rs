//! Reusable field validators
//!
//! Each validator is a closure taking the public field name and its text
//! value. They are composed per form step in [`crate::core::checkout`].

use crate::core::field::FieldFormat;

/// Validator: value must not be empty. Whitespace counts as a value.
pub fn required(
    message: &'static str,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &str| {
        if value.is_empty() {
            Err(message.to_string())
        } else {
            Ok(())
        }
    }
}

/// Validator: value must have at least `min` characters
pub fn min_chars(
    min: usize,
    message: &'static str,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &str| {
        if value.chars().count() < min {
            Err(message.to_string())
        } else {
            Ok(())
        }
    }
}

/// Validator: value must match a text format
pub fn matches_format(
    format: FieldFormat,
    message: &'static str,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &str| {
        if format.validate(value) {
            Ok(())
        } else {
            Err(message.to_string())
        }
    }
}

/// Validator: value must be one of the allowed options
pub fn one_of(
    allowed: Vec<String>,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        if allowed.iter().any(|option| option == value) {
            Ok(())
        } else {
            Err(format!(
                "'{}' must be one of: {} (got: {})",
                field,
                allowed.join(", "),
                value
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === required() ===

    #[test]
    fn test_required_empty_returns_error() {
        let v = required("Please specify a time for scheduled delivery.");
        assert_eq!(
            v("scheduledTime", "").unwrap_err(),
            "Please specify a time for scheduled delivery."
        );
    }

    #[test]
    fn test_required_whitespace_is_a_value() {
        let v = required("required");
        assert!(v("scheduledTime", "   ").is_ok());
    }

    #[test]
    fn test_required_value_returns_ok() {
        let v = required("required");
        assert!(v("scheduledTime", "2026-10-20T18:30").is_ok());
    }

    // === min_chars() ===

    #[test]
    fn test_min_chars_counts_characters_not_bytes() {
        let v = min_chars(2, "too short");
        assert!(v("cardHolderName", "Zoë").is_ok());
        assert!(v("cardHolderName", "é").is_err());
    }

    #[test]
    fn test_min_chars_exact_min_returns_ok() {
        let v = min_chars(5, "too short");
        assert!(v("streetAddress", "1 Elm").is_ok());
        assert!(v("streetAddress", "1 El").is_err());
    }

    // === matches_format() ===

    #[test]
    fn test_matches_format_uses_message() {
        let v = matches_format(FieldFormat::Cvc, "Valid CVC (3 or 4 digits) is required.");
        assert!(v("cardCvc", "123").is_ok());
        assert_eq!(
            v("cardCvc", "12").unwrap_err(),
            "Valid CVC (3 or 4 digits) is required."
        );
    }

    // === one_of() ===

    #[test]
    fn test_one_of_accepts_listed_value() {
        let v = one_of(vec!["Mild".into(), "Medium".into(), "Fiery Hot".into()]);
        assert!(v("spiceLevel", "Medium").is_ok());
    }

    #[test]
    fn test_one_of_rejects_other_value() {
        let v = one_of(vec!["Mild".into(), "Medium".into()]);
        let err = v("spiceLevel", "Volcanic").unwrap_err();
        assert!(err.contains("spiceLevel"));
        assert!(err.contains("Volcanic"));
    }

    #[test]
    fn test_one_of_empty_list_always_error() {
        let v = one_of(vec![]);
        assert!(v("size", "Regular").is_err());
    }
}
