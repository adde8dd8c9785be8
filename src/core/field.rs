//! Text formats checked on form fields

use regex::Regex;
use std::sync::OnceLock;

/// Field format validators
#[derive(Debug, Clone)]
pub enum FieldFormat {
    /// `12345` or `12345-6789`
    ZipCode,
    /// Exactly 16 digits
    CardNumber,
    /// `MM/YY` with month 01-12
    CardExpiry,
    /// 3 or 4 digits
    Cvc,
    Custom(Regex),
}

impl FieldFormat {
    /// Check a value against this format
    pub fn validate(&self, value: &str) -> bool {
        match self {
            FieldFormat::ZipCode => Self::zip_regex().is_match(value),
            FieldFormat::CardNumber => Self::card_number_regex().is_match(value),
            FieldFormat::CardExpiry => Self::card_expiry_regex().is_match(value),
            FieldFormat::Cvc => Self::cvc_regex().is_match(value),
            FieldFormat::Custom(regex) => regex.is_match(value),
        }
    }

    fn zip_regex() -> &'static Regex {
        static ZIP_REGEX: OnceLock<Regex> = OnceLock::new();
        ZIP_REGEX.get_or_init(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").unwrap())
    }

    fn card_number_regex() -> &'static Regex {
        static CARD_REGEX: OnceLock<Regex> = OnceLock::new();
        CARD_REGEX.get_or_init(|| Regex::new(r"^[0-9]{16}$").unwrap())
    }

    fn card_expiry_regex() -> &'static Regex {
        static EXPIRY_REGEX: OnceLock<Regex> = OnceLock::new();
        EXPIRY_REGEX.get_or_init(|| Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").unwrap())
    }

    fn cvc_regex() -> &'static Regex {
        static CVC_REGEX: OnceLock<Regex> = OnceLock::new();
        CVC_REGEX.get_or_init(|| Regex::new(r"^[0-9]{3,4}$").unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_code_format() {
        let format = FieldFormat::ZipCode;
        assert!(format.validate("12345"));
        assert!(format.validate("12345-6789"));
        assert!(!format.validate("1234"));
        assert!(!format.validate("12345-678"));
        assert!(!format.validate("12345 "));
        assert!(!format.validate("abcde"));
    }

    #[test]
    fn test_card_number_format() {
        let format = FieldFormat::CardNumber;
        assert!(format.validate("4242424242424242"));
        assert!(!format.validate("1234"));
        assert!(!format.validate("4242 4242 4242 4242"));
        assert!(!format.validate("42424242424242421"));
    }

    #[test]
    fn test_card_expiry_format() {
        let format = FieldFormat::CardExpiry;
        assert!(format.validate("01/27"));
        assert!(format.validate("12/30"));
        assert!(!format.validate("00/27"));
        assert!(!format.validate("13/27"));
        assert!(!format.validate("1/27"));
        assert!(!format.validate("01/2027"));
    }

    #[test]
    fn test_cvc_format() {
        let format = FieldFormat::Cvc;
        assert!(format.validate("123"));
        assert!(format.validate("1234"));
        assert!(!format.validate("12"));
        assert!(!format.validate("12345"));
    }

    #[test]
    fn test_only_ascii_digits_accepted() {
        assert!(!FieldFormat::ZipCode.validate("١٢٣٤٥"));
        assert!(!FieldFormat::ZipCode.validate("12345-６７８９"));
        assert!(!FieldFormat::CardNumber.validate("４２４２４２４２４２４２４２４２"));
        assert!(!FieldFormat::CardExpiry.validate("12/２９"));
        assert!(!FieldFormat::Cvc.validate("१२३"));
    }

    #[test]
    fn test_custom_format() {
        let format = FieldFormat::Custom(Regex::new(r"^[A-Z]{3}$").unwrap());
        assert!(format.validate("USA"));
        assert!(!format.validate("usa"));
    }
}
