//! Typed error handling for the storefront core
//!
//! Validation failures are the only errors a shopper can trigger. They are
//! local and recoverable: they block a state transition and carry one
//! human-readable message per field.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: per-field input validation failures
//! - [`ConfigError`]: configuration file loading and parsing
//! - [`CatalogError`]: a seed catalog that violates a load-time precondition
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront::prelude::*;
//!
//! match profile.save() {
//!     Ok(saved) => println!("saved {}", saved.name),
//!     Err(StorefrontError::Validation(ValidationError::FieldErrors(errors))) => {
//!         for e in errors {
//!             println!("{}: {}", e.field, e.message);
//!         }
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use serde::Serialize;
use std::fmt;

/// The main error type for the storefront core
#[derive(Debug)]
pub enum StorefrontError {
    /// Input validation errors
    Validation(ValidationError),

    /// Configuration errors
    Config(ConfigError),

    /// Seed catalog errors
    Catalog(CatalogError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for StorefrontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorefrontError::Validation(e) => write!(f, "{}", e),
            StorefrontError::Config(e) => write!(f, "{}", e),
            StorefrontError::Catalog(e) => write!(f, "{}", e),
            StorefrontError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for StorefrontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorefrontError::Validation(e) => Some(e),
            StorefrontError::Config(e) => Some(e),
            StorefrontError::Catalog(e) => Some(e),
            StorefrontError::Internal(_) => None,
        }
    }
}

impl StorefrontError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            StorefrontError::Validation(_) => "VALIDATION_ERROR",
            StorefrontError::Config(_) => "CONFIG_ERROR",
            StorefrontError::Catalog(_) => "CATALOG_ERROR",
            StorefrontError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Field errors carried by this error, if it is a validation failure
    pub fn field_errors(&self) -> &[FieldValidationError] {
        match self {
            StorefrontError::Validation(ValidationError::FieldErrors(errors)) => errors,
            _ => &[],
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Every failing field, in form order
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for StorefrontError {
    fn from(err: ValidationError) -> Self {
        StorefrontError::Validation(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Configuration file not found
    FileNotFound { path: String },

    /// Failed to parse configuration
    ParseError { file: Option<String>, message: String },

    /// A value that parsed but is not usable
    InvalidValue { key: String, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::ParseError { file, message } => match file {
                Some(file) => write!(f, "Failed to parse '{}': {}", file, message),
                None => write!(f, "Failed to parse configuration: {}", message),
            },
            ConfigError::InvalidValue { key, message } => {
                write!(f, "Invalid configuration value for '{}': {}", key, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for StorefrontError {
    fn from(err: ConfigError) -> Self {
        StorefrontError::Config(err)
    }
}

// =============================================================================
// Catalog Errors
// =============================================================================

/// Load-time precondition failures of the seed catalog.
///
/// A catalog that loads is fully valid: ratings, price tiers and prices are
/// range-checked here so the listing engine never sees a malformed record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("rating {value} is outside 0.0..=5.0")]
    RatingOutOfRange { value: f64 },

    #[error("price tier {value} is outside 1..=3")]
    PriceTierOutOfRange { value: u8 },

    #[error("price '{value}' is not a valid amount")]
    InvalidPrice { value: String },

    #[error("duplicate slug '{slug}'")]
    DuplicateSlug { slug: String },

    #[error("dish '{dish}' references unknown restaurant '{restaurant}'")]
    UnknownRestaurant { dish: String, restaurant: String },

    #[error("cart references unknown dish '{slug}'")]
    UnknownDish { slug: String },
}

impl From<CatalogError> for StorefrontError {
    fn from(err: CatalogError) -> Self {
        StorefrontError::Catalog(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_yaml::Error> for StorefrontError {
    fn from(err: serde_yaml::Error) -> Self {
        StorefrontError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

/// Convert from anyhow::Error, keeping typed errors when possible
impl From<anyhow::Error> for StorefrontError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<StorefrontError>() {
            Ok(e) => e,
            Err(err) => match err.downcast::<CatalogError>() {
                Ok(e) => StorefrontError::Catalog(e),
                Err(err) => match err.downcast::<ConfigError>() {
                    Ok(e) => StorefrontError::Config(e),
                    Err(err) => StorefrontError::Internal(err.to_string()),
                },
            },
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for storefront operations
pub type StorefrontResult<T> = Result<T, StorefrontError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_multiple_fields() {
        let err = ValidationError::FieldErrors(vec![
            FieldValidationError::new("zipCode", "Invalid zip code format"),
            FieldValidationError::new("cardCvc", "Valid CVC (3 or 4 digits) is required."),
        ]);
        let display = err.to_string();
        assert!(display.contains("zipCode"));
        assert!(display.contains("cardCvc"));
    }

    #[test]
    fn test_field_errors_accessor() {
        let err: StorefrontError =
            ValidationError::FieldErrors(vec![FieldValidationError::new("email", "bad")]).into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.field_errors().len(), 1);

        let err = StorefrontError::Internal("boom".to_string());
        assert!(err.field_errors().is_empty());
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::RatingOutOfRange { value: 7.5 };
        assert!(err.to_string().contains("7.5"));

        let wrapped: StorefrontError = err.into();
        assert_eq!(wrapped.error_code(), "CATALOG_ERROR");
    }

    #[test]
    fn test_config_error() {
        let err = ConfigError::FileNotFound {
            path: "/etc/storefront.yaml".to_string(),
        };
        assert!(err.to_string().contains("/etc/storefront.yaml"));
    }

    #[test]
    fn test_from_anyhow_keeps_catalog_error() {
        let err = anyhow::Error::new(CatalogError::PriceTierOutOfRange { value: 9 });
        let converted: StorefrontError = err.into();
        assert!(matches!(
            converted,
            StorefrontError::Catalog(CatalogError::PriceTierOutOfRange { value: 9 })
        ));
    }

    #[test]
    fn test_from_serde_yaml_error() {
        let yaml_err = serde_yaml::from_str::<Vec<u32>>("{not: a list").unwrap_err();
        let err: StorefrontError = yaml_err.into();
        assert!(matches!(
            err,
            StorefrontError::Config(ConfigError::ParseError { .. })
        ));
    }
}
