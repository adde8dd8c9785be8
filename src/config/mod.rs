//! Configuration loading and management

use crate::core::checkout::{CheckoutForm, CheckoutState};
use crate::core::error::ConfigError;
use crate::core::listing::ListingState;
use crate::core::query::{DEFAULT_PAGE_SIZE, SortKey};
use crate::core::service::{ImageKind, ImageRef, ImageResolver};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Listing page settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Cards per page
    pub page_size: usize,

    /// Sort applied when the page opens
    pub default_sort: SortKey,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: SortKey::default(),
        }
    }
}

/// Checkout settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    /// Country pre-filled in the address step
    pub default_country: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            default_country: crate::core::checkout::form::DEFAULT_COUNTRY.to_string(),
        }
    }
}

/// Fallback images for records without their own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub restaurant_placeholder: String,
    pub dish_placeholder: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            restaurant_placeholder: "https://via.placeholder.com/400x225?text=Restaurant+Image"
                .to_string(),
            dish_placeholder: "https://via.placeholder.com/400x225?text=Delicious+Dish".to_string(),
        }
    }
}

impl ImageResolver for ImageConfig {
    fn resolve(&self, url: Option<&str>, kind: ImageKind) -> ImageRef {
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => ImageRef {
                url: url.to_string(),
                placeholder: false,
            },
            None => {
                let fallback = match kind {
                    ImageKind::Restaurant => &self.restaurant_placeholder,
                    ImageKind::Dish => &self.dish_placeholder,
                };
                ImageRef {
                    url: fallback.clone(),
                    placeholder: true,
                }
            }
        }
    }
}

/// Complete storefront configuration
///
/// Every section and key is optional; missing ones take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub listing: ListingConfig,
    pub checkout: CheckoutConfig,
    pub images: ImageConfig,
}

impl StorefrontConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content).map_err(|message| ConfigError::ParseError {
            file: Some(path.display().to_string()),
            message,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config = Self::parse(yaml)
            .map_err(|message| ConfigError::ParseError { file: None, message })?;
        config.validate()?;
        Ok(config)
    }

    fn parse(yaml: &str) -> std::result::Result<Self, String> {
        // An empty document is the all-defaults configuration
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())
    }

    /// Reject values the state machines cannot work with
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.listing.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "listing.page_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.checkout.default_country.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "checkout.default_country".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize back to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self::default()
    }

    /// A fresh listing page state
    pub fn listing_state(&self) -> ListingState {
        ListingState::new(self.listing.page_size, self.listing.default_sort)
    }

    /// Initial checkout values
    pub fn checkout_defaults(&self) -> CheckoutForm {
        CheckoutForm::with_country(self.checkout.default_country.clone())
    }

    /// A fresh checkout state
    pub fn checkout_state(&self) -> CheckoutState {
        CheckoutState::new(self.checkout_defaults())
    }
}
