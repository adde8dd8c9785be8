//! Integration tests for configuration loading

use std::io::Write;
use storefront::prelude::*;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "listing:\n  page_size: 4\n  default_sort: delivery_time_asc\nimages:\n  dish_placeholder: /img/dish.png"
    )
    .unwrap();

    let config = StorefrontConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.listing.page_size, 4);
    assert_eq!(config.listing.default_sort, SortKey::DeliveryTimeAsc);
    assert_eq!(config.images.dish_placeholder, "/img/dish.png");
    assert_eq!(
        config.images.restaurant_placeholder,
        ImageConfig::default().restaurant_placeholder
    );
    assert_eq!(config.checkout.default_country, "USA");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = StorefrontConfig::from_yaml_file(dir.path().join("storefront.yaml")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::FileNotFound { .. })
    ));
}

#[test]
fn test_parse_error_names_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "listing: [not, a, map]").unwrap();

    let err = StorefrontConfig::from_yaml_file(file.path()).unwrap_err();
    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::ParseError { file: Some(path), .. }) => {
            assert!(path.ends_with(&*file.path().file_name().unwrap().to_string_lossy()));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_yaml_round_trip() {
    let config = StorefrontConfig::from_yaml_str("listing:\n  page_size: 6\n").unwrap();
    let yaml = config.to_yaml().unwrap();
    let back = StorefrontConfig::from_yaml_str(&yaml).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_page_size_drives_listing() {
    let catalog = InMemoryCatalog::seeded().unwrap();
    let config = StorefrontConfig::from_yaml_str("listing:\n  page_size: 5\n").unwrap();

    let view = config.listing_state().view(catalog.restaurants());
    assert_eq!(view.data.len(), 5);
    assert_eq!(view.pagination.total_pages, 3);
}

#[test]
fn test_errors_convert_to_storefront_error() {
    let err = StorefrontConfig::from_yaml_str("listing:\n  page_size: 0\n").unwrap_err();
    let err: StorefrontError = err.into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
