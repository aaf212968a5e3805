use super::*;
use serial_test::serial;

#[test]
#[serial]
fn test_get_existing_var() {
    std::env::set_var("STOREFRONT_TEST_VAR", "value");
    assert_eq!(EnvVar::get("STOREFRONT_TEST_VAR"), Some("value".to_string()));
    std::env::remove_var("STOREFRONT_TEST_VAR");
}

#[test]
#[serial]
fn test_get_blank_var() {
    std::env::set_var("STOREFRONT_TEST_BLANK", "  ");
    assert_eq!(EnvVar::get("STOREFRONT_TEST_BLANK"), None);
    std::env::remove_var("STOREFRONT_TEST_BLANK");
}

#[test]
fn test_get_nonexistent_var() {
    assert_eq!(EnvVar::get("STOREFRONT_NONEXISTENT_12345"), None);
}
