use super::*;

fn api_error(status: u16) -> CatalogError {
    CatalogError::Api {
        status,
        message: "error".to_string(),
    }
}

#[test]
fn test_is_retryable_server_errors() {
    assert!(api_error(500).is_retryable());
    assert!(api_error(502).is_retryable());
    assert!(api_error(503).is_retryable());
}

#[test]
fn test_is_retryable_rate_limit() {
    assert!(api_error(429).is_retryable());
}

#[test]
fn test_is_not_retryable_client_errors() {
    assert!(!api_error(400).is_retryable());
    assert!(!api_error(401).is_retryable());
    assert!(!api_error(404).is_retryable());
}

#[test]
fn test_is_not_retryable_local_errors() {
    assert!(!CatalogError::ProductNotFound(1).is_retryable());
    assert!(!CatalogError::InvalidArgument("x".into()).is_retryable());
}

#[test]
fn test_code_for_api_status() {
    assert_eq!(api_error(429).code(), ErrorCode::Api001);
    assert_eq!(api_error(401).code(), ErrorCode::Api002);
    assert_eq!(api_error(403).code(), ErrorCode::Api002);
    assert_eq!(api_error(404).code(), ErrorCode::Api003);
    assert_eq!(api_error(500).code(), ErrorCode::Api004);
    assert_eq!(api_error(400).code(), ErrorCode::Api005);
}

#[test]
fn test_code_for_local_errors() {
    assert_eq!(CatalogError::ProductNotFound(7).code(), ErrorCode::Cat001);
    assert_eq!(
        CatalogError::Config("bad".into()).code(),
        ErrorCode::Cfg001
    );
    assert_eq!(
        CatalogError::InvalidArgument("bad".into()).code(),
        ErrorCode::Val001
    );
}

#[test]
fn test_code_for_io_not_found() {
    let err = CatalogError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
    assert_eq!(err.code(), ErrorCode::Io001);
}

#[test]
fn test_display_api_error() {
    assert_eq!(
        api_error(503).to_string(),
        "Product API error: error (status: 503)"
    );
}

#[test]
fn test_display_product_not_found() {
    assert_eq!(
        CatalogError::ProductNotFound(42).to_string(),
        "Product not found: 42"
    );
}
