use super::*;
use crate::catalog::CompanyId;
use crate::query::{Action, SortDirection, SortKey};
use mockito::Matcher;

const BODY: &str = r#"{
    "products": [
        {"id": 3, "name": "Shirt", "price": 50, "category_id": 2, "company_id": 1},
        {"id": 4, "name": "Shoes", "price": 80, "category_id": 2}
    ],
    "total_count": 2
}"#;

fn source(server: &mockito::Server, auth: AuthProvider) -> RemoteSource {
    RemoteSource::new(
        server.url(),
        &HttpConfig::default(),
        auth,
        CategoryDirectory::default(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_query_sends_mapped_params() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", PRODUCTS_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("category".into(), "2".into()),
            Matcher::UrlEncoded("company".into(), "1".into()),
            Matcher::UrlEncoded("search".into(), "sh".into()),
            Matcher::UrlEncoded("pagesize".into(), "10".into()),
            Matcher::UrlEncoded("offset".into(), "0".into()),
            Matcher::UrlEncoded("minprice".into(), "40".into()),
            Matcher::UrlEncoded("maxprice".into(), "90".into()),
            Matcher::UrlEncoded("sort".into(), "desc".into()),
            Matcher::UrlEncoded("sortby".into(), "name".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(BODY)
        .create_async()
        .await;

    let filter = FilterState::default()
        .apply(Action::ToggleCategory("Clothing".into()))
        .apply(Action::ToggleCompany(CompanyId(1)))
        .apply(Action::SetPriceRange {
            min: 40.0,
            max: 90.0,
        })
        .apply(Action::SetSort {
            key: SortKey::Title,
            direction: SortDirection::Desc,
        })
        .apply(Action::SetSearchTerm("sh".into()));

    let result = source(&server, AuthProvider::default())
        .query(&filter)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.total_count, 2);
    let titles: Vec<_> = result.items.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Shirt", "Shoes"]);
    assert_eq!(result.items[0].category, "Clothing");
}

#[tokio::test]
async fn test_query_attaches_session_cookie() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", PRODUCTS_PATH)
        .match_query(Matcher::Any)
        .match_header("cookie", "token=session-123")
        .with_status(200)
        .with_body(r#"{"products": [], "total_count": 0}"#)
        .create_async()
        .await;

    let auth = AuthProvider::default().with_session_token("session-123");
    let result = source(&server, auth)
        .query(&FilterState::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(result.items.is_empty());
}

#[tokio::test]
async fn test_query_offset_follows_page() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", PRODUCTS_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pagesize".into(), "10".into()),
            Matcher::UrlEncoded("offset".into(), "20".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"products": [], "total_count": 25}"#)
        .create_async()
        .await;

    let filter = FilterState::default().apply(Action::SetPage(2));
    let result = source(&server, AuthProvider::default())
        .query(&filter)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.total_count, 25);
}

#[tokio::test]
async fn test_open_ended_price_range_sends_max_sentinel() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", PRODUCTS_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("minprice".into(), "50".into()),
            Matcher::UrlEncoded("maxprice".into(), "1000000000000".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"products": [], "total_count": 0}"#)
        .create_async()
        .await;

    let filter = FilterState::default().apply(Action::SetMinPrice(50.0));
    source(&server, AuthProvider::default())
        .query(&filter)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", PRODUCTS_PATH)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"code": 500, "type": "InternalError", "message": "database unavailable"}"#)
        .create_async()
        .await;

    let err = source(&server, AuthProvider::default())
        .query(&FilterState::default())
        .await
        .unwrap_err();

    match err {
        CatalogError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "InternalError: database unavailable");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", PRODUCTS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = source(&server, AuthProvider::default())
        .query(&FilterState::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}

#[tokio::test]
async fn test_unknown_category_fails_before_request() {
    let server = mockito::Server::new_async().await;
    let filter = FilterState::default().apply(Action::ToggleCategory("Toys".into()));

    let err = source(&server, AuthProvider::default())
        .query(&filter)
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArgument(_)));
}

#[test]
fn test_empty_base_url_is_config_error() {
    let result = RemoteSource::new(
        "",
        &HttpConfig::default(),
        AuthProvider::default(),
        CategoryDirectory::default(),
    );
    assert!(matches!(result, Err(CatalogError::Config(_))));
}
