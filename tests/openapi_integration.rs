// tests/openapi_integration.rs
use axum::http::StatusCode;
use codepulse::presentation::http::openapi::OPENAPI_JSON_PATH;
use tower::util::ServiceExt as _;

mod support;

#[tokio::test]
async fn openapi_document_is_served_and_lists_category_endpoints() {
    let app = support::make_test_router();
    let resp = app.oneshot(support::get(OPENAPI_JSON_PATH)).await.unwrap();

    let (status, body) = support::read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "CodePulse API");

    let paths = body["paths"].as_object().expect("paths object");
    assert!(paths["/api/categories"].get("post").is_some());
    assert!(paths["/api/categories"].get("get").is_some());
    assert!(paths["/api/categories/{id}"].get("get").is_some());

    let schemas = body["components"]["schemas"]
        .as_object()
        .expect("schemas object");
    assert!(schemas.contains_key("CreateCategoryRequest"));
    assert!(schemas["CategoryDto"]["properties"]
        .get("urlHandle")
        .is_some());
}

#[tokio::test]
async fn root_redirects_to_docs() {
    let app = support::make_test_router();
    let resp = app.oneshot(support::get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(resp.headers()["location"], "/docs");
}
