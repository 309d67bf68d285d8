//! Requests sent through the assembled `/api` router.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use entity::prelude::Campaign;
use influencehub::model::{api::ErrorDto, page::Page};
use influencehub_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{app, json_body};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

/// Expected: query parameters reach the paginated handler
#[tokio::test]
async fn campaigns_route_reads_page_query() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campaigns(5).build()?;

    let resp = app(&test)
        .oneshot(get("/api/campaigns?page=2&limit=2"))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
    let page: Page<Campaign> = json_body(resp).await;
    assert_eq!(page.page, 2);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 5);

    Ok(())
}

/// Expected: errors are JSON objects with an `error` field
#[tokio::test]
async fn unknown_product_is_json_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let resp = app(&test)
        .oneshot(get("/api/products/404"))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Product not found");

    Ok(())
}

/// Expected: JSON bodies are accepted on POST routes
#[tokio::test]
async fn wallet_payout_route_accepts_json() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wallet(factory::wallet(20.0)).build()?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/wallet/payouts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"amount": 10}"#))
        .expect("request should build");

    let resp = app(&test).oneshot(request).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Minimum payout amount is $50");

    Ok(())
}

/// Expected: the OpenAPI document is served next to Swagger UI
#[tokio::test]
async fn openapi_document_is_served() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let resp = app(&test)
        .oneshot(get("/api/docs/openapi.json"))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = json_body(resp).await;
    assert!(doc["paths"].get("/api/campaigns").is_some());

    Ok(())
}
