use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use crate::routes::api_routes;
use crate::state::test_helpers::test_app_state;

async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let app = api_routes(test_app_state());
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    let response = app.oneshot(request).await.expect("response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}

#[tokio::test]
async fn valid_request_returns_redirect_url() {
    let (status, body) = post_json(
        "/api/payment/process",
        serde_json::json!({
            "amount": "10.00",
            "currency": "USD",
            "description": "Test",
            "returnUrl": "https://a",
            "cancelUrl": "https://b"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let url = body["paymentUrl"].as_str().expect("paymentUrl");
    assert!(url.contains("cmd=_xclick"));
    assert!(url.contains("amount=10.00"));
    assert!(url.contains("currency_code=USD"));
    assert_eq!(body["amount"], "10.00");
    assert_eq!(body["currency"], "USD");
    assert_eq!(body["description"], "Test");
    assert_eq!(body["businessEmail"], "darnley@9lmnts.com");
}

#[tokio::test]
async fn missing_amount_returns_400() {
    let (status, body) = post_json(
        "/api/payment/process",
        serde_json::json!({ "currency": "USD", "description": "Test" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields: amount, currency, description");
}

#[tokio::test]
async fn missing_currency_returns_400() {
    let (status, _) = post_json(
        "/api/payment/process",
        serde_json::json!({ "amount": "10.00", "description": "Test" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_description_returns_400() {
    let (status, _) = post_json(
        "/api/payment/process",
        serde_json::json!({ "amount": "10.00", "currency": "USD", "description": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_returns_405_with_json_error() {
    let app = api_routes(test_app_state());
    let request = Request::builder()
        .method("GET")
        .uri("/api/payment/process")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(json["error"], "Method not allowed");
}

#[tokio::test]
async fn malformed_body_returns_generic_500() {
    let app = api_routes(test_app_state());
    let request = Request::builder()
        .method("POST")
        .uri("/api/payment/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("request");
    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(json["error"], "Failed to process payment");
}
