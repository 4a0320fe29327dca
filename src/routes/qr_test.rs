use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use crate::routes::api_routes;
use crate::state::test_helpers::test_app_state;

async fn post_json(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let app = api_routes(test_app_state());
    let request = Request::builder()
        .method("POST")
        .uri("/api/qr/generate")
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
async fn empty_body_gets_generated_defaults() {
    let (status, body) = post_json(serde_json::json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let event_id = body["data"]["eventId"].as_str().expect("eventId");
    assert!(event_id.starts_with("event-"));
    assert!(event_id["event-".len()..].chars().all(|c| c.is_ascii_digit()));

    assert_eq!(body["data"]["location"], "https://9lmnts-eventos.vercel.app");
    assert_eq!(body["data"]["eventType"], "unknown");
    assert_eq!(body["data"]["features"], serde_json::json!([]));
}

#[tokio::test]
async fn qr_code_url_points_at_image_endpoint() {
    let (status, body) = post_json(serde_json::json!({ "eventId": "launch-1" })).await;

    assert_eq!(status, StatusCode::OK);
    let url = body["qrCode"].as_str().expect("qrCode");
    assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=200x200&data="));
    assert!(url.contains("launch-1"));
    assert_eq!(body["data"]["eventId"], "launch-1");
}

#[tokio::test]
async fn get_returns_405_with_json_error() {
    let app = api_routes(test_app_state());
    let request = Request::builder()
        .method("GET")
        .uri("/api/qr/generate")
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
        .uri("/api/qr/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json at all"))
        .expect("request");
    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(json["error"], "Failed to generate QR code");
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(test_app_state());
    let request = Request::builder()
        .method("GET")
        .uri("/healthz")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}
