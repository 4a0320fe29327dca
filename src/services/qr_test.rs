use super::*;
use time::Date;
use time::Month;

fn fixed_now() -> OffsetDateTime {
    Date::from_calendar_date(2025, Month::March, 14)
        .expect("valid date")
        .with_hms(9, 26, 53)
        .expect("valid time")
        .assume_utc()
}

#[test]
fn empty_request_gets_time_based_event_id() {
    let config = ServerConfig::default();
    let payload = build_payload(&config, QrRequest::default(), fixed_now()).expect("payload");

    assert!(payload.event_id.starts_with("event-"));
    let digits = &payload.event_id["event-".len()..];
    assert!(!digits.is_empty());
    assert!(digits.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn empty_request_gets_default_location_and_type() {
    let config = ServerConfig::default();
    let payload = build_payload(&config, QrRequest::default(), fixed_now()).expect("payload");

    assert_eq!(payload.location, "https://9lmnts-eventos.vercel.app");
    assert_eq!(payload.event_type, "unknown");
    assert!(payload.features.is_empty());
}

#[test]
fn timestamps_default_to_now_rfc3339() {
    let config = ServerConfig::default();
    let payload = build_payload(&config, QrRequest::default(), fixed_now()).expect("payload");

    assert_eq!(payload.timestamp, "2025-03-14T09:26:53Z");
    assert_eq!(payload.generated_at, "2025-03-14T09:26:53Z");
}

#[test]
fn explicit_fields_are_preserved() {
    let config = ServerConfig::default();
    let req = QrRequest {
        event_id: Some("launch-party".to_owned()),
        event_type: Some("launch".to_owned()),
        timestamp: Some("2025-01-01T00:00:00Z".to_owned()),
        location: Some("https://example.com/venue".to_owned()),
        features: Some(vec!["vip".to_owned(), "checkin".to_owned()]),
    };
    let payload = build_payload(&config, req, fixed_now()).expect("payload");

    assert_eq!(payload.event_id, "launch-party");
    assert_eq!(payload.event_type, "launch");
    assert_eq!(payload.timestamp, "2025-01-01T00:00:00Z");
    assert_eq!(payload.location, "https://example.com/venue");
    assert_eq!(payload.features, vec!["vip".to_owned(), "checkin".to_owned()]);
    // generatedAt always reflects the generation time, not the event time.
    assert_eq!(payload.generated_at, "2025-03-14T09:26:53Z");
}

#[test]
fn payload_serializes_wire_names_in_order() {
    let config = ServerConfig::default();
    let payload = build_payload(&config, QrRequest::default(), fixed_now()).expect("payload");
    let json = serde_json::to_string(&payload).expect("serialize");

    let event_id_at = json.find("\"eventId\"").expect("eventId");
    let event_type_at = json.find("\"eventType\"").expect("eventType");
    let generated_at = json.find("\"generatedAt\"").expect("generatedAt");
    assert!(event_id_at < event_type_at);
    assert!(event_type_at < generated_at);
}

#[test]
fn image_url_embeds_encoded_json() {
    let config = ServerConfig::default();
    let payload = build_payload(&config, QrRequest::default(), fixed_now()).expect("payload");
    let url = qr_image_url(&config.qr_image_endpoint, &payload).expect("url");

    assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=200x200&data="));
    assert!(url.contains("%7B%22eventId%22"));
    assert!(!url.contains('{'));
}

#[test]
fn image_url_round_trips_payload() {
    let config = ServerConfig::default();
    let payload = build_payload(&config, QrRequest::default(), fixed_now()).expect("payload");
    let url = qr_image_url(&config.qr_image_endpoint, &payload).expect("url");

    let encoded = url.split("data=").nth(1).expect("data parameter");
    let decoded = urlencoding::decode(encoded).expect("decode");
    let restored: QrPayload = serde_json::from_str(&decoded).expect("parse");
    assert_eq!(restored, payload);
}

#[test]
fn request_accepts_camel_case_body() {
    let req: QrRequest =
        serde_json::from_str(r#"{"eventId":"e-1","eventType":"demo","features":["a"]}"#).expect("deserialize");
    assert_eq!(req.event_id.as_deref(), Some("e-1"));
    assert_eq!(req.event_type.as_deref(), Some("demo"));
    assert_eq!(req.features.as_deref(), Some(["a".to_owned()].as_slice()));
}
