use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn score_endpoint_returns_report() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/risk/score",
            json!({ "profile": guest_json(), "today": "2026-10-14" }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["user_id"], "guest-101");
    assert_eq!(body["score"], 100);
    assert_eq!(body["level"], "low");
    assert_eq!(body["level_label"], "Low Risk");
    assert_eq!(body["factors"][0]["name"], "Full ID Verification");
    assert_eq!(body["factors"][0]["impact"], "positive");
}

#[tokio::test]
async fn score_endpoint_rejects_missing_profile() {
    let response = router()
        .oneshot(post_json("/api/v1/risk/score", json!({})))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "no user profile supplied for screening");
}

#[tokio::test]
async fn eligibility_endpoint_blocks_minor_driver() {
    let mut profile = guest_json();
    profile["date_of_birth"] = json!("2006-01-01");

    let response = router()
        .oneshot(post_json(
            "/api/v1/bookings/eligibility",
            json!({
                "profile": profile,
                "vehicle": { "vehicle_id": "veh-1", "instant_book": true },
                "today": "2026-10-14"
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["eligible"], false);
    assert_eq!(body["can_instant_book"], false);
    assert_eq!(
        body["blocked_reason"],
        "You must be at least 21 years old to rent a vehicle"
    );
}

#[tokio::test]
async fn eligibility_endpoint_honours_vehicle_setting() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/bookings/eligibility",
            json!({
                "profile": guest_json(),
                "vehicle": { "vehicle_id": "veh-2", "instant_book": false },
                "today": "2026-10-14"
            }),
        ))
        .await
        .expect("router responds");

    let body = read_json_body(response).await;
    assert_eq!(body["eligible"], true);
    assert_eq!(body["can_instant_book"], false);
    assert_eq!(body["requires_approval"], true);
    assert!(body.get("blocked_reason").is_none());
}

#[tokio::test]
async fn eligibility_endpoint_maps_projection_errors() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/bookings/eligibility",
            json!({
                "profile": {
                    "role": "host",
                    "user_id": "host-9",
                    "member_since": "2022-02-01",
                    "verification": { "id_verified": true, "face_match_verified": true }
                },
                "vehicle": { "vehicle_id": "veh-3", "instant_book": true }
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("date of birth"));
}
