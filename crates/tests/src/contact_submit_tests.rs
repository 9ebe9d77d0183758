use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn test_submit_contact_success() {
    let app = common::test_app();

    let (status, response) = common::post_json(
        &app,
        "/api/contact",
        &common::valid_submission().to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response["message"],
        server::rest::contact::CONTACT_ACK,
        "Success body should carry the acknowledgement message"
    );
    assert!(
        response.get("error").is_none(),
        "Success body must not carry an error field"
    );
}

#[tokio::test]
async fn test_submit_contact_is_idempotent_for_identical_input() {
    let app = common::test_app();
    let body = common::valid_submission().to_string();

    let (s1, r1) = common::post_json(&app, "/api/contact", &body).await;
    let (s2, r2) = common::post_json(&app, "/api/contact", &body).await;

    assert_eq!(s1, StatusCode::OK);
    assert_eq!(s2, StatusCode::OK);
    assert_eq!(r1, r2, "Identical submissions should produce identical responses");
}

#[tokio::test]
async fn test_submit_contact_rejects_malformed_json() {
    let app = common::test_app();

    let (status, _) = common::post_json(&app, "/api/contact", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_contact_rejects_missing_fields() {
    let app = common::test_app();

    let body = serde_json::json!({"name": "Ana"});
    let (status, _) = common::post_json(&app, "/api/contact", &body.to_string()).await;

    // Serde rejects the body before validation runs
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = common::test_app();

    let (status, _) = common::post_json(&app, "/api/unknown", "{}").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
