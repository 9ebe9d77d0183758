use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn test_rate_limit_returns_429_when_exceeded() {
    // Allow only 2 requests per 60s window
    let app = common::test_app_rate_limited(2);
    let body = common::valid_submission().to_string();

    let (s1, _) = common::post_json_from(&app, "/api/contact", &body, "1.2.3.4").await;
    assert_eq!(s1, StatusCode::OK, "First request should pass");

    let (s2, _) = common::post_json_from(&app, "/api/contact", &body, "1.2.3.4").await;
    assert_eq!(s2, StatusCode::OK, "Second request should pass");

    let (s3, response) = common::post_json_from(&app, "/api/contact", &body, "1.2.3.4").await;
    assert_eq!(
        s3,
        StatusCode::TOO_MANY_REQUESTS,
        "Third request should be rate limited"
    );
    assert!(
        response["error"].as_str().unwrap_or_default().len() > 0,
        "429 body should carry an error message, got: {response}"
    );
}

#[tokio::test]
async fn test_rate_limit_separate_clients() {
    // Allow only 1 request per client
    let app = common::test_app_rate_limited(1);
    let body = common::valid_submission().to_string();

    let (s1, _) = common::post_json_from(&app, "/api/contact", &body, "1.2.3.4").await;
    assert_eq!(s1, StatusCode::OK);

    let (s2, _) = common::post_json_from(&app, "/api/contact", &body, "1.2.3.4").await;
    assert_eq!(s2, StatusCode::TOO_MANY_REQUESTS);

    // A different client still passes
    let (s3, _) = common::post_json_from(&app, "/api/contact", &body, "5.6.7.8").await;
    assert_eq!(s3, StatusCode::OK);
}

#[tokio::test]
async fn test_health_is_not_limited_by_the_contact_quota() {
    // Allow 1 contact request, then spend it
    let app = common::test_app_rate_limited(1);
    let body = common::valid_submission().to_string();

    let (s1, _) = common::post_json_from(&app, "/api/contact", &body, "1.2.3.4").await;
    assert_eq!(s1, StatusCode::OK);

    let (s2, _) = common::post_json_from(&app, "/api/contact", &body, "1.2.3.4").await;
    assert_eq!(s2, StatusCode::TOO_MANY_REQUESTS);

    // The limiter guards the contact route only, so the same client can
    // still reach the health check
    let (s3, response) = common::get_from(&app, "/health", "1.2.3.4").await;
    assert_eq!(s3, StatusCode::OK, "health should not be limited: {response}");
    assert_eq!(response["status"], "ok");
}

#[tokio::test]
async fn test_unlimited_app_accepts_repeated_submissions() {
    let app = common::test_app();
    let body = common::valid_submission().to_string();

    for _ in 0..5 {
        let (status, _) = common::post_json(&app, "/api/contact", &body).await;
        assert_eq!(status, StatusCode::OK);
    }
}
