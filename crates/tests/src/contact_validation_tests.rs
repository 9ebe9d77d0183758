use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn test_empty_name_is_rejected_with_error_body() {
    let app = common::test_app();

    let body = serde_json::json!({
        "name": "",
        "email": "ana@example.com",
        "subject": "Orçamento",
        "message": "Olá!"
    });
    let (status, response) = common::post_json(&app, "/api/contact", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["error"], "Nome é obrigatório");
}

#[tokio::test]
async fn test_invalid_email_is_rejected_with_error_body() {
    let app = common::test_app();

    let body = serde_json::json!({
        "name": "Ana Silva",
        "email": "not-an-email",
        "subject": "Orçamento",
        "message": "Olá!"
    });
    let (status, response) = common::post_json(&app, "/api/contact", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["error"], "E-mail inválido");
}

#[tokio::test]
async fn test_empty_subject_is_rejected_with_error_body() {
    let app = common::test_app();

    let body = serde_json::json!({
        "name": "Ana Silva",
        "email": "ana@example.com",
        "subject": "",
        "message": "Olá!"
    });
    let (status, response) = common::post_json(&app, "/api/contact", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["error"], "Assunto é obrigatório");
}

#[tokio::test]
async fn test_empty_message_is_rejected_with_error_body() {
    let app = common::test_app();

    let body = serde_json::json!({
        "name": "Ana Silva",
        "email": "ana@example.com",
        "subject": "Orçamento",
        "message": ""
    });
    let (status, response) = common::post_json(&app, "/api/contact", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["error"], "Mensagem é obrigatória");
}

#[tokio::test]
async fn test_error_body_has_only_the_error_field() {
    let app = common::test_app();

    let body = serde_json::json!({
        "name": "Ana Silva",
        "email": "ana@example.com",
        "subject": "Orçamento",
        "message": ""
    });
    let (_, response) = common::post_json(&app, "/api/contact", &body.to_string()).await;

    let obj = response.as_object().expect("error body should be an object");
    assert_eq!(obj.len(), 1, "got: {response}");
    assert!(obj.contains_key("error"));
}
