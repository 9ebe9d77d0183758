use axum::Json;
use validator::Validate;

use shared_types::{AppError, ContactRequest, ContactResponse};

/// Acknowledgement returned on every accepted submission. The form has its
/// own fallback for responses that omit `message`.
pub const CONTACT_ACK: &str = "Mensagem enviada com sucesso! Retornaremos em breve.";

/// Receive a contact form submission.
///
/// Validates the four fields, forwards the submission by email when the
/// `mailgun` flag is on (fire-and-forget — delivery problems are logged,
/// never surfaced to the sender), and acknowledges with a fixed message.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Submission accepted", body = ContactResponse),
        (status = 422, description = "Validation failed", body = shared_types::ErrorBody),
        (status = 429, description = "Rate limited", body = shared_types::ErrorBody)
    ),
    tag = "contact"
)]
#[tracing::instrument(skip_all)]
pub async fn submit_contact(
    Json(body): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    body.validate().map_err(AppError::from)?;

    let submission_id = uuid::Uuid::new_v4();
    tracing::info!(
        %submission_id,
        from = %body.email,
        subject = %body.subject,
        "Contact submission received"
    );

    if crate::config::feature_flags().mailgun {
        let submission = body.clone();
        tokio::spawn(async move {
            if let Err(e) = crate::mailer::forward_contact(&submission, submission_id).await {
                tracing::error!(error = %e, %submission_id, "Failed to forward contact submission");
            }
        });
    }

    Ok(Json(ContactResponse {
        message: CONTACT_ACK.to_string(),
    }))
}
