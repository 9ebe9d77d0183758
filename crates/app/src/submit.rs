//! Transport and response interpretation for the contact form.
//!
//! Everything here folds into a [`SubmitStatus`]: transport failures,
//! non-2xx responses and undecodable bodies all become user-visible
//! status text, never a panic or a propagated error.

use serde_json::Value;
use shared_types::{ContactRequest, SubmitStatus};

/// Fixed endpoint the form posts to.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Fallback shown when a 2xx response carries no `message` field.
pub const DEFAULT_SUCCESS: &str = "Mensagem enviada com sucesso!";

/// Fallback shown when a non-2xx response carries no `error` field.
pub const DEFAULT_ERROR: &str = "Erro ao enviar mensagem. Tente novamente.";

/// Shown when the request never completes, or the body is not JSON.
pub const CONNECTION_ERROR: &str = "Erro de conexão. Verifique sua internet e tente novamente.";

/// Map an HTTP outcome plus untyped JSON body to the user-visible status.
///
/// The body shape is never assumed: missing or mistyped fields fall back
/// to the fixed strings.
pub fn interpret_response(ok: bool, body: &Value) -> SubmitStatus {
    if ok {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_SUCCESS);
        SubmitStatus::Success(message.to_string())
    } else {
        let error = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ERROR);
        SubmitStatus::Error(error.to_string())
    }
}

/// POST the form as JSON to the contact endpoint.
///
/// In the browser the endpoint is resolved against the page origin; on
/// native targets it is joined to `APP_BASE_URL` (default
/// `http://localhost:8080`).
#[cfg(target_arch = "wasm32")]
pub async fn send_contact(form: &ContactRequest) -> SubmitStatus {
    use gloo_net::http::Request;

    let request = match Request::post(CONTACT_ENDPOINT).json(form) {
        Ok(r) => r,
        Err(_) => return SubmitStatus::Error(CONNECTION_ERROR.to_string()),
    };

    let response = match request.send().await {
        Ok(r) => r,
        Err(_) => return SubmitStatus::Error(CONNECTION_ERROR.to_string()),
    };

    let ok = response.ok();
    match response.json::<Value>().await {
        Ok(body) => interpret_response(ok, &body),
        // A non-JSON body is folded into the connectivity failure path.
        Err(_) => SubmitStatus::Error(CONNECTION_ERROR.to_string()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn send_contact(form: &ContactRequest) -> SubmitStatus {
    let base =
        std::env::var("APP_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    send_contact_to(&format!("{base}{CONTACT_ENDPOINT}"), form).await
}

/// Same as [`send_contact`] but against an explicit URL. Tests use this to
/// target a bound listener.
#[cfg(not(target_arch = "wasm32"))]
pub async fn send_contact_to(url: &str, form: &ContactRequest) -> SubmitStatus {
    let response = match reqwest::Client::new().post(url).json(form).send().await {
        Ok(r) => r,
        Err(_) => return SubmitStatus::Error(CONNECTION_ERROR.to_string()),
    };

    let ok = response.status().is_success();
    match response.json::<Value>().await {
        Ok(body) => interpret_response(ok, &body),
        // A non-JSON body is folded into the connectivity failure path.
        Err(_) => SubmitStatus::Error(CONNECTION_ERROR.to_string()),
    }
}
