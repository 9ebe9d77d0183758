use shared_types::ContactRequest;
use uuid::Uuid;

// --- Environment helpers ---

/// Read a required variable, loading `.env` first so local setups work
/// without exporting anything.
fn env_var(key: &str) -> Result<String, String> {
    let _ = dotenvy::dotenv();
    std::env::var(key).map_err(|_| format!("{key} is not configured"))
}

fn mailgun_api_key() -> Result<String, String> {
    env_var("MAILGUN_API_KEY")
}

fn mailgun_domain() -> Result<String, String> {
    env_var("MAILGUN_DOMAIN")
}

fn mailgun_from() -> Result<String, String> {
    match env_var("MAILGUN_FROM") {
        Ok(v) => Ok(v),
        Err(_) => Ok(format!("Contato <noreply@{}>", mailgun_domain()?)),
    }
}

/// Address that receives forwarded contact submissions.
fn contact_inbox() -> Result<String, String> {
    env_var("CONTACT_INBOX")
}

// --- Core email sending ---

#[tracing::instrument(skip(text_body))]
pub async fn send_email(to: &str, subject: &str, text_body: &str) -> Result<(), String> {
    let domain = mailgun_domain()?;
    let url = format!("https://api.mailgun.net/v3/{}/messages", domain);

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .basic_auth("api", Some(mailgun_api_key()?))
        .form(&[
            ("from", mailgun_from()?),
            ("to", to.to_string()),
            ("subject", subject.to_string()),
            ("text", text_body.to_string()),
        ])
        .send()
        .await
        .map_err(|e| format!("Mailgun request failed: {}", e))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("Mailgun API error ({}): {}", status, body));
    }

    tracing::info!(to = to, subject = subject, "Email sent successfully");
    Ok(())
}

// --- Contact forwarding ---

/// Forward a contact submission to the configured inbox. The reply-to
/// address in the body lets staff answer the sender directly.
pub async fn forward_contact(submission: &ContactRequest, submission_id: Uuid) -> Result<(), String> {
    let inbox = contact_inbox()?;
    let subject = format!("[Contato] {}", submission.subject);
    let body = contact_email_body(submission, submission_id);
    send_email(&inbox, &subject, &body).await
}

fn contact_email_body(submission: &ContactRequest, submission_id: Uuid) -> String {
    format!(
        "Nova mensagem de contato ({id})\n\n\
         Nome: {name}\n\
         E-mail: {email}\n\
         Assunto: {subject}\n\n\
         {message}\n",
        id = submission_id,
        name = submission.name,
        email = submission.email,
        subject = submission.subject,
        message = submission.message,
    )
}
