use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// The four-field contact record. Doubles as the form state on the client
/// (field-by-field mutation while the user types) and as the JSON request
/// body sent to `POST /api/contact`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ContactRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Nome é obrigatório"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "E-mail inválido"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Assunto é obrigatório"))
    )]
    pub subject: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Mensagem é obrigatória"))
    )]
    pub message: String,
}

impl ContactRequest {
    /// Keyed update: replace only the field matching `field`, leaving the
    /// other three untouched. Unknown field names are ignored.
    pub fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "subject" => self.subject = value,
            "message" => self.message = value,
            _ => {}
        }
    }

    /// Reset every field to empty. Called only after a successful
    /// submission — failed attempts keep the user's input for correction.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }
}

/// Response body for an accepted contact submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactResponse {
    pub message: String,
}
