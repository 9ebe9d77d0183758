/// Outcome of the most recent submit attempt.
///
/// A single mutually exclusive slot: the form can never show a success and
/// an error message at the same time, and every new submit attempt
/// overwrites whatever was here before.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    /// No attempt yet, or an attempt currently in flight.
    #[default]
    Idle,
    Success(String),
    Error(String),
}

impl SubmitStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmitStatus::Idle)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitStatus::Success(_))
    }

    /// The display message, if an attempt has resolved.
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitStatus::Idle => None,
            SubmitStatus::Success(msg) | SubmitStatus::Error(msg) => Some(msg),
        }
    }
}
