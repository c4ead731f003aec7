use thiserror::Error;

/// Message shown when a submission fails without a message from the backend
pub const GENERIC_SUBMIT_FAILURE: &str = "Échec de l'envoi.";
/// Message shown when an action needs a logged in freelancer
pub const SESSION_REQUIRED: &str = "Session expirée, veuillez vous reconnecter.";

/// All possible error types that may occur while the portal talks to the marketplace backend or
/// to the client-side session storage
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("{0}")]
    Validation(String),
    #[error("Request could not be completed\n{0}")]
    Network(String),
    #[error("Backend responded with status {status}{}", message_suffix(.message))]
    Backend {
        status: u16,
        message: Option<String>,
    },
    #[error("JSON decode error\n{0}")]
    Decode(#[from] serde_json::Error),
    #[error("Session storage error\n{0}")]
    Storage(String),
    #[error("No freelancer identity is stored for the current session")]
    MissingIdentity,
    #[error("No project is selected for an application")]
    NoProjectSelected,
}

/// Formats an optional backend message as a trailing line for [PortalError::Backend]
fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|message| format!("\n{message}"))
        .unwrap_or_default()
}

impl PortalError {
    /// Message to show the user when a submission fails. Validation messages and backend
    /// provided messages are shown verbatim, a missing session asks the user to log in again and
    /// everything else collapses to [GENERIC_SUBMIT_FAILURE].
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message)
            | Self::Backend {
                message: Some(message),
                ..
            } => message.clone(),
            Self::MissingIdentity => SESSION_REQUIRED.to_owned(),
            _ => GENERIC_SUBMIT_FAILURE.to_owned(),
        }
    }

    /// True if the error was raised locally before any request was sent
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::MissingIdentity | Self::NoProjectSelected
        )
    }
}

impl From<&str> for PortalError {
    fn from(value: &str) -> Self {
        Self::Validation(value.to_owned())
    }
}

impl From<String> for PortalError {
    fn from(value: String) -> Self {
        Self::Validation(value)
    }
}

/// Generic [Result][std::result::Result] type where the error is always [PortalError]
pub type PortalResult<T> = std::result::Result<T, PortalError>;
