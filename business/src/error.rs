use thiserror::Error;

use crate::http::HttpError;

/// Errors surfaced by the users API.
///
/// The store keeps the `Display` form of these in its `error` field and hands
/// the value itself back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsersError {
    #[error("{0}")]
    Transport(String),

    #[error(
        "API returned status: {status}{}",
        .message.as_deref().map(|m| format!(" ({m})")).unwrap_or_default()
    )]
    Status { status: u16, message: Option<String> },

    #[error("Failed to parse {what}: {reason}")]
    Decode { what: &'static str, reason: String },

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl UsersError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend answers unknown ids with 404; nothing is checked client-side.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<HttpError> for UsersError {
    fn from(err: HttpError) -> Self {
        Self::Transport(err.to_string())
    }
}

/// A typed API result.
pub type ApiResult<T> = Result<T, UsersError>;
