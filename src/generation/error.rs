//! Generation failure taxonomy

use thiserror::Error;

/// Why a generation attempt produced no form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Credentials or client dependency missing; raised before any network I/O
    #[error("Generation is unavailable: {0}")]
    ClientUnavailable(String),

    /// Transport or API-level failure during the request
    #[error("Generation request failed: {0}")]
    RequestFailed(String),
}

impl GenerationError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::ClientUnavailable(_))
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        let detail = if err.is_connect() {
            format!("could not connect ({err})")
        } else if err.is_decode() {
            format!("malformed response ({err})")
        } else {
            err.to_string()
        };
        Self::RequestFailed(detail)
    }
}
