use reqwest::StatusCode;
use thiserror::Error;

/// The one message users see for any failed load, regardless of cause.
pub const LOAD_FAILURE_MESSAGE: &str = "Error loading assignments. Please try again later.";

#[derive(Debug, Error)]
pub enum FetchError {
    /// The owning view tore down before the response settled.
    #[error("weekly plan request cancelled before completion")]
    Cancelled,
    #[error("weekly plan request failed in transport: {source}")]
    Transport { source: reqwest::Error },
    #[error("weekly plan endpoint answered with status {status}")]
    UnexpectedStatus { status: StatusCode },
    #[error("weekly plan response body could not be decoded: {source}")]
    Decode { source: reqwest::Error },
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Generic text for display. The typed cause only goes to the logs;
    /// callers must not surface it to users.
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILURE_MESSAGE
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode { source: err }
        } else if let Some(status) = err.status() {
            Self::UnexpectedStatus { status }
        } else {
            Self::Transport { source: err }
        }
    }
}
