//! Error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors raised by the chat store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No message carries the requested id.
    #[error("no message with id {0}")]
    UnknownMessage(u64),

    /// Stream progress was addressed to a user-authored message.
    #[error("message {0} was authored by the user")]
    NotAssistant(u64),
}

/// Errors raised while decoding stream events.
#[derive(Error, Debug)]
pub enum StreamEventError {
    /// The payload contained no event.
    #[error("empty event payload")]
    Empty,

    /// The payload was not a recognised event.
    #[error("malformed event payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors surfaced by HTTP handlers.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Request body could not be decoded.
    #[error(transparent)]
    Event(#[from] StreamEventError),
}

impl ServerError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::UnknownMessage(_)) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::NotAssistant(_)) => StatusCode::CONFLICT,
            Self::Event(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(name: "request.failed", status = %status, error = %self, "Request failed");
        (status, self.to_string()).into_response()
    }
}
