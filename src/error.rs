use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message shown to users who submit a blank ingredient list
pub const EMPTY_QUERY_MESSAGE: &str = "please enter at least one ingredient";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog load error: {0}")]
    DataLoad(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        let position = err
            .position()
            .map(|pos| format!(" (line {})", pos.line()))
            .unwrap_or_default();
        Error::DataLoad(format!("{err}{position}"))
    }
}

impl Error {
    /// Get a sanitized error message safe for logging
    pub fn log_safe(&self) -> String {
        match self {
            Error::DataLoad(msg) => format!("Catalog load error: {msg}"),
            Error::InvalidQuery(msg) => format!("Invalid query: {msg}"),
            Error::Config(msg) => format!("Configuration error: {msg}"),
            Error::Internal(msg) => format!("Internal error: {msg}"),
        }
    }

    /// Whether the caller can fix this by changing its input
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::InvalidQuery(_))
    }
}

// Implement IntoResponse for API error handling
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Error::InvalidQuery(msg) => {
                tracing::debug!("Rejected query: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            _ => {
                tracing::error!("Request error: {}", self.log_safe());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
