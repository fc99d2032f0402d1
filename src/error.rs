use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body returned whenever an item lookup fails and the policy reports it.
pub const COMMENT_NOT_FOUND_MESSAGE: &str = "Comment not found";

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("no comment id left after {0}")]
    IdSpaceExhausted(i64),
}

impl AppError {
    pub fn comment_not_found() -> Self {
        Self::NotFound(COMMENT_NOT_FOUND_MESSAGE.to_string())
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::IdSpaceExhausted(_) => StatusCode::CONFLICT,
        };

        // `String` responds as text/plain; utf-8.
        (status, self.to_string()).into_response()
    }
}
