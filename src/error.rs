use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Unprocessable(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::Unprocessable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg).into_response()
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}

/// Outcome of a booking attempt. The first four variants are business-rule
/// violations, expected in normal operation and surfaced verbatim to the client.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Class not found")]
    ClassNotFound,
    #[error("Cannot book past classes")]
    ClassInPast,
    #[error("User already booked this class")]
    DuplicateBooking,
    #[error("Class is fully booked")]
    ClassFull,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<BookingError> for ApiError {
    fn from(value: BookingError) -> Self {
        match value {
            BookingError::ClassNotFound => ApiError::NotFound(value.to_string()),
            BookingError::ClassInPast | BookingError::DuplicateBooking | BookingError::ClassFull => {
                ApiError::BadRequest(value.to_string())
            }
            BookingError::Database(err) => {
                error!("Database error: {err}");
                ApiError::Internal("Internal server error".into())
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        error!("Database error: {err}");
        ApiError::Internal("Internal server error".into())
    }
}
