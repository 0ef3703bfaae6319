use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Every user-visible failure of the booking API. None of these is fatal to the
/// process; each request either fully succeeds or fails with one of these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing required fields.")]
    MissingFields,

    #[error("Client name must match your registered name.")]
    IdentityMismatch,

    #[error("Class not found.")]
    ClassNotFound,

    #[error("No available slots.")]
    NoAvailableSlots,

    #[error("Passing 'email' in query params is not allowed.")]
    Forbidden,

    #[error("Invalid or missing credentials.")]
    Unauthorized,

    /// The only retryable kind. The caller decides whether to retry; we never do.
    #[error("Storage temporarily unavailable.")]
    StorageUnavailable(#[from] sqlx::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::MissingFields | Error::NoAvailableSlots => StatusCode::BAD_REQUEST,
            Error::IdentityMismatch | Error::Forbidden => StatusCode::FORBIDDEN,
            Error::ClassNotFound => StatusCode::NOT_FOUND,
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::StorageUnavailable(ref e) => {
                tracing::error!("storage error: {:?}", e);
                StatusCode::SERVICE_UNAVAILABLE
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
