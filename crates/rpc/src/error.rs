use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failure raised by an [`AttestationProvider`](crate::provider::AttestationProvider).
///
/// The kind is decided at the error's origin, so callers classify failures by
/// variant instead of walking a cause chain.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request was well formed but inconsistent with the current chain
    /// state, e.g. a committee index beyond the committee count
    #[error("{0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Error channel of the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// A legitimate absence, surfaced as 404 with an empty body
    #[error("not found")]
    NotFound,

    /// Anything unexpected. Handed to the generic failure boundary rather
    /// than translated into a client error
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::InvalidParameter(message) => ApiError::BadRequest(message),
            ProviderError::Internal(cause) => ApiError::Internal(cause),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal(cause) => {
                error!("request failed: {cause:?}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
