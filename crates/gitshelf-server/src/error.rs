//! Error handling for the API server

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gitshelf::CatalogError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// API error types
///
/// The Display strings double as the client-facing `error` messages, so
/// they are part of the wire contract.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing params in the request")]
    MissingFields,

    #[error("The field techs must have a valid array")]
    InvalidTechs,

    #[error("The field url must have a valid url")]
    InvalidUrl,

    #[error("You must provide a valid id")]
    InvalidId,

    #[error("Repository not found")]
    NotFound,

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(ref detail) => {
                error!("Internal error: {detail}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::MissingFields
            | ApiError::InvalidTechs
            | ApiError::InvalidUrl
            | ApiError::InvalidId => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::RecordNotFound(_) => ApiError::NotFound,
            CatalogError::Store(detail) => ApiError::Internal(detail),
        }
    }
}
