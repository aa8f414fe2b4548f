use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::api::{ErrorResponse, ValidationError};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    AuthUser(String),

    #[error("{0}")]
    Profile(String),

    #[error("Failed to hash password: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Internal error: {0}")]
    InternalError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload
            | AppError::Validation(_)
            | AppError::AuthUser(_)
            | AppError::Profile(_) => StatusCode::BAD_REQUEST,
            AppError::Hash(_) | AppError::InternalError(_) => {
                error!("{self}");

                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
