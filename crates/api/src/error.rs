use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use infra::StoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("storage failure")]
    Store(#[source] StoreError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        AppError::Validation { message: message.into(), errors }
    }

    pub fn not_found(what: &str) -> Self {
        AppError::NotFound(format!("{what} not found"))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound("tournament") => AppError::not_found("Tournament"),
            StoreError::NotFound(kind) => AppError::NotFound(format!("{kind} not found")),
            StoreError::TournamentFull => AppError::Conflict("Tournament is full".into()),
            StoreError::RegistrationClosed => {
                AppError::Conflict("Registration is closed for this tournament".into())
            }
            StoreError::Duplicate(field) => AppError::Conflict(format!("{field} already exists")),
            StoreError::Constraint(rule) => AppError::validation(
                "Invalid record",
                vec![FieldError::new(rule, "Value violates a record constraint")],
            ),
            StoreError::Db(_) => AppError::Store(err),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation { message, errors } => (
                StatusCode::BAD_REQUEST,
                ErrorBody { message, errors: Some(errors) },
            ),
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, ErrorBody { message, errors: None })
            }
            // Full and closed tournaments are reported as bad requests, not 409.
            AppError::Conflict(message) => {
                (StatusCode::BAD_REQUEST, ErrorBody { message, errors: None })
            }
            AppError::Store(err) => {
                tracing::error!(error = ?err, "store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody { message: "Internal server error".into(), errors: None },
                )
            }
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody { message: "Internal server error".into(), errors: None },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
