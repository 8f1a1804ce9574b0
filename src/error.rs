use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::ErrorMessage;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(&'static str),
    /// A failure mapped to a user-facing message. The source is only logged.
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
    /// A failure with no message of its own; answered with a bare 500.
    #[error(transparent)]
    Unhandled(#[from] anyhow::Error),
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Unhandled(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorMessage::new(message))).into_response()
            },
            AppError::Conflict(message) => {
                (StatusCode::CONFLICT, Json(ErrorMessage::new(message))).into_response()
            },
            AppError::Internal { message, source } => {
                tracing::error!(error = ?source, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorMessage::new(message)))
                    .into_response()
            },
            AppError::Unhandled(err) => {
                tracing::error!(error = ?err, "unhandled error");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            },
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub trait ResultExt<T> {
    /// Attaches `message` to an unexpected failure. Not-found and conflict
    /// errors pass through untouched.
    fn or_internal(self, message: &'static str) -> AppResult<T>;
}

impl<T, E: Into<AppError>> ResultExt<T> for Result<T, E> {
    fn or_internal(self, message: &'static str) -> AppResult<T> {
        self.map_err(|err| match err.into() {
            AppError::Unhandled(source) => AppError::Internal { message, source },
            other => other,
        })
    }
}
