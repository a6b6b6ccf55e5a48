use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

mod schema;

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// Errors a handler can end in.
///
/// Each variant maps to a status code and a JSON `{"error": ...}` body. The
/// message shown to the caller is fixed per variant; details only go to the log.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Failed to send email")]
    DispatchError(#[from] anyhow::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::DispatchError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationError(ref s) => {
                tracing::warn!("{:?}", s);
            }
            Self::DispatchError(ref e) => {
                tracing::error!("{:?}", e);
            }
        }

        (
            self.status_code(),
            Json(schema::Error {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
