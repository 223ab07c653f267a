use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use flightmcp_core::error::CoreError;
use serde_json::{json, Value};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `flightmcp_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::MissingParameter { .. })
            | AppError::Core(CoreError::UnknownTool(_))
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Core(CoreError::Upstream { .. }) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::MissingParameter { message, example } => json!({
                    "error": message,
                    "example": example,
                    "code": "MISSING_PARAMETER",
                }),
                CoreError::Upstream {
                    context,
                    details,
                    fallback,
                } => {
                    let mut body = json!({
                        "error": context,
                        "details": details,
                        "code": "UPSTREAM_FAILURE",
                    });
                    if let (Some(fallback), Value::Object(map)) = (fallback, &mut body) {
                        map.insert("fallback".into(), json!(fallback));
                    }
                    body
                }
                CoreError::UnknownTool(_) => json!({
                    "error": core.to_string(),
                    "code": "UNKNOWN_TOOL",
                }),
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => json!({
                "error": msg,
                "code": "BAD_REQUEST",
            }),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                json!({
                    "error": "An internal error occurred",
                    "code": "INTERNAL_ERROR",
                })
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
