use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
pub enum AppError {
    /// Store credentials missing, transport failure, or a malformed record.
    /// The client always sees the same generic 500 body; the detail is only
    /// logged.
    StoreUnavailable(String),
    #[allow(dead_code)]
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StoreUnavailable(m) | Self::Internal(m) => write!(f, "{m}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::StoreUnavailable(detail) => {
                tracing::error!(error = %detail, "Failed to fetch factory status");
                "Failed to fetch factory status".to_string()
            },
            Self::Internal(m) => m.clone(),
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": message })),
        )
            .into_response()
    }
}
