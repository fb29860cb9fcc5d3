use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// What a request can end in besides success. Bodies are fixed strings: a path outside
/// the sandbox and a path that does not exist look the same to the client, and I/O
/// details only ever reach the log.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("not found")]
    NotFound,
    #[error("internal fault: {0}")]
    Internal(String),
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ServeError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            ServeError::Internal(detail) => {
                tracing::error!("Request failed: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
