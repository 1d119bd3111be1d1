use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller supplied something the core refuses: empty address,
    /// unknown property type, a table row without `id`.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Failed to read {}: {}", .path.display(), .source)]
    TableRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {}", .path.display(), .source)]
    TableParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            log::error!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
