//! Error types and response rendering for the API.
//!
//! Every failure is rendered as `{ "error": message }`. Business failures use
//! status 200 so clients tell them apart by the `error` key alone.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::domain::DomainError;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Validation, conflict or not-found failures
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body was not JSON of the expected shape
    #[error("Invalid request body: {0}")]
    BadBody(#[from] JsonRejection),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Domain(_) => StatusCode::OK,
            ServerError::BadBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
