use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

pub const NOT_FOUND_REASON: &str = "no rows in result set";

/// Everything a request can fail with. Converted into the wire shape exactly
/// once, at the handler boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input. 400 with an explanatory message.
    #[error("{0}")]
    Validation(String),
    /// No matching row. 404 with a fixed reason string.
    #[error("no rows in result set")]
    NotFound,
    /// The underlying store call failed. 400 with the raw error text.
    #[error("{0}")]
    Storage(String),
}

// every failure body carries status=failure and one of reason/explaination
// (the misspelling is part of the wire format)
#[derive(Serialize)]
struct Failure {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explaination: Option<String>,
}

impl Failure {
    fn reason(reason: String) -> Self {
        Self {
            status: "failure",
            reason: Some(reason),
            explaination: None,
        }
    }

    fn explaination(explaination: String) -> Self {
        Self {
            status: "failure",
            reason: None,
            explaination: Some(explaination),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Failure::reason(NOT_FOUND_REASON.to_string()),
            ),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, Failure::explaination(msg)),
            ApiError::Storage(msg) => (StatusCode::BAD_REQUEST, Failure::explaination(msg)),
        };

        (status, Json(body)).into_response()
    }
}

/// Parse a path parameter into an id before anything touches the store.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|e| ApiError::Validation(format!("Invalid Input: {}: {}", raw, e)))
}
