//! Application error type and its HTTP rendering.
//!
//! Every failure is answered with `400 Bad Request` and an [`ExceptionPayload`].
//! The error kind only affects logging: client errors are logged at `WARN`,
//! upstream and internal failures at `ERROR`, both tagged with the incident id
//! that is returned to the caller.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by handlers and services.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request could not be understood (bad body, bad path).
    #[error("{0}")]
    BadRequest(String),
    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The postal-code API failed or returned something unusable.
    #[error("{0}")]
    Upstream(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Short machine-readable name of the variant, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::NotFound(_) => "not_found",
            Self::Upstream(_) => "upstream_error",
            Self::Internal(_) => "internal_error",
        }
    }

    fn is_client_error(&self) -> bool {
        matches!(self, Self::BadRequest(_) | Self::NotFound(_))
    }
}

/// JSON body returned for every failed request.
///
/// ```json
/// {
///   "description": "Todo not found: 3f1c...",
///   "id": "b0f5c6de-9a1e-4c55-8d7c-2f0e0a6b1d42",
///   "eventTs": "2026-10-17T09:12:44.123Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionPayload {
    pub description: String,
    /// Incident id, also attached to the log line for this failure.
    pub id: Uuid,
    pub event_ts: DateTime<Utc>,
}

impl ExceptionPayload {
    /// Wraps a message with a fresh incident id and the current time.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            id: Uuid::new_v4(),
            event_ts: Utc::now(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let payload = ExceptionPayload::new(self.to_string());

        if self.is_client_error() {
            tracing::warn!(
                incident_id = %payload.id,
                kind = self.kind(),
                "Request failed: {}",
                payload.description
            );
        } else {
            tracing::error!(
                incident_id = %payload.id,
                kind = self.kind(),
                "Request failed: {}",
                payload.description
            );
        }

        (StatusCode::BAD_REQUEST, Json(payload)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}
