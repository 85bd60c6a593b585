//! Handler for the postal-code proxy endpoint.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

/// Proxies a PIN code lookup to the upstream API.
///
/// # Endpoint
///
/// `GET /api/pins/{pin}`
///
/// # Response
///
/// The upstream JSON document, unchanged.
///
/// # Errors
///
/// Any upstream failure (unreachable, timeout, non-2xx, non-JSON body) is
/// answered with 400 and an error payload.
pub async fn pin_details_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(pin) = path?;
    let details = state.pincode_service.pin_details(&pin).await?;
    Ok(Json(details))
}
