//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The todo store could not be read
///
/// The postal-code API is not called; its check only reports the configured
/// upstream so a health probe never depends on a third party.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "todo_store": { "status": "ok", "message": "10 todos stored" },
///     "pincode_api": { "status": "ok", "message": "Upstream: http://postalpincode.in/api/pincode/" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_todo_store(&state).await;

    let pincode_check = CheckStatus {
        status: "ok".to_string(),
        message: Some(format!(
            "Upstream: {}",
            state.pincode_service.upstream_url()
        )),
    };

    let healthy = store_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            todo_store: store_check,
            pincode_api: pincode_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_todo_store(state: &AppState) -> CheckStatus {
    match state.todo_service.count().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{count} todos stored")),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Todo store error: {e}")),
        },
    }
}
