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
/// - **503 Service Unavailable**: Database unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let all_healthy = db_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database: db_check },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity with a trivial query.
async fn check_database(state: &AppState) -> CheckStatus {
    match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.db.as_ref())
        .await
    {
        Ok(_) => CheckStatus {
            status: "ok".to_string(),
            message: Some("Connected".to_string()),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Health check database query failed");
            CheckStatus {
                status: "error".to_string(),
                message: Some("Database unreachable".to_string()),
            }
        }
    }
}
