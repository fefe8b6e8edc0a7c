//! `GET /health`: liveness plus the number of villas the store holds.
//!
//! Mounted at the root, outside `/api/v1`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use villa_db::repositories::VillaRepo;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the villa store answered, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// Rows in `villas`; `null` when the store could not be queried.
    pub villa_count: Option<i64>,
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");
    match VillaRepo::count(&state.pool).await {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version,
                villa_count: Some(count),
            }),
        ),
        Err(err) => {
            tracing::error!(error = %err, "Villa store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    version,
                    villa_count: None,
                }),
            )
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
