pub mod health;
pub mod villa;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /villas                                          list, create
/// /villas/{id}                                     get, replace, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/villas", villa::router())
}
