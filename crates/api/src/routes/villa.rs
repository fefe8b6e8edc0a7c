//! Route definitions for the `/villas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::villa;
use crate::state::AppState;

/// Routes mounted at `/villas`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// PATCH  /{id}   -> patch
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(villa::list).post(villa::create))
        .route(
            "/{id}",
            get(villa::get_by_id)
                .put(villa::update)
                .patch(villa::patch)
                .delete(villa::delete),
        )
}
