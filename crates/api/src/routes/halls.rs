//! Route definitions for the `/halls` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::halls;
use crate::state::AppState;

/// Routes mounted at `/halls`.
///
/// ```text
/// GET  /      -> list (auth)
/// POST /      -> create (admin)
/// GET  /{id}  -> get_by_id (auth)
/// PUT  /{id}  -> update (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(halls::list).post(halls::create))
        .route("/{id}", get(halls::get_by_id).put(halls::update))
}
