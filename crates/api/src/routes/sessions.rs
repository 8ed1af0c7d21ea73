//! Route definitions for the `/sessions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{purchases, sessions};
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// GET  /                -> list (public billboard)
/// POST /                -> create (admin)
/// GET  /{id}            -> get_by_id (auth)
/// PUT  /{id}            -> update (admin)
/// POST /{id}/purchase   -> purchase tickets (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sessions::list).post(sessions::create))
        .route("/{id}", get(sessions::get_by_id).put(sessions::update))
        .route("/{id}/purchase", post(purchases::purchase))
}
