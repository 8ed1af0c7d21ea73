//! Route definitions for the `/purchases` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::purchases;
use crate::state::AppState;

/// Routes mounted at `/purchases`.
///
/// ```text
/// GET /  -> list (own history; admins see every purchase)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(purchases::list))
}
