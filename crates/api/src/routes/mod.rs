pub mod auth;
pub mod halls;
pub mod health;
pub mod purchases;
pub mod sessions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
///
/// /halls                         list (auth), create (admin)
/// /halls/{id}                    get (auth), update (admin)
///
/// /sessions                      list (public), create (admin)
/// /sessions/{id}                 get (auth), update (admin)
/// /sessions/{id}/purchase        buy tickets (auth, POST)
///
/// /purchases                     own history (auth); admins see all
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Account creation and login.
        .nest("/auth", auth::router())
        // Hall management.
        .nest("/halls", halls::router())
        // Session billboard, scheduling, and ticket purchase.
        .nest("/sessions", sessions::router())
        // Purchase history.
        .nest("/purchases", purchases::router())
}
