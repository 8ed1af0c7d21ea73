use std::sync::Arc;

use crate::config::ServerConfig;

/// State shared with every handler through `State<AppState>`.
///
/// Cloning is cheap: the pool is reference-counted internally and the
/// config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: marquee_db::DbPool,
    /// Read by the auth extractors (JWT settings) and the router builder.
    pub config: Arc<ServerConfig>,
}
