use crate::auth::jwt::JwtConfig;

/// Runtime settings for the HTTP server, read once at startup.
///
/// Everything defaults to values that work for local development; a
/// deployment overrides them through the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub host: String,
    /// Port the listener binds to.
    pub port: u16,
    /// Origins the CORS layer will answer for.
    pub cors_origins: Vec<String>,
    /// Per-request timeout enforced by the middleware stack, in seconds.
    pub request_timeout_secs: u64,
    /// Access-token signing settings.
    pub jwt: JwtConfig,
}

/// Read an environment variable, falling back to a default.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl ServerConfig {
    /// Assemble the configuration from the environment.
    ///
    /// Recognised variables: `HOST` (default `0.0.0.0`), `PORT` (`3000`),
    /// `CORS_ORIGINS` (comma-separated, default `http://localhost:5173`),
    /// `REQUEST_TIMEOUT_SECS` (`30`), plus the `JWT_*` variables consumed
    /// by [`JwtConfig::from_env`].
    ///
    /// # Panics
    ///
    /// Panics when a numeric variable does not parse. Startup is the one
    /// place where dying on bad configuration is the right move.
    pub fn from_env() -> Self {
        let port = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
        }
    }
}
