use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;
use marquee_core::validation::ValidationErrors;
use serde_json::json;

/// Error type returned by every HTTP handler.
///
/// Domain errors arrive as [`CoreError`], accumulated validator output as
/// [`ValidationErrors`], and persistence failures as `sqlx::Error`; the
/// `IntoResponse` impl turns each into a JSON body with a stable `code`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A full violation set from one of the domain validators.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// `{"error": message, "code": code}` with the given status.
fn reply(status: StatusCode, code: &str, message: String) -> Response {
    (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
}

/// 500 with a fixed body. The detail goes to the log, never to the client.
fn internal(detail: &str) -> Response {
    tracing::error!(error = %detail, "internal error");
    reply(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Violation sets keep their field/global breakdown so a client
            // can attach each message to the right input.
            AppError::Validation(errors) => {
                let body = json!({
                    "error": "validation failed",
                    "code": "VALIDATION_ERROR",
                    "fields": errors.fields,
                    "global": errors.global,
                });
                (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
            }

            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => reply(
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    reply(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
                }
                CoreError::Conflict(msg) => reply(StatusCode::CONFLICT, "CONFLICT", msg),
                CoreError::Unauthorized(msg) => {
                    reply(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg)
                }
                CoreError::Forbidden(msg) => reply(StatusCode::FORBIDDEN, "FORBIDDEN", msg),
                CoreError::Internal(msg) => internal(&msg),
            },

            AppError::Database(err) => database_response(err),

            AppError::BadRequest(msg) => reply(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::InternalError(msg) => internal(&msg),
        }
    }
}

/// Map a sqlx error onto a response.
///
/// `RowNotFound` is a plain 404. A unique-constraint violation (Postgres
/// code 23505) on one of our `uq_*` constraints is a 409, since it means a
/// concurrent writer won a uniqueness race the validators had already
/// passed. Everything else is a sanitized 500.
fn database_response(err: sqlx::Error) -> Response {
    match &err {
        sqlx::Error::RowNotFound => reply(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                reply(
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                )
            } else {
                internal(&db_err.to_string())
            }
        }
        other => internal(&other.to_string()),
    }
}
