//! Cinema hall entity model and DTO.

use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A hall row from the `halls` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hall {
    pub id: DbId,
    pub name: String,
    /// Fixed capacity, copied into each new session's `free_seats`.
    pub seats: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating or replacing a hall. Create and update take the
/// same whole-object shape.
#[derive(Debug, Deserialize)]
pub struct HallInput {
    pub name: String,
    pub seats: i32,
}
