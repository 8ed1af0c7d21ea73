//! User entity model and DTOs.

use marquee_core::types::{DbId, Money, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
    /// Lifetime ticket spend, maintained by the purchase transaction.
    pub total_sum: Money,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    /// Resolved role name (`"admin"` or `"customer"`).
    pub role: String,
    pub total_sum: Money,
    pub created_at: Timestamp,
}

impl UserResponse {
    /// Pair a user row with its resolved role name.
    pub fn from_user(user: User, role: String) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role,
            total_sum: user.total_sum,
            created_at: user.created_at,
        }
    }
}

/// Input for inserting a user row. The hash is already computed; the
/// persistence layer never sees a plaintext password.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
}
