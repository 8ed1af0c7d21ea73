//! Repository for the `halls` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::hall::{Hall, HallInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, seats, created_at, updated_at";

/// Provides CRUD operations for halls.
pub struct HallRepo;

impl HallRepo {
    /// Insert a new hall, returning the created row.
    pub async fn create(pool: &PgPool, input: &HallInput) -> Result<Hall, sqlx::Error> {
        let query = format!(
            "INSERT INTO halls (name, seats)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hall>(&query)
            .bind(&input.name)
            .bind(input.seats)
            .fetch_one(pool)
            .await
    }

    /// Find a hall by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Hall>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM halls WHERE id = $1");
        sqlx::query_as::<_, Hall>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all halls ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Hall>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM halls ORDER BY name ASC");
        sqlx::query_as::<_, Hall>(&query).fetch_all(pool).await
    }

    /// Replace a hall's name and seat count.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &HallInput,
    ) -> Result<Option<Hall>, sqlx::Error> {
        let query = format!(
            "UPDATE halls SET name = $2, seats = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hall>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.seats)
            .fetch_optional(pool)
            .await
    }

    /// Names of all halls, optionally excluding one hall's own row.
    ///
    /// Feeds the case-insensitive collision check; updates exclude the hall
    /// being edited so keeping its name is not a collision.
    pub async fn names(pool: &PgPool, exclude: Option<DbId>) -> Result<Vec<String>, sqlx::Error> {
        match exclude {
            Some(id) => {
                sqlx::query_scalar("SELECT name FROM halls WHERE id <> $1 ORDER BY name ASC")
                    .bind(id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                sqlx::query_scalar("SELECT name FROM halls ORDER BY name ASC")
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Whether any session of this hall has sold tickets.
    ///
    /// A `true` here locks the hall against edits.
    pub async fn has_purchases(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1 FROM purchases p
                 JOIN sessions s ON s.id = p.session_id
                 WHERE s.hall_id = $1
             )",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }
}
