//! Repository for the `purchases` table and the purchase transaction.

use marquee_core::purchase;
use marquee_core::types::{DbId, Timestamp};
use marquee_core::validation::ValidationErrors;
use sqlx::PgPool;

use crate::models::purchase::Purchase;
use crate::models::session::Session;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, session_id, purchase_date, quantity, purchase_sum, \
                       created_at, updated_at";

/// Session columns for the locking read inside the transaction.
const SESSION_COLUMNS: &str = "id, hall_id, title, description, start_time, end_time, \
                               show_start_date, show_end_date, free_seats, ticket_price, \
                               created_at, updated_at";

/// Result of a purchase attempt.
#[derive(Debug)]
pub enum PurchaseOutcome {
    /// The transaction committed; seats and spend totals are updated.
    Purchased(Purchase),
    /// Admission rules rejected the request; nothing was written.
    Rejected(ValidationErrors),
    /// No session with the requested ID exists.
    SessionMissing,
    /// The buying user's row no longer exists.
    UserMissing,
}

/// Provides the purchase transaction and purchase listings.
pub struct PurchaseRepo;

impl PurchaseRepo {
    /// Attempt to buy `quantity` tickets for a session.
    ///
    /// Runs in one transaction with the session row locked via
    /// `SELECT ... FOR UPDATE`: concurrent purchases for the same session
    /// queue on the lock and re-validate against the committed seat count,
    /// so two buyers can never jointly oversell. On success the session's
    /// `free_seats` drops by `quantity`, the user's `total_sum` grows by
    /// `quantity x ticket_price`, and the purchase row is inserted -- all
    /// or nothing.
    pub async fn execute(
        pool: &PgPool,
        user_id: DbId,
        session_id: DbId,
        quantity: i32,
        now: Timestamp,
    ) -> Result<PurchaseOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let lock_query = format!("SELECT {SESSION_COLUMNS} FROM sessions WHERE id = $1 FOR UPDATE");
        let Some(session) = sqlx::query_as::<_, Session>(&lock_query)
            .bind(session_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(PurchaseOutcome::SessionMissing);
        };

        let errors =
            purchase::validate_purchase(quantity, session.free_seats, &session.window(), now);
        if !errors.is_empty() {
            return Ok(PurchaseOutcome::Rejected(errors));
        }

        let sum = purchase::purchase_sum(quantity, session.ticket_price);

        sqlx::query("UPDATE sessions SET free_seats = free_seats - $2 WHERE id = $1")
            .bind(session_id)
            .bind(quantity)
            .execute(&mut *tx)
            .await?;

        let user_update = sqlx::query("UPDATE users SET total_sum = total_sum + $2 WHERE id = $1")
            .bind(user_id)
            .bind(sum)
            .execute(&mut *tx)
            .await?;
        if user_update.rows_affected() == 0 {
            return Ok(PurchaseOutcome::UserMissing);
        }

        let insert = format!(
            "INSERT INTO purchases (user_id, session_id, purchase_date, quantity, purchase_sum)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let purchase = sqlx::query_as::<_, Purchase>(&insert)
            .bind(user_id)
            .bind(session_id)
            .bind(now.date_naive())
            .bind(quantity)
            .bind(sum)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            purchase_id = purchase.id,
            session_id,
            quantity,
            sum,
            "purchase committed"
        );

        Ok(PurchaseOutcome::Purchased(purchase))
    }

    /// A user's own purchases, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Purchase>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM purchases WHERE user_id = $1 ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Purchase>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Every purchase in the system, newest first (admin view).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Purchase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM purchases ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Purchase>(&query).fetch_all(pool).await
    }
}
