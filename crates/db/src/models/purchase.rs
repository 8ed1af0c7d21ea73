//! Ticket purchase entity model.

use chrono::NaiveDate;
use marquee_core::types::{DbId, Money, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A purchase row from the `purchases` table. Rows are written only by
/// the purchase transaction and never updated afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Purchase {
    pub id: DbId,
    pub user_id: DbId,
    pub session_id: DbId,
    pub purchase_date: NaiveDate,
    pub quantity: i32,
    /// quantity x ticket_price at purchase time.
    pub purchase_sum: Money,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
