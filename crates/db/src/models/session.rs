//! Movie session entity model and DTO.

use chrono::{NaiveDate, NaiveTime};
use marquee_core::schedule::ShowWindow;
use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A session row from the `sessions` table: one movie shown daily in a
/// fixed hall slot across a range of dates.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Session {
    pub id: DbId,
    pub hall_id: DbId,
    pub title: String,
    pub description: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub show_start_date: NaiveDate,
    pub show_end_date: NaiveDate,
    /// Seats still purchasable; decremented only by the purchase
    /// transaction while the row is locked.
    pub free_seats: i32,
    pub ticket_price: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Session {
    /// The slice of hall time this session occupies.
    pub fn window(&self) -> ShowWindow {
        ShowWindow {
            start_time: self.start_time,
            end_time: self.end_time,
            show_start_date: self.show_start_date,
            show_end_date: self.show_end_date,
        }
    }
}

/// Input for creating or replacing a session. `free_seats` is not part of
/// the input: it is derived from the hall's capacity at write time.
#[derive(Debug, Deserialize)]
pub struct SessionInput {
    pub hall_id: DbId,
    pub title: String,
    pub description: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub show_start_date: NaiveDate,
    pub show_end_date: NaiveDate,
    pub ticket_price: i32,
}

impl SessionInput {
    /// The window the input asks to occupy.
    pub fn window(&self) -> ShowWindow {
        ShowWindow {
            start_time: self.start_time,
            end_time: self.end_time,
            show_start_date: self.show_start_date,
            show_end_date: self.show_end_date,
        }
    }
}
