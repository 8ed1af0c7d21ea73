//! Ticket purchase rules.
//!
//! The transactional part (seat decrement, spend accumulation, insert) lives
//! in the db crate; this module holds the pure admission rules it runs on
//! the locked session row.

use crate::schedule::ShowWindow;
use crate::types::{Money, Timestamp};
use crate::validation::ValidationErrors;

/// Check a purchase request against the session state.
///
/// A non-positive quantity is terminal: nothing else about the request is
/// meaningful, so no other rule runs. Otherwise every violation is
/// accumulated.
pub fn validate_purchase(
    quantity: i32,
    free_seats: i32,
    window: &ShowWindow,
    now: Timestamp,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if quantity < 1 {
        errors.add_field("quantity", "quantity must be at least 1");
        return errors;
    }

    if quantity > free_seats {
        errors.add_global(format!("only {free_seats} seats are free for this session"));
    }

    if occurrence_started(window, now) {
        errors.add_global("this session has already started");
    }

    errors
}

/// Whether the showing a purchase would be for has already started.
///
/// The relevant showing is the session's next occurrence: on the current
/// date if the run has begun, on `show_start_date` if it has not. The run
/// being over entirely also counts as started. A purchase made exactly at
/// the occurrence's start instant is still allowed.
pub fn occurrence_started(window: &ShowWindow, now: Timestamp) -> bool {
    let today = now.date_naive();
    if today > window.show_end_date {
        return true;
    }
    let occurrence_date = window.show_start_date.max(today);
    occurrence_date.and_time(window.start_time) < now.naive_utc()
}

/// Total charged for a purchase at the session's ticket price.
pub fn purchase_sum(quantity: i32, ticket_price: i32) -> Money {
    Money::from(quantity) * Money::from(ticket_price)
}
