//! Movie session scheduling rules.
//!
//! A session occupies one hall in a daily time slot across a range of show
//! dates. Everything here is pure: callers supply the candidate, the other
//! sessions of the hall, and the clock, and get back the full violation set.

use chrono::{NaiveDate, NaiveTime};

use crate::types::Timestamp;
use crate::validation::ValidationErrors;

/// Joined to the error set when a session with sold tickets is edited.
pub const SESSION_LOCKED: &str = "session already has ticket purchases and can no longer be edited";

/// The slice of hall time a session occupies: a daily `[start_time,
/// end_time]` slot repeated for every date in `[show_start_date,
/// show_end_date]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowWindow {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub show_start_date: NaiveDate,
    pub show_end_date: NaiveDate,
}

/// A session schedule as submitted for create or update, before any
/// persistence decision.
#[derive(Debug, Clone)]
pub struct ScheduleCandidate {
    pub title: String,
    pub description: String,
    pub window: ShowWindow,
    pub ticket_price: i32,
}

/// Closed-interval intersection: `[a, b]` and `[c, d]` share at least one
/// point iff `a <= d && c <= b`.
fn ranges_intersect<T: PartialOrd>(a: T, b: T, c: T, d: T) -> bool {
    a <= d && c <= b
}

/// Two show windows conflict when their date ranges intersect AND their
/// daily time slots intersect. Both comparisons are closed-interval, so a
/// window lying strictly inside another still conflicts.
pub fn windows_overlap(a: &ShowWindow, b: &ShowWindow) -> bool {
    ranges_intersect(
        a.show_start_date,
        a.show_end_date,
        b.show_start_date,
        b.show_end_date,
    ) && ranges_intersect(a.start_time, a.end_time, b.start_time, b.end_time)
}

/// Validate a candidate schedule against the hall's other sessions.
///
/// `existing` must hold the windows of every other session in the same hall
/// (the caller excludes the session being edited). All violations are
/// accumulated; an empty result means the schedule may be persisted.
pub fn validate_schedule(
    candidate: &ScheduleCandidate,
    existing: &[ShowWindow],
    now: Timestamp,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let today = now.date_naive();
    let window = &candidate.window;

    // -----------------------------------------------------------------------
    // Field rules
    // -----------------------------------------------------------------------

    if candidate.title.chars().count() <= 3 {
        errors.add_field("title", "title must be longer than 3 characters");
    }

    if candidate.description.chars().count() <= 9 {
        errors.add_field("description", "description must be longer than 9 characters");
    }

    if window.show_start_date > window.show_end_date {
        errors.add_field("show_end_date", "show end date must not precede the start date");
    }

    if window.start_time >= window.end_time {
        errors.add_field("start_time", "start time must be earlier than end time");
        if window.show_start_date == window.show_end_date {
            errors.add_global("a single-day session cannot end before it starts");
        }
    }

    if candidate.ticket_price <= 0 {
        errors.add_field("ticket_price", "ticket price must be positive");
    }

    // -----------------------------------------------------------------------
    // Clock rules
    // -----------------------------------------------------------------------

    if window.show_start_date < today || window.show_end_date < today {
        errors.add_global("show dates cannot be in the past");
    }

    if window.show_start_date == today && window.start_time < now.time() {
        errors.add_global("the first showing today would start in the past");
    }

    // -----------------------------------------------------------------------
    // Hall conflict
    // -----------------------------------------------------------------------

    if existing.iter().any(|other| windows_overlap(window, other)) {
        errors.add_global("hall already has a session overlapping these dates and times");
    }

    errors
}

/// Validate a schedule change to an existing session.
///
/// Identical to [`validate_schedule`] plus the mutation guard: a session
/// that has sold tickets is locked, and the lock violation is reported
/// alongside any rule violations rather than replacing them.
pub fn validate_schedule_update(
    candidate: &ScheduleCandidate,
    existing: &[ShowWindow],
    has_purchases: bool,
    now: Timestamp,
) -> ValidationErrors {
    let mut errors = validate_schedule(candidate, existing, now);
    if has_purchases {
        errors.add_global(SESSION_LOCKED);
    }
    errors
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, min, 0).unwrap()
    }

    fn window(start: (u32, u32), end: (u32, u32), from: u32, to: u32) -> ShowWindow {
        ShowWindow {
            start_time: time(start.0, start.1),
            end_time: time(end.0, end.1),
            show_start_date: date(2023, 8, from),
            show_end_date: date(2023, 8, to),
        }
    }

    /// Midnight on the first show day of the reference scenario.
    fn aug_first_midnight() -> Timestamp {
        Utc.with_ymd_and_hms(2023, 8, 1, 0, 0, 0).unwrap()
    }

    fn candidate(window: ShowWindow) -> ScheduleCandidate {
        ScheduleCandidate {
            title: "Interstellar".to_string(),
            description: "Through the wormhole".to_string(),
            window,
            ticket_price: 2000,
        }
    }

    // -----------------------------------------------------------------------
    // Reference scenario: a morning slot on a fresh hall
    // -----------------------------------------------------------------------

    #[test]
    fn morning_slot_on_empty_hall_is_valid() {
        let errors = validate_schedule(
            &candidate(window((7, 0), (10, 0), 1, 8)),
            &[],
            aug_first_midnight(),
        );
        assert!(errors.is_empty(), "unexpected violations: {errors:?}");
    }

    #[test]
    fn overlapping_slot_in_same_hall_is_rejected() {
        let existing = vec![window((7, 0), (10, 0), 1, 8)];
        let errors = validate_schedule(
            &candidate(window((8, 0), (10, 30), 3, 12)),
            &existing,
            aug_first_midnight(),
        );
        assert_eq!(errors.global.len(), 1);
        assert!(errors.global[0].contains("overlapping"));
    }

    #[test]
    fn disjoint_dates_are_accepted() {
        let existing = vec![window((7, 0), (10, 0), 1, 8)];
        let errors = validate_schedule(
            &candidate(window((8, 0), (10, 30), 9, 12)),
            &existing,
            aug_first_midnight(),
        );
        assert!(errors.is_empty(), "unexpected violations: {errors:?}");
    }

    #[test]
    fn disjoint_times_are_accepted() {
        let existing = vec![window((7, 0), (10, 0), 1, 8)];
        let errors = validate_schedule(
            &candidate(window((10, 30), (12, 0), 1, 8)),
            &existing,
            aug_first_midnight(),
        );
        assert!(errors.is_empty(), "unexpected violations: {errors:?}");
    }

    // -----------------------------------------------------------------------
    // Interval intersection edge cases
    // -----------------------------------------------------------------------

    #[test]
    fn window_inside_another_conflicts() {
        // A window strictly inside another shares no endpoint with it;
        // the closed-interval test must still detect the conflict.
        let outer = window((7, 0), (12, 0), 1, 20);
        let inner = window((8, 0), (9, 0), 5, 10);
        assert!(windows_overlap(&inner, &outer));
        assert!(windows_overlap(&outer, &inner));
    }

    #[test]
    fn shared_endpoint_conflicts() {
        let a = window((7, 0), (10, 0), 1, 8);
        let b = window((10, 0), (12, 0), 8, 9);
        assert!(windows_overlap(&a, &b));
    }

    #[test]
    fn adjacent_dates_do_not_conflict() {
        let a = window((7, 0), (10, 0), 1, 8);
        let b = window((7, 0), (10, 0), 9, 12);
        assert!(!windows_overlap(&a, &b));
    }

    #[test]
    fn same_dates_disjoint_times_do_not_conflict() {
        let a = window((7, 0), (10, 0), 1, 8);
        let b = window((10, 1), (12, 0), 1, 8);
        assert!(!windows_overlap(&a, &b));
    }

    // -----------------------------------------------------------------------
    // Field rules
    // -----------------------------------------------------------------------

    #[test]
    fn short_title_is_rejected() {
        let mut c = candidate(window((7, 0), (10, 0), 1, 8));
        c.title = "Up".to_string();
        let errors = validate_schedule(&c, &[], aug_first_midnight());
        assert!(errors.fields.contains_key("title"));
    }

    #[test]
    fn four_character_title_is_accepted() {
        let mut c = candidate(window((7, 0), (10, 0), 1, 8));
        c.title = "Dune".to_string();
        let errors = validate_schedule(&c, &[], aug_first_midnight());
        assert!(!errors.fields.contains_key("title"));
    }

    #[test]
    fn short_description_is_rejected() {
        let mut c = candidate(window((7, 0), (10, 0), 1, 8));
        c.description = "short".to_string();
        let errors = validate_schedule(&c, &[], aug_first_midnight());
        assert!(errors.fields.contains_key("description"));
    }

    #[test]
    fn inverted_dates_are_rejected() {
        let errors = validate_schedule(
            &candidate(window((7, 0), (10, 0), 8, 1)),
            &[],
            aug_first_midnight(),
        );
        assert!(errors.fields.contains_key("show_end_date"));
    }

    #[test]
    fn inverted_times_are_rejected() {
        let errors = validate_schedule(
            &candidate(window((10, 0), (7, 0), 1, 8)),
            &[],
            aug_first_midnight(),
        );
        assert!(errors.fields.contains_key("start_time"));
    }

    #[test]
    fn single_day_inverted_times_add_global_duration_error() {
        let errors = validate_schedule(
            &candidate(window((10, 0), (7, 0), 1, 1)),
            &[],
            aug_first_midnight(),
        );
        assert!(errors.fields.contains_key("start_time"));
        assert!(errors.global.iter().any(|m| m.contains("single-day")));
    }

    #[test]
    fn non_positive_price_is_rejected() {
        let mut c = candidate(window((7, 0), (10, 0), 1, 8));
        c.ticket_price = 0;
        let errors = validate_schedule(&c, &[], aug_first_midnight());
        assert!(errors.fields.contains_key("ticket_price"));
    }

    // -----------------------------------------------------------------------
    // Clock rules
    // -----------------------------------------------------------------------

    #[test]
    fn past_show_dates_are_rejected() {
        let errors = validate_schedule(
            &candidate(window((7, 0), (10, 0), 1, 8)),
            &[],
            Utc.with_ymd_and_hms(2023, 8, 15, 0, 0, 0).unwrap(),
        );
        assert!(errors.global.iter().any(|m| m.contains("past")));
    }

    #[test]
    fn first_showing_today_before_now_is_rejected() {
        let errors = validate_schedule(
            &candidate(window((7, 0), (10, 0), 1, 8)),
            &[],
            Utc.with_ymd_and_hms(2023, 8, 1, 8, 0, 0).unwrap(),
        );
        assert!(errors.global.iter().any(|m| m.contains("start in the past")));
    }

    #[test]
    fn first_showing_exactly_at_now_is_accepted() {
        let errors = validate_schedule(
            &candidate(window((7, 0), (10, 0), 1, 8)),
            &[],
            Utc.with_ymd_and_hms(2023, 8, 1, 7, 0, 0).unwrap(),
        );
        assert!(errors.is_empty(), "unexpected violations: {errors:?}");
    }

    #[test]
    fn early_slot_starting_tomorrow_is_accepted() {
        // The run starts tomorrow, so today's clock must not reject it.
        let errors = validate_schedule(
            &candidate(window((7, 0), (10, 0), 2, 8)),
            &[],
            Utc.with_ymd_and_hms(2023, 8, 1, 23, 0, 0).unwrap(),
        );
        assert!(errors.is_empty(), "unexpected violations: {errors:?}");
    }

    // -----------------------------------------------------------------------
    // Accumulation and the update guard
    // -----------------------------------------------------------------------

    #[test]
    fn all_violations_are_reported_together() {
        let existing = vec![window((7, 0), (10, 0), 1, 8)];
        let mut c = candidate(window((8, 0), (10, 30), 3, 12));
        c.title = "Up".to_string();
        c.ticket_price = -5;

        let errors = validate_schedule(&c, &existing, aug_first_midnight());
        assert!(errors.fields.contains_key("title"));
        assert!(errors.fields.contains_key("ticket_price"));
        assert_eq!(errors.global.len(), 1);
    }

    #[test]
    fn update_with_purchases_is_locked() {
        let errors = validate_schedule_update(
            &candidate(window((7, 0), (10, 0), 1, 8)),
            &[],
            true,
            aug_first_midnight(),
        );
        assert_eq!(errors.global, vec![SESSION_LOCKED.to_string()]);
    }

    #[test]
    fn locked_update_still_reports_rule_violations() {
        let mut c = candidate(window((7, 0), (10, 0), 1, 8));
        c.title = "Up".to_string();
        let errors = validate_schedule_update(&c, &[], true, aug_first_midnight());
        assert!(errors.fields.contains_key("title"));
        assert!(errors.global.contains(&SESSION_LOCKED.to_string()));
    }

    #[test]
    fn update_without_purchases_is_not_locked() {
        let errors = validate_schedule_update(
            &candidate(window((7, 0), (10, 0), 1, 8)),
            &[],
            false,
            aug_first_midnight(),
        );
        assert!(errors.is_empty());
    }
}
