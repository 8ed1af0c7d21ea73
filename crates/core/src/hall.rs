//! Cinema hall rules.

use crate::validation::ValidationErrors;

/// Joined to the error set when a hall with sold tickets is edited.
pub const HALL_LOCKED: &str =
    "hall has sessions with ticket purchases and can no longer be edited";

/// A hall as submitted for create or update.
#[derive(Debug, Clone)]
pub struct HallCandidate {
    pub name: String,
    pub seats: i32,
}

/// Validate a new hall. `taken_names` holds the names of every existing
/// hall; the comparison is case-insensitive.
pub fn validate_hall(candidate: &HallCandidate, taken_names: &[String]) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if candidate.name.chars().count() <= 2 {
        errors.add_field("name", "hall name must be longer than 2 characters");
    }

    if candidate.seats <= 0 {
        errors.add_field("seats", "hall must have at least one seat");
    }

    let name_lower = candidate.name.to_lowercase();
    if taken_names.iter().any(|n| n.to_lowercase() == name_lower) {
        errors.add_field("name", "a hall with this name already exists");
    }

    errors
}

/// Validate a change to an existing hall.
///
/// The caller passes `taken_names` without the hall's own current name, so
/// keeping the name does not count as a collision. A hall whose sessions
/// have sold tickets is locked; the lock violation is reported alongside
/// any rule violations.
pub fn validate_hall_update(
    candidate: &HallCandidate,
    taken_names: &[String],
    has_purchases: bool,
) -> ValidationErrors {
    let mut errors = validate_hall(candidate, taken_names);
    if has_purchases {
        errors.add_global(HALL_LOCKED);
    }
    errors
}
