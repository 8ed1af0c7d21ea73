//! Marquee core domain logic.
//!
//! Pure validation rules, policy enums, and shared types for the cinema
//! ticketing platform. This crate has zero internal dependencies and does no
//! I/O, so the db and api layers (and any future CLI tooling) can share it.

pub mod error;
pub mod hall;
pub mod listing;
pub mod purchase;
pub mod roles;
pub mod schedule;
pub mod types;
pub mod validation;
