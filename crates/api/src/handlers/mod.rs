//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers run the domain validators from `marquee_core`, delegate
//! persistence to the repositories in `marquee_db`, and map errors via
//! [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod auth;
pub mod halls;
pub mod purchases;
pub mod sessions;
