//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Input DTOs for the writes the repository layer supports

pub mod hall;
pub mod purchase;
pub mod role;
pub mod session;
pub mod user;
