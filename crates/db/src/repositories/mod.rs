//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod hall_repo;
pub mod purchase_repo;
pub mod role_repo;
pub mod session_repo;
pub mod user_repo;

pub use hall_repo::HallRepo;
pub use purchase_repo::{PurchaseOutcome, PurchaseRepo};
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
