/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Monetary amounts (ticket prices, purchase sums, lifetime spend) in the
/// cinema's smallest currency unit.
pub type Money = i64;
