//! Response envelope.

use serde::Serialize;

/// `{ "data": T }` wrapper used by every resource endpoint.
///
/// A typed struct rather than `serde_json::json!` so the payload shape is
/// checked at compile time and stays uniform across handlers.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
