//! Accumulating validation error set.
//!
//! Validators report every violation they can find in one pass instead of
//! stopping at the first, so a client can fix a whole form at once. Errors
//! are either tied to a named input field or global to the request.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Set of violations collected while validating one request.
///
/// `fields` maps an input field name to its messages; `global` holds
/// violations that concern the request as a whole (schedule conflicts,
/// locked entities). Field order is stable in serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub fields: BTreeMap<String, Vec<String>>,
    pub global: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation against a named field.
    pub fn add_field(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Record a violation that is not tied to a single field.
    pub fn add_global(&mut self, message: impl Into<String>) {
        self.global.push(message.into());
    }

    /// True when no violation has been recorded.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.global.is_empty()
    }

    /// Fold another error set into this one.
    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.fields {
            self.fields.entry(field).or_default().extend(messages);
        }
        self.global.extend(other.global);
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    ///
    /// Lets callers end a validation pass with `errors.into_result()?`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field_violations: usize = self.fields.values().map(Vec::len).sum();
        write!(
            f,
            "validation failed with {} field and {} global violations",
            field_violations,
            self.global.len()
        )
    }
}

impl std::error::Error for ValidationErrors {}
