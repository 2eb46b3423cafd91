//! Caller-side faults
//!
//! These are bugs in the code calling the engine, never bad user input.
//! User-facing failures are `Verdict::Invalid` and are not errors.

use thiserror::Error;

use crate::field::FieldId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// Length bounds where the minimum exceeds the maximum
    #[error("invalid length bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: usize, max: usize },

    /// A field source returned the wrong kind of value for a field
    #[error("field `{field}` expects a {expected} value, got {found}")]
    ValueKind {
        field: FieldId,
        expected: &'static str,
        found: &'static str,
    },
}
