//! Signup Validation Core
//!
//! Pure Rust validation engine for the signup form.
//! Used by server-side handlers and by the WASM client-side bindings.

pub mod config;
pub mod date;
pub mod dispatch;
pub mod email;
pub mod error;
pub mod field;
pub mod form;
pub mod phone;
pub mod postal;
pub mod rules;
pub mod source;
pub mod text;
pub mod verdict;

// Re-export all validators
pub use date::*;
pub use email::*;
pub use phone::*;
pub use postal::*;
pub use text::*;

// Re-export engine types
pub use config::ValidationConfig;
pub use dispatch::{FieldReport, FormValidator};
pub use error::ContractViolation;
pub use field::{FieldId, FieldValue};
pub use form::FormResult;
pub use rules::{FieldRule, Rule};
pub use source::{FieldSource, FormValues};
pub use verdict::Verdict;
