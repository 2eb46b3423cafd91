//! Outcome of a single rule

use serde::Serialize;
use std::fmt;

const FALLBACK_MESSAGE: &str = "This field is invalid.";

/// Result of applying one rule to one field
///
/// The message form is what the presentation layer consumes: an empty
/// string means valid, anything else is the text to show next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(into = "String")]
pub enum Verdict {
    #[default]
    Valid,
    Invalid(String),
}

impl Verdict {
    /// Create a failed verdict. An empty message would read as valid,
    /// so it is replaced with a generic one.
    pub fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Verdict::Invalid(FALLBACK_MESSAGE.to_string())
        } else {
            Verdict::Invalid(message)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Error message, or `""` when valid
    pub fn message(&self) -> &str {
        match self {
            Verdict::Valid => "",
            Verdict::Invalid(message) => message,
        }
    }

    /// Convert to the `Result` shape used by the length/range helpers
    pub fn into_result(self) -> Result<(), String> {
        match self {
            Verdict::Valid => Ok(()),
            Verdict::Invalid(message) => Err(message),
        }
    }
}

impl From<Result<(), String>> for Verdict {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Verdict::Valid,
            Err(message) => Verdict::invalid(message),
        }
    }
}

impl From<Verdict> for String {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Valid => String::new(),
            Verdict::Invalid(message) => message,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
