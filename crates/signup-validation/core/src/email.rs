//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::validate_required;
use crate::verdict::Verdict;

// local@domain.tld with no whitespace and a single @
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// Checks the email shape only; no length or domain lookups
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn validate_email(value: &str) -> Verdict {
    if !validate_required(value) {
        return Verdict::invalid("Email is required.");
    }

    if !is_valid_email(value) {
        return Verdict::invalid("Invalid email format.");
    }

    Verdict::Valid
}
