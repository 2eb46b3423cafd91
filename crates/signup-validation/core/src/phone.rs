//! Phone number validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::validate_required;
use crate::verdict::Verdict;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5}-[0-9]{6}$").unwrap());

pub const PHONE_FORMAT_MESSAGE: &str = "Invalid phone number format. Use 07123-456789.";

/// Five digits, a hyphen, six digits (e.g. `07123-456789`)
pub fn validate_phone(value: &str) -> Verdict {
    if !validate_required(value) {
        return Verdict::invalid("Phone number is required.");
    }

    if !PHONE_REGEX.is_match(value) {
        return Verdict::invalid(PHONE_FORMAT_MESSAGE);
    }

    Verdict::Valid
}
