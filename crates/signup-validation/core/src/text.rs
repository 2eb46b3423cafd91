//! Text and requiredness validation functions

use crate::error::ContractViolation;
use crate::verdict::Verdict;

pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// True if the value has any non-whitespace content
pub fn validate_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validates string length in Unicode scalar values (`chars()`), bounds inclusive
pub fn validate_length(s: &str, min: usize, max: usize) -> Result<(), String> {
    let len = s.chars().count();
    if len >= min && len <= max {
        Ok(())
    } else {
        Err(format!("Must be {}-{} characters.", min, max))
    }
}

/// Validates a free-text field
///
/// A blank value fails only when `required`. Length bounds apply to the
/// untrimmed value, and only once the field has content. Length is counted
/// in Unicode scalar values (`chars()`), not bytes or UTF-16 code units, so
/// `"Zoë"` is three characters and an emoji outside the BMP counts as one.
///
/// # Errors
///
/// `ContractViolation::InvalidBounds` when `min_len > max_len`.
pub fn validate_text(
    value: &str,
    min_len: usize,
    max_len: usize,
    required: bool,
) -> Result<Verdict, ContractViolation> {
    if min_len > max_len {
        return Err(ContractViolation::InvalidBounds {
            min: min_len,
            max: max_len,
        });
    }

    if !validate_required(value) {
        return Ok(if required {
            Verdict::invalid(REQUIRED_MESSAGE)
        } else {
            Verdict::Valid
        });
    }

    Ok(validate_length(value, min_len, max_len).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(validate_required("Male"));
        assert!(!validate_required(" "));
        assert!(!validate_required(""));
        assert!(validate_required(" x "));
    }

    #[test]
    fn test_required_text() {
        assert_eq!(validate_text("John", 2, 50, true), Ok(Verdict::Valid));
        assert_eq!(validate_text("Doe", 2, 50, true), Ok(Verdict::Valid));
        assert_eq!(
            validate_text("J", 2, 50, true),
            Ok(Verdict::invalid("Must be 2-50 characters."))
        );
        assert_eq!(
            validate_text(&"A".repeat(51), 2, 50, true),
            Ok(Verdict::invalid("Must be 2-50 characters."))
        );
        assert_eq!(
            validate_text("", 2, 50, true),
            Ok(Verdict::invalid("This field is required."))
        );
        assert_eq!(
            validate_text("   ", 2, 50, true),
            Ok(Verdict::invalid("This field is required."))
        );
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(validate_text("", 2, 50, false), Ok(Verdict::Valid));
        assert_eq!(validate_text("  ", 2, 50, false), Ok(Verdict::Valid));
        assert!(validate_text("J", 2, 50, false).unwrap().is_invalid());
    }

    #[test]
    fn test_length_measured_untrimmed() {
        // " J" is two characters even though it trims to one
        assert_eq!(validate_text(" J", 2, 50, true), Ok(Verdict::Valid));
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(validate_text("Zoë", 3, 3, true), Ok(Verdict::Valid));
    }

    #[test]
    fn test_inverted_bounds_is_contract_violation() {
        assert_eq!(
            validate_text("John", 10, 2, true),
            Err(ContractViolation::InvalidBounds { min: 10, max: 2 })
        );
    }
}
