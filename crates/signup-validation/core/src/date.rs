//! Date of birth validation
//!
//! Dates are compared at day precision. Age is the difference of calendar
//! years, so someone born on 31 December counts a year older on 1 January.

use chrono::{Datelike, Local, NaiveDate};

use crate::text::validate_required;
use crate::verdict::Verdict;

/// Oldest accepted age in whole years
pub const DEFAULT_MAX_AGE: u32 = 120;

pub const DOB_INVALID_MESSAGE: &str = "Please enter a valid date of birth.";
pub const DOB_FUTURE_MESSAGE: &str = "Date of birth cannot be in the future.";

/// Parse the value of a date input
///
/// Accepts `YYYY-MM-DD`, optionally followed by a time part (`T...` or a
/// space), which is ignored.
pub fn parse_date_of_birth(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Validates against the local calendar date
pub fn validate_date_of_birth(value: &str) -> Verdict {
    validate_date_of_birth_on(value, Local::now().date_naive(), DEFAULT_MAX_AGE)
}

/// Validates against an explicit `today`
pub fn validate_date_of_birth_on(value: &str, today: NaiveDate, max_age: u32) -> Verdict {
    if !validate_required(value) {
        return Verdict::invalid("Date of birth is required.");
    }

    let Some(dob) = parse_date_of_birth(value) else {
        return Verdict::invalid(DOB_INVALID_MESSAGE);
    };

    if dob > today {
        return Verdict::invalid(DOB_FUTURE_MESSAGE);
    }

    let age = i64::from(today.year()) - i64::from(dob.year());
    if age < 0 || age > i64::from(max_age) {
        return Verdict::invalid(DOB_INVALID_MESSAGE);
    }

    Verdict::Valid
}
