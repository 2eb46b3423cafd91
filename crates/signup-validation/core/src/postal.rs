//! Postal/ZIP code validation, parameterized by country

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::text::validate_required;
use crate::verdict::Verdict;

/// Country-specific patterns, matched by exact country name
static COUNTRY_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        ("United States", Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").unwrap()),
        (
            "United Kingdom",
            Regex::new(r"^[A-Z]{1,2}[0-9][A-Z0-9]? ?[0-9][A-Z]{2}$").unwrap(),
        ),
    ]
});

/// Fallback for every other country: 3-10 letters, digits, spaces or hyphens
static DEFAULT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9\s\-]{3,10}$").unwrap());

static BUILTIN: Lazy<PostalPatterns> = Lazy::new(PostalPatterns::new);

/// Lookup table of postal code patterns
///
/// Built-in countries always win; extra countries come from configuration.
#[derive(Debug, Clone, Default)]
pub struct PostalPatterns {
    extra: HashMap<String, Regex>,
}

impl PostalPatterns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pattern for a country not covered by the built-in table
    pub fn with_country(mut self, country: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        self.extra.insert(country.into(), Regex::new(pattern)?);
        Ok(self)
    }

    /// Pattern applied for `country`, falling back to the default pattern
    pub fn pattern_for(&self, country: &str) -> &Regex {
        COUNTRY_PATTERNS
            .iter()
            .find(|(name, _)| *name == country)
            .map(|(_, regex)| regex)
            .or_else(|| self.extra.get(country))
            .unwrap_or(&*DEFAULT_PATTERN)
    }

    pub fn validate(&self, value: &str, country: &str) -> Verdict {
        if !validate_required(value) {
            return Verdict::invalid("Postal/Zip code is required.");
        }

        if !self.pattern_for(country).is_match(value) {
            return Verdict::invalid(format!("Invalid postal code for {}.", country));
        }

        Verdict::Valid
    }
}

/// Validates against the built-in table only
pub fn validate_postal_code(value: &str, country: &str) -> Verdict {
    BUILTIN.validate(value, country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_postal_codes() {
        assert_eq!(validate_postal_code("10001", "United States"), Verdict::Valid);
        assert_eq!(validate_postal_code("10001-1234", "United States"), Verdict::Valid);
        assert_eq!(
            validate_postal_code("ABCDE", "United States").message(),
            "Invalid postal code for United States."
        );
    }

    #[test]
    fn test_uk_postal_codes() {
        assert_eq!(validate_postal_code("SW1A 1AA", "United Kingdom"), Verdict::Valid);
        assert_eq!(validate_postal_code("AB12 3CD", "United Kingdom"), Verdict::Valid);
        assert_eq!(validate_postal_code("M11AE", "United Kingdom"), Verdict::Valid);
        assert_eq!(
            validate_postal_code("12345", "United Kingdom").message(),
            "Invalid postal code for United Kingdom."
        );
        // Lowercase is not accepted
        assert!(validate_postal_code("sw1a 1aa", "United Kingdom").is_invalid());
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic and fullwidth digits are not ZIP/postcode digits
        assert!(validate_postal_code("١٠٠٠١", "United States").is_invalid());
        assert!(validate_postal_code("１２３４５", "United States").is_invalid());
        assert!(validate_postal_code("10001-١٢٣٤", "United States").is_invalid());
        assert!(validate_postal_code("SW١A ١AA", "United Kingdom").is_invalid());
    }

    #[test]
    fn test_default_pattern() {
        assert_eq!(validate_postal_code("12345", "Unknown"), Verdict::Valid);
        assert_eq!(validate_postal_code("75008", "France"), Verdict::Valid);
        assert!(validate_postal_code("12", "France").is_invalid());
        assert!(validate_postal_code("12345678901", "France").is_invalid());
        // Country names are matched exactly
        assert_eq!(validate_postal_code("ABCDE", "united states"), Verdict::Valid);
    }

    #[test]
    fn test_empty_postal_code() {
        assert_eq!(
            validate_postal_code("", "United States").message(),
            "Postal/Zip code is required."
        );
    }

    #[test]
    fn test_message_interpolates_country_verbatim() {
        assert_eq!(
            validate_postal_code("!", "").message(),
            "Invalid postal code for ."
        );
    }

    #[test]
    fn test_extra_country() {
        let patterns = PostalPatterns::new()
            .with_country("Canada", r"^[A-Z]\d[A-Z] ?\d[A-Z]\d$")
            .unwrap();
        assert_eq!(patterns.validate("K1A 0B1", "Canada"), Verdict::Valid);
        assert!(patterns.validate("12345", "Canada").is_invalid());
        assert_eq!(patterns.validate("12345", "Germany"), Verdict::Valid);
    }

    #[test]
    fn test_builtin_country_not_overridden() {
        let patterns = PostalPatterns::new()
            .with_country("United States", r"^.*$")
            .unwrap();
        assert!(patterns.validate("ABCDE", "United States").is_invalid());
    }

    #[test]
    fn test_bad_extra_pattern() {
        assert!(PostalPatterns::new().with_country("Nowhere", "(").is_err());
    }
}
