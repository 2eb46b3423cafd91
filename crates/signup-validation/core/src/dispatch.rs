//! Field dispatcher
//!
//! Looks up the rule for a field, reads the value(s) it needs from the
//! injected [`FieldSource`] and runs the matching validator.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::config::ValidationConfig;
use crate::date::{validate_date_of_birth_on, DEFAULT_MAX_AGE};
use crate::email::validate_email;
use crate::error::ContractViolation;
use crate::field::{FieldId, FieldValue};
use crate::phone::validate_phone;
use crate::postal::PostalPatterns;
use crate::rules::{self, Rule};
use crate::source::FieldSource;
use crate::text::{validate_required, validate_text};
use crate::verdict::Verdict;

/// Outcome for one field, as handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    pub field: FieldId,
    pub verdict: Verdict,
}

impl FieldReport {
    /// Whether the control should be styled as invalid
    pub fn is_invalid(&self) -> bool {
        self.verdict.is_invalid()
    }

    /// Error text, `""` when valid
    pub fn message(&self) -> &str {
        self.verdict.message()
    }
}

/// Validates fields of one form against the rule table
pub struct FormValidator<S> {
    source: S,
    today: NaiveDate,
    max_age: u32,
    postal: PostalPatterns,
}

impl<S: FieldSource> FormValidator<S> {
    /// Validator with built-in settings, dated to the local calendar day
    pub fn new(source: S) -> Self {
        Self {
            source,
            today: Local::now().date_naive(),
            max_age: DEFAULT_MAX_AGE,
            postal: PostalPatterns::new(),
        }
    }

    /// Validator using loaded configuration
    pub fn with_config(source: S, config: &ValidationConfig) -> anyhow::Result<Self> {
        Ok(Self {
            max_age: config.date_of_birth.max_age,
            postal: config.postal_patterns()?,
            ..Self::new(source)
        })
    }

    /// Pin the date the date of birth rule compares against
    pub fn on(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Validate a known field
    ///
    /// # Errors
    ///
    /// `ContractViolation` if the source returns the wrong kind of value
    /// for a field (text for a checkbox or the reverse).
    pub fn validate(&self, field: FieldId) -> Result<FieldReport, ContractViolation> {
        let verdict = match rules::rule_for(field).rule {
            Rule::Text { min, max, required } => {
                validate_text(&self.text(field)?, min, max, required)?
            }
            Rule::Required { message } => {
                if validate_required(&self.text(field)?) {
                    Verdict::Valid
                } else {
                    Verdict::invalid(message)
                }
            }
            Rule::DateOfBirth => {
                validate_date_of_birth_on(&self.text(field)?, self.today, self.max_age)
            }
            Rule::PostalCode { country_field } => {
                let country = self.text(country_field)?;
                self.postal.validate(&self.text(field)?, &country)
            }
            Rule::Email => validate_email(&self.text(field)?),
            Rule::Phone => validate_phone(&self.text(field)?),
            Rule::Accepted { message } => {
                if self.checked(field)? {
                    Verdict::Valid
                } else {
                    Verdict::invalid(message)
                }
            }
        };

        tracing::debug!(field = %field, invalid = verdict.is_invalid(), "field validated");

        Ok(FieldReport { field, verdict })
    }

    /// Validate a field named by string
    ///
    /// Names outside the rule table are not an error: they validate as
    /// valid and are logged, so a stray control cannot block submission.
    pub fn validate_field(&self, name: &str) -> Result<Verdict, ContractViolation> {
        match rules::lookup(name) {
            Some(row) => Ok(self.validate(row.field)?.verdict),
            None => {
                tracing::warn!(field = name, "no validation rule for field");
                Ok(Verdict::Valid)
            }
        }
    }

    fn text(&self, field: FieldId) -> Result<String, ContractViolation> {
        match self.source.value(field) {
            Some(FieldValue::Text(value)) => Ok(value),
            None => Ok(String::new()),
            Some(other) => Err(ContractViolation::ValueKind {
                field,
                expected: "text",
                found: other.kind(),
            }),
        }
    }

    fn checked(&self, field: FieldId) -> Result<bool, ContractViolation> {
        match self.source.value(field) {
            Some(FieldValue::Checked(checked)) => Ok(checked),
            None => Ok(false),
            Some(other) => Err(ContractViolation::ValueKind {
                field,
                expected: "checkbox",
                found: other.kind(),
            }),
        }
    }
}
