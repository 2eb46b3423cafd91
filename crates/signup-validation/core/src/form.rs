//! Form aggregator

use serde::Serialize;

use crate::dispatch::{FieldReport, FormValidator};
use crate::error::ContractViolation;
use crate::field::FieldId;
use crate::source::FieldSource;
use crate::verdict::Verdict;

/// Result of validating every field once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResult {
    pub all_valid: bool,
    pub fields: Vec<FieldReport>,
}

impl FormResult {
    fn from_reports(fields: Vec<FieldReport>) -> Self {
        Self {
            all_valid: fields.iter().all(|report| !report.is_invalid()),
            fields,
        }
    }

    /// Fields with an error, in submission order
    pub fn failing_fields(&self) -> Vec<FieldId> {
        self.fields
            .iter()
            .filter(|report| report.is_invalid())
            .map(|report| report.field)
            .collect()
    }

    pub fn get(&self, field: FieldId) -> Option<&Verdict> {
        self.fields
            .iter()
            .find(|report| report.field == field)
            .map(|report| &report.verdict)
    }

    /// Error text for a field, `""` when valid
    pub fn message(&self, field: FieldId) -> &str {
        self.get(field).map(Verdict::message).unwrap_or("")
    }
}

impl<S: FieldSource> FormValidator<S> {
    /// Validate every field in submission order
    ///
    /// All fields are visited even after a failure so each one gets a
    /// report to render.
    pub fn validate_all(&self) -> Result<FormResult, ContractViolation> {
        let reports = FieldId::ALL
            .iter()
            .map(|&field| self.validate(field))
            .collect::<Result<Vec<_>, _>>()?;

        let result = FormResult::from_reports(reports);

        tracing::debug!(
            all_valid = result.all_valid,
            failing = ?result.failing_fields(),
            "form validated"
        );

        Ok(result)
    }

    /// Shorthand for `validate_all()?.all_valid`
    pub fn is_valid(&self) -> Result<bool, ContractViolation> {
        Ok(self.validate_all()?.all_valid)
    }
}
