//! Field rule table
//!
//! Maps every field to the validator and fixed parameters that apply to it.
//! Adding a field means adding a row here, not a new branch in the dispatcher.

use crate::field::FieldId;

/// Validator selection plus its fixed parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Free text with inclusive length bounds
    Text {
        min: usize,
        max: usize,
        required: bool,
    },
    /// Selection that must not be blank
    Required { message: &'static str },
    DateOfBirth,
    /// Postal code whose format depends on another field's value
    PostalCode { country_field: FieldId },
    Email,
    Phone,
    /// Checkbox that must be checked
    Accepted { message: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: FieldId,
    pub rule: Rule,
}

impl FieldRule {
    /// Other field whose current value this rule reads
    pub fn dependency(&self) -> Option<FieldId> {
        match self.rule {
            Rule::PostalCode { country_field } => Some(country_field),
            _ => None,
        }
    }

    /// Whether the rule reads a checkbox rather than text
    pub fn expects_checkbox(&self) -> bool {
        matches!(self.rule, Rule::Accepted { .. })
    }
}

const NAME: Rule = Rule::Text { min: 2, max: 50, required: true };
const OPTIONAL_NAME: Rule = Rule::Text { min: 2, max: 50, required: false };
const ADDRESS: Rule = Rule::Text { min: 2, max: 100, required: true };

/// One row per field, in submission order
pub static FIELD_RULES: [FieldRule; 11] = [
    FieldRule { field: FieldId::FirstName, rule: NAME },
    FieldRule { field: FieldId::LastName, rule: OPTIONAL_NAME },
    FieldRule {
        field: FieldId::Gender,
        rule: Rule::Required { message: "Gender is required." },
    },
    FieldRule { field: FieldId::DateOfBirth, rule: Rule::DateOfBirth },
    FieldRule { field: FieldId::AddressLine1, rule: ADDRESS },
    FieldRule { field: FieldId::City, rule: ADDRESS },
    FieldRule {
        field: FieldId::PostalCode,
        rule: Rule::PostalCode { country_field: FieldId::Country },
    },
    FieldRule {
        field: FieldId::Country,
        rule: Rule::Required { message: "Country is required." },
    },
    FieldRule { field: FieldId::Email, rule: Rule::Email },
    FieldRule { field: FieldId::Phone, rule: Rule::Phone },
    FieldRule {
        field: FieldId::Terms,
        rule: Rule::Accepted { message: "You must accept the terms and conditions." },
    },
];

/// Rule for a known field
pub fn rule_for(field: FieldId) -> &'static FieldRule {
    // Rows follow `FieldId::ALL`, checked by `test_table_matches_field_order`
    &FIELD_RULES[field as usize]
}

/// Rule for a field named by string, if the name is known
pub fn lookup(name: &str) -> Option<&'static FieldRule> {
    FIELD_RULES.iter().find(|row| row.field.as_str() == name)
}

/// Fields that must be re-validated when `field` changes
pub fn dependents_of(field: FieldId) -> Vec<FieldId> {
    FIELD_RULES
        .iter()
        .filter(|row| row.dependency() == Some(field))
        .map(|row| row.field)
        .collect()
}
