//! Field identifiers and raw field values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a signup form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldId {
    FirstName,
    LastName,
    Gender,
    DateOfBirth,
    #[serde(rename = "address-line-1")]
    AddressLine1,
    City,
    PostalCode,
    Country,
    Email,
    Phone,
    Terms,
}

impl FieldId {
    /// Every field, in submission order
    pub const ALL: [FieldId; 11] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Gender,
        FieldId::DateOfBirth,
        FieldId::AddressLine1,
        FieldId::City,
        FieldId::PostalCode,
        FieldId::Country,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Terms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::FirstName => "first-name",
            FieldId::LastName => "last-name",
            FieldId::Gender => "gender",
            FieldId::DateOfBirth => "date-of-birth",
            FieldId::AddressLine1 => "address-line-1",
            FieldId::City => "city",
            FieldId::PostalCode => "postal-code",
            FieldId::Country => "country",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Terms => "terms",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Current value of a form control
///
/// Text inputs and selects carry a string, checkboxes carry their checked
/// state. A missing control is read as empty text or unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Checked(_) => "checkbox",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        FieldValue::Checked(checked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in FieldId::ALL {
            assert_eq!(field.as_str().parse::<FieldId>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_field_name() {
        let err = "fName".parse::<FieldId>().unwrap_err();
        assert_eq!(err, UnknownField("fName".to_string()));
    }

    #[test]
    fn test_serde_names_match_as_str() {
        let json = serde_json::to_string(&FieldId::AddressLine1).unwrap();
        assert_eq!(json, "\"address-line-1\"");
        let json = serde_json::to_string(&FieldId::DateOfBirth).unwrap();
        assert_eq!(json, "\"date-of-birth\"");
    }

    #[test]
    fn test_field_value_untagged() {
        let text: FieldValue = serde_json::from_str("\"London\"").unwrap();
        assert_eq!(text, FieldValue::text("London"));
        let checked: FieldValue = serde_json::from_str("true").unwrap();
        assert_eq!(checked, FieldValue::Checked(true));
    }
}
