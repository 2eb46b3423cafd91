//! Read access to the current form values

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::field::{FieldId, FieldValue};

/// Where the dispatcher reads field values from
///
/// `None` means the control does not exist; the dispatcher treats it as
/// empty text or an unchecked box.
pub trait FieldSource {
    fn value(&self, field: FieldId) -> Option<FieldValue>;
}

impl<S: FieldSource + ?Sized> FieldSource for &S {
    fn value(&self, field: FieldId) -> Option<FieldValue> {
        (**self).value(field)
    }
}

impl FieldSource for HashMap<FieldId, FieldValue> {
    fn value(&self, field: FieldId) -> Option<FieldValue> {
        self.get(&field).cloned()
    }
}

/// Snapshot of submitted form values keyed by field name
///
/// Deserializes from a flat JSON object of strings and booleans.
/// Keys that do not name a field are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    fields: HashMap<String, FieldValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn with_text(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, FieldValue::Text(value.into()));
        self
    }

    pub fn with_checked(mut self, field: FieldId, checked: bool) -> Self {
        self.set(field, FieldValue::Checked(checked));
        self
    }

    pub fn set(&mut self, field: FieldId, value: FieldValue) {
        self.fields.insert(field.as_str().to_string(), value);
    }

    pub fn remove(&mut self, field: FieldId) -> Option<FieldValue> {
        self.fields.remove(field.as_str())
    }
}

impl FieldSource for FormValues {
    fn value(&self, field: FieldId) -> Option<FieldValue> {
        self.fields.get(field.as_str()).cloned()
    }
}
