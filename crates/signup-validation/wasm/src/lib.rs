//! Signup Validation WASM
//!
//! WebAssembly bindings for the signup form validator.
//! Provides real-time client-side validation using the same rules as server-side.

use serde::Serialize;
use signup_validation_core as core;
use signup_validation_core::{FieldId, FormValidator, FormValues};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Outcome for one field, as seen by JavaScript
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldOutcome {
    pub field: String,
    pub message: String,
    pub is_invalid: bool,
}

/// Outcome for the whole form
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormOutcome {
    pub all_valid: bool,
    pub fields: Vec<FieldOutcome>,
}

fn outcome(field: &str, verdict: core::Verdict) -> FieldOutcome {
    FieldOutcome {
        field: field.to_string(),
        is_invalid: verdict.is_invalid(),
        message: verdict.into(),
    }
}

fn parse_values(values: JsValue) -> Result<FormValues, JsValue> {
    serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))
}

fn fault(err: core::ContractViolation) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Validate one field of an already decoded form
pub fn field_outcome(field_id: &str, values: FormValues) -> Result<FieldOutcome, core::ContractViolation> {
    let verdict = FormValidator::new(values).validate_field(field_id)?;
    Ok(outcome(field_id, verdict))
}

/// Validate every field of an already decoded form
pub fn form_outcome(values: FormValues) -> Result<FormOutcome, core::ContractViolation> {
    let result = FormValidator::new(values).validate_all()?;

    Ok(FormOutcome {
        all_valid: result.all_valid,
        fields: result
            .fields
            .into_iter()
            .map(|report| outcome(report.field.as_str(), report.verdict))
            .collect(),
    })
}

/// Validate one field against the current form values
///
/// # Example (JavaScript)
/// ```javascript
/// const { message, isInvalid } = validateField('postal-code', {
///     'postal-code': 'SW1A 1AA',
///     country: 'United Kingdom',
/// });
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_id: &str, values: JsValue) -> Result<JsValue, JsValue> {
    let field = field_outcome(field_id, parse_values(values)?).map_err(fault)?;
    Ok(serde_wasm_bindgen::to_value(&field)?)
}

/// Validate every field in submission order
#[wasm_bindgen(js_name = validateAllFields)]
pub fn validate_all_fields(values: JsValue) -> Result<JsValue, JsValue> {
    let form = form_outcome(parse_values(values)?).map_err(fault)?;
    Ok(serde_wasm_bindgen::to_value(&form)?)
}

/// Fields to re-validate when `fieldId` changes (country → postal-code)
#[wasm_bindgen(js_name = dependentFields)]
pub fn dependent_fields(field_id: &str) -> Vec<String> {
    field_id
        .parse::<FieldId>()
        .map(|field| {
            core::rules::dependents_of(field)
                .into_iter()
                .map(|dependent| dependent.as_str().to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::is_valid_email(email)
}

/// Quick phone validation, returns the error message if any
#[wasm_bindgen(js_name = validatePhone)]
pub fn validate_phone_js(phone: &str) -> Option<String> {
    core::validate_phone(phone).into_result().err()
}

/// Quick postal code validation, returns the error message if any
#[wasm_bindgen(js_name = validatePostalCode)]
pub fn validate_postal_code_js(value: &str, country: &str) -> Option<String> {
    core::validate_postal_code(value, country).into_result().err()
}
