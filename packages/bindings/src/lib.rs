use napi::Result as NapiResult;
use napi_derive::napi;

use payment_estimator_core::display::{self, FieldKind};
use payment_estimator_core::input::{self, FinanceForm, LeaseForm};
use payment_estimator_core::pricing::{finance, lease};
use payment_estimator_core::CalculationRequest;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

/// Lease quote from a typed `LeaseInput` JSON document.
#[napi]
pub fn compute_lease(input_json: String) -> NapiResult<String> {
    let input: lease::LeaseInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = lease::compute_lease(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Finance quote from a typed `FinanceInput` JSON document.
#[napi]
pub fn compute_finance(input_json: String) -> NapiResult<String> {
    let input: finance::FinanceInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = finance::compute_finance(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Lease quote straight from the form's raw text fields.
#[napi]
pub fn compute_lease_form(form_json: String) -> NapiResult<String> {
    let form: LeaseForm = serde_json::from_str(&form_json).map_err(to_napi_error)?;
    let output = lease::compute_lease(&form.to_input()).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Finance quote straight from the form's raw text fields.
#[napi]
pub fn compute_finance_form(form_json: String) -> NapiResult<String> {
    let form: FinanceForm = serde_json::from_str(&form_json).map_err(to_napi_error)?;
    let output = finance::compute_finance(&form.to_input()).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Tagged request in, computation envelope out.
#[napi]
pub fn calculate(request_json: String) -> NapiResult<String> {
    let request: CalculationRequest = serde_json::from_str(&request_json).map_err(to_napi_error)?;
    let output = payment_estimator_core::calculate(&request).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Field handling
// ---------------------------------------------------------------------------

/// Blur-time reformat of a field (`kind` is "money", "percent" or "months").
#[napi]
pub fn reformat_field(kind: String, text: String) -> NapiResult<String> {
    let kind: FieldKind = kind.parse().map_err(to_napi_error)?;
    Ok(display::reformat_field(kind, &text))
}

/// Decimal strings keep full precision across the JS boundary.
#[napi]
pub fn parse_money(text: String) -> String {
    input::parse_money(&text).to_string()
}

#[napi]
pub fn parse_percent(text: String) -> String {
    input::parse_percent(&text).to_string()
}

#[napi]
pub fn parse_int_only(text: String) -> u32 {
    input::parse_int_only(&text)
}
