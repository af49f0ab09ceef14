//! GradeDesk Validation WASM
//!
//! WebAssembly bindings for the registration form validators.
//! The registration page calls these from its input and submit handlers and
//! keeps all DOM updates on the JavaScript side.

use gradedesk_validation as core;
use gradedesk_validation::{Field, FormReport, PasswordRequirements, RegistrationInput};
use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    web_sys::console::debug_1(&JsValue::from_str("gradedesk validation loaded"));
}

/// Whole-form verdict returned to JavaScript
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FormVerdict {
    pub valid: bool,
    pub report: FormReport,
    pub errors: BTreeMap<String, Vec<String>>,
}

#[wasm_bindgen(js_name = validateFullName)]
pub fn validate_full_name_js(full_name: &str) -> bool {
    core::validate_full_name(full_name)
}

#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email_js(email: &str) -> bool {
    core::validate_email(email)
}

#[wasm_bindgen(js_name = validateUsername)]
pub fn validate_username_js(username: &str) -> bool {
    core::validate_username(username)
}

#[wasm_bindgen(js_name = validatePhone)]
pub fn validate_phone_js(phone: &str) -> bool {
    core::validate_phone(phone)
}

/// Phone input mask, `+7 (XXX) XXX-XX-XX`
#[wasm_bindgen(js_name = formatPhoneMask)]
pub fn format_phone_mask_js(phone: &str) -> String {
    core::format_phone_mask(phone)
}

#[wasm_bindgen(js_name = passwordsMatch)]
pub fn passwords_match_js(password1: &str, password2: &str) -> bool {
    core::passwords_match(password1, password2)
}

/// Password checklist
///
/// # Returns
/// `{ length, latin, notOnlyDigits, notCommon, notPersonal }`, all booleans
#[wasm_bindgen(js_name = checkPasswordRequirements)]
pub fn check_password_requirements_js(
    password: &str,
    full_name: &str,
    email: &str,
    username: &str,
) -> Result<JsValue, JsValue> {
    let requirements = core::check_password_requirements(password, full_name, email, username);
    Ok(serde_wasm_bindgen::to_value(&requirements)?)
}

/// True when every entry of a checklist object is met
#[wasm_bindgen(js_name = isPasswordValid)]
pub fn is_password_valid_js(requirements: JsValue) -> Result<bool, JsValue> {
    let requirements: PasswordRequirements = serde_wasm_bindgen::from_value(requirements)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse requirements: {}", e)))?;
    Ok(core::is_password_valid(&requirements))
}

/// Submit gate
#[wasm_bindgen(js_name = isFormValid)]
pub fn is_form_valid_js(
    full_name: &str,
    phone: &str,
    email: &str,
    username: &str,
    password1: &str,
    password2: &str,
) -> bool {
    core::is_form_valid(full_name, phone, email, username, password1, password2)
}

/// Validate the whole form
///
/// # Arguments
/// * `fields` - JavaScript object with `full_name`, `phone`, `email`,
///   `username`, `password1` and `password2`
///
/// # Returns
/// `{ valid, report, errors }` where `errors` maps field ids to messages
///
/// # Example (JavaScript)
/// ```javascript
/// const { valid, errors } = validateForm({
///     full_name: 'Иванов Алексей',
///     phone: '+7 (900) 123-45-67',
///     email: 'teacher@school.ru',
///     username: 'math_teacher',
///     password1: secret,
///     password2: secretAgain,
/// });
/// submitBtn.disabled = !valid;
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(fields: JsValue) -> Result<JsValue, JsValue> {
    let input = parse_fields(fields)?;
    let report = FormReport::evaluate(&input);
    let verdict = FormVerdict {
        valid: report.is_valid(),
        errors: report.errors(),
        report,
    };
    Ok(serde_wasm_bindgen::to_value(&verdict)?)
}

/// Feedback for an edited field
///
/// # Arguments
/// * `field_id` - Id of the input that fired (`full_name`, `phone`, ...)
/// * `fields` - Current values of all six fields
///
/// # Returns
/// `{ field, valid, requirements, maskedPhone, submitEnabled }`
#[wasm_bindgen(js_name = onInput)]
pub fn on_input(field_id: &str, fields: JsValue) -> Result<JsValue, JsValue> {
    let field: Field = field_id
        .parse()
        .map_err(|e: core::UnknownField| JsValue::from_str(&e.to_string()))?;
    let input = parse_fields(fields)?;
    let feedback = core::on_input(field, &input);
    Ok(serde_wasm_bindgen::to_value(&feedback)?)
}

fn parse_fields(fields: JsValue) -> Result<RegistrationInput, JsValue> {
    serde_wasm_bindgen::from_value(fields)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form fields: {}", e)))
}
