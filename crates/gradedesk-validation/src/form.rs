//! Form-level submit gate and per-field report

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::field::Field;
use crate::password::{check_password_requirements, PasswordRequirements};
use crate::phone::validate_phone;
use crate::validators::{passwords_match, validate_email, validate_full_name, validate_username};

/// Current values of the registration form, as typed.
///
/// The host owns the values and passes them in on every event; missing
/// fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationInput {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub username: String,
    pub password1: String,
    pub password2: String,
}

impl RegistrationInput {
    /// Value of a single field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Username => &self.username,
            Field::Password1 => &self.password1,
            Field::Password2 => &self.password2,
        }
    }

    /// Replaces a single field value
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FullName => self.full_name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Username => self.username = value,
            Field::Password1 => self.password1 = value,
            Field::Password2 => self.password2 = value,
        }
    }

    /// Password requirements for `password1` against the other fields
    pub fn password_requirements(&self) -> PasswordRequirements {
        check_password_requirements(&self.password1, &self.full_name, &self.email, &self.username)
    }

    /// True when the form may be submitted
    pub fn is_valid(&self) -> bool {
        FormReport::evaluate(self).is_valid()
    }
}

/// Single submit gate for the registration form.
///
/// True iff the full name, phone, email and username are valid, the
/// password meets every requirement, and the confirmation repeats a
/// non-empty password.
pub fn is_form_valid(
    full_name: &str,
    phone: &str,
    email: &str,
    username: &str,
    password1: &str,
    password2: &str,
) -> bool {
    FormReport::check(full_name, phone, email, username, password1, password2).is_valid()
}

/// Outcome of every check on the registration form.
///
/// All checks are computed even when an earlier one fails, so the host can
/// mark every field independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    pub full_name: bool,
    pub phone: bool,
    pub email: bool,
    pub username: bool,
    pub password: PasswordRequirements,
    pub password_confirmation: bool,
}

impl FormReport {
    /// Evaluates every check on the given form values
    pub fn evaluate(input: &RegistrationInput) -> Self {
        Self::check(
            &input.full_name,
            &input.phone,
            &input.email,
            &input.username,
            &input.password1,
            &input.password2,
        )
    }

    fn check(
        full_name: &str,
        phone: &str,
        email: &str,
        username: &str,
        password1: &str,
        password2: &str,
    ) -> Self {
        let report = Self {
            full_name: validate_full_name(full_name),
            phone: validate_phone(phone),
            email: validate_email(email),
            username: validate_username(username),
            password: check_password_requirements(password1, full_name, email, username),
            password_confirmation: passwords_match(password1, password2),
        };

        tracing::trace!(
            full_name = report.full_name,
            phone = report.phone,
            email = report.email,
            username = report.username,
            password = report.password.all_met(),
            password_confirmation = report.password_confirmation,
            "registration form evaluated"
        );

        report
    }

    /// Validity of a single field; `password1` covers all requirements
    pub fn field(&self, field: Field) -> bool {
        match field {
            Field::FullName => self.full_name,
            Field::Phone => self.phone,
            Field::Email => self.email,
            Field::Username => self.username,
            Field::Password1 => self.password.all_met(),
            Field::Password2 => self.password_confirmation,
        }
    }

    /// True iff every check passed
    pub fn is_valid(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.field(field))
    }

    /// Fields that failed, in page order
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&field| !self.field(field))
            .collect()
    }

    /// Error messages by field id, empty when the form is valid.
    ///
    /// The password field gets one message per unmet requirement.
    pub fn errors(&self) -> BTreeMap<String, Vec<String>> {
        let mut errors = BTreeMap::new();

        for field in self.invalid_fields() {
            let messages = match field {
                Field::Password1 => self
                    .password
                    .failed()
                    .into_iter()
                    .map(|r| r.description().to_string())
                    .collect(),
                other => vec![field_message(other).to_string()],
            };
            errors.insert(field.id().to_string(), messages);
        }

        errors
    }
}

/// Short error text the page shows under an invalid field
pub fn field_message(field: Field) -> &'static str {
    match field {
        Field::FullName => "Enter your surname and first name using letters only",
        Field::Phone => "Enter a phone number with 11 digits",
        Field::Email => "Enter a valid email address",
        Field::Username => "Use only Latin letters, digits and underscores",
        Field::Password1 => "Password does not meet the requirements",
        Field::Password2 => "Passwords do not match",
    }
}
