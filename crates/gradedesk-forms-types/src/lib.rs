//! Validated registration types for GradeDesk
//!
//! Newtype wrappers built with `nutype` whose predicates are the same
//! validators the registration page runs in the browser, so a value that
//! passes client-side validation always constructs here and vice versa.
//!
//! # Types
//!
//! - `FullName` - surname and first name, optional patronymic
//! - `EmailAddress` - permissive `local@domain.tld` address
//! - `Username` - ASCII letters, digits and underscores
//! - `PhoneNumber` - 11 digits, typed or masked
//! - `RegistrationForm` - an accepted registration with all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use gradedesk_forms_types::{RegistrationForm, RegistrationInput};
//!
//! let form = RegistrationForm::try_from(input)?;
//! let name = form.full_name.parts();
//! save_profile(&name.last_name, &name.first_name, form.phone.digits());
//! ```

use nutype::nutype;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use thiserror::Error;

pub use gradedesk_validation::{FormReport, RegistrationInput};

use gradedesk_validation::{
    phone_digits, validate_email, validate_full_name, validate_phone, validate_username,
};

// =============================================================================
// Field Types
// =============================================================================

/// Full name, surname first (e.g. "Иванов Алексей Петрович")
///
/// **Rule**: Latin or Cyrillic letters, spaces and hyphens; at least two words.
/// Surrounding whitespace is trimmed.
#[nutype(
    sanitize(trim),
    validate(predicate = validate_full_name),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct FullName(String);

/// Email address
///
/// **Rule**: `local@domain.tld` with no whitespace. Deliberately permissive.
#[nutype(
    validate(predicate = validate_email),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct EmailAddress(String);

/// Login name
///
/// **Rule**: Non-empty; ASCII letters, digits and underscores only.
#[nutype(
    validate(predicate = validate_username),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Username(String);

/// Phone number as entered, e.g. "+7 (900) 123-45-67"
///
/// **Rule**: Exactly 11 digits once formatting characters are removed.
#[nutype(
    validate(predicate = validate_phone),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// The 11 digits without formatting, e.g. "79001234567"
    pub fn digits(&self) -> String {
        phone_digits(self)
    }
}

/// A full name split into the parts stored on the teacher profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub last_name: String,
    pub first_name: String,
    pub patronymic: Option<String>,
}

impl FullName {
    /// Splits "Surname Name Patronymic" into its parts.
    ///
    /// Anything after the second word is kept as the patronymic.
    pub fn parts(&self) -> NameParts {
        let mut words = self.split_whitespace();
        let last_name = words.next().unwrap_or_default().to_string();
        let first_name = words.next().unwrap_or_default().to_string();
        let rest: Vec<&str> = words.collect();

        NameParts {
            last_name,
            first_name,
            patronymic: (!rest.is_empty()).then(|| rest.join(" ")),
        }
    }
}

// =============================================================================
// Password
// =============================================================================

/// Accepted password, never printed
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// The raw password, for hashing
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

// =============================================================================
// Form validation
// =============================================================================

/// Trait for types that can be validated
pub trait Validate {
    /// Validates the value and returns validation errors
    ///
    /// Returns Ok(()) if valid, or Err with a map of field names to error messages
    /// Each field can have multiple validation errors
    fn validate(&self) -> Result<(), HashMap<String, Vec<String>>>;
}

impl Validate for RegistrationInput {
    fn validate(&self) -> Result<(), HashMap<String, Vec<String>>> {
        let report = FormReport::evaluate(self);
        if report.is_valid() {
            Ok(())
        } else {
            Err(report.errors().into_iter().collect())
        }
    }
}

/// Longest surname, first name or patronymic the teacher profile stores
pub const NAME_PART_MAX_CHARS: usize = 100;

/// Longest phone value the teacher profile stores
pub const PHONE_MAX_CHARS: usize = 20;

/// Why a registration was not accepted
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("registration form has invalid fields: {}", join_keys(.fields))]
    Invalid {
        fields: BTreeMap<String, Vec<String>>,
    },

    #[error("{field} is too long: {actual} characters, at most {max} allowed")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    // The newtype variants below are produced when a caller builds a field
    // with `try_new` and propagates with `?`; `RegistrationForm::try_from`
    // reports rule violations through `Invalid` first.
    #[error("invalid full name: {0}")]
    FullName(#[from] FullNameError),

    #[error("invalid email: {0}")]
    Email(#[from] EmailAddressError),

    #[error("invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("invalid phone number: {0}")]
    Phone(#[from] PhoneNumberError),
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), RegistrationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(RegistrationError::TooLong { field, max, actual });
    }
    Ok(())
}

fn join_keys(fields: &BTreeMap<String, Vec<String>>) -> String {
    fields.keys().cloned().collect::<Vec<_>>().join(", ")
}

/// A registration that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: FullName,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
    pub username: Username,
    pub password: Password,
}

impl TryFrom<RegistrationInput> for RegistrationForm {
    type Error = RegistrationError;

    fn try_from(input: RegistrationInput) -> Result<Self, Self::Error> {
        let report = FormReport::evaluate(&input);
        if !report.is_valid() {
            return Err(RegistrationError::Invalid {
                fields: report.errors(),
            });
        }

        let full_name = FullName::try_new(input.full_name)?;
        let parts = full_name.parts();
        check_length("last_name", &parts.last_name, NAME_PART_MAX_CHARS)?;
        check_length("first_name", &parts.first_name, NAME_PART_MAX_CHARS)?;
        if let Some(patronymic) = &parts.patronymic {
            check_length("patronymic", patronymic, NAME_PART_MAX_CHARS)?;
        }

        let phone = PhoneNumber::try_new(input.phone)?;
        check_length("phone", &phone, PHONE_MAX_CHARS)?;

        Ok(Self {
            full_name,
            phone,
            email: EmailAddress::try_new(input.email)?,
            username: Username::try_new(input.username)?,
            password: Password(input.password1),
        })
    }
}
