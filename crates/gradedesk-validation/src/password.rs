//! Password requirement checks
//!
//! A password is accepted when all five requirements hold. Each requirement
//! is computed on its own so the registration page can tick or cross every
//! line of its checklist independently.

use serde::{Deserialize, Serialize};

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Special characters allowed in a password besides ASCII letters and digits
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*()_+=-";

/// Well-known weak passwords, compared case-insensitively
pub static COMMON_PASSWORDS: &[&str] = &[
    "password",
    "12345678",
    "qwerty",
    "admin",
    "1234567890",
    "11111111",
    "password1",
    "123123123",
    "abc123",
    "qwerty123",
];

/// One line of the password checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PasswordRequirement {
    Length,
    Latin,
    NotOnlyDigits,
    NotCommon,
    NotPersonal,
}

impl PasswordRequirement {
    /// All requirements in checklist order
    pub const ALL: [PasswordRequirement; 5] = [
        PasswordRequirement::Length,
        PasswordRequirement::Latin,
        PasswordRequirement::NotOnlyDigits,
        PasswordRequirement::NotCommon,
        PasswordRequirement::NotPersonal,
    ];

    /// Key used in serialized requirement maps
    pub fn key(self) -> &'static str {
        match self {
            PasswordRequirement::Length => "length",
            PasswordRequirement::Latin => "latin",
            PasswordRequirement::NotOnlyDigits => "notOnlyDigits",
            PasswordRequirement::NotCommon => "notCommon",
            PasswordRequirement::NotPersonal => "notPersonal",
        }
    }

    /// Id of the checklist element on the registration page
    pub fn element_id(self) -> &'static str {
        match self {
            PasswordRequirement::Length => "req-length",
            PasswordRequirement::Latin => "req-latin",
            PasswordRequirement::NotOnlyDigits => "req-not-only-digits",
            PasswordRequirement::NotCommon => "req-not-common",
            PasswordRequirement::NotPersonal => "req-not-personal",
        }
    }

    /// Human-readable checklist line
    pub fn description(self) -> &'static str {
        match self {
            PasswordRequirement::Length => "At least 8 characters",
            PasswordRequirement::Latin => {
                "Only Latin letters, digits and the symbols !@#$%^&*()_+=-"
            }
            PasswordRequirement::NotOnlyDigits => "Not made of digits only",
            PasswordRequirement::NotCommon => "Not a commonly used password",
            PasswordRequirement::NotPersonal => {
                "Does not contain your name, email or username"
            }
        }
    }
}

/// Outcome of every password requirement.
///
/// Serializes to an object with exactly the keys `length`, `latin`,
/// `notOnlyDigits`, `notCommon` and `notPersonal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRequirements {
    pub length: bool,
    pub latin: bool,
    pub not_only_digits: bool,
    pub not_common: bool,
    pub not_personal: bool,
}

impl PasswordRequirements {
    /// Outcome of a single requirement
    pub fn get(&self, requirement: PasswordRequirement) -> bool {
        match requirement {
            PasswordRequirement::Length => self.length,
            PasswordRequirement::Latin => self.latin,
            PasswordRequirement::NotOnlyDigits => self.not_only_digits,
            PasswordRequirement::NotCommon => self.not_common,
            PasswordRequirement::NotPersonal => self.not_personal,
        }
    }

    /// Every requirement with its outcome, in checklist order
    pub fn iter(&self) -> impl Iterator<Item = (PasswordRequirement, bool)> + '_ {
        PasswordRequirement::ALL.into_iter().map(move |r| (r, self.get(r)))
    }

    /// Requirements that are not met
    pub fn failed(&self) -> Vec<PasswordRequirement> {
        self.iter().filter(|(_, met)| !met).map(|(r, _)| r).collect()
    }

    /// True when the password satisfies every requirement
    pub fn all_met(&self) -> bool {
        self.length && self.latin && self.not_only_digits && self.not_common && self.not_personal
    }
}

/// Computes all five password requirements.
///
/// `full_name`, `email` and `username` are the other field values of the
/// form; the password must not contain any of them. Empty values are
/// ignored, so the personal-info check passes while those fields are blank.
pub fn check_password_requirements(
    password: &str,
    full_name: &str,
    email: &str,
    username: &str,
) -> PasswordRequirements {
    PasswordRequirements {
        length: password.chars().count() >= MIN_PASSWORD_LENGTH,
        latin: is_latin_charset(password),
        not_only_digits: !is_only_digits(password),
        not_common: !is_common_password(password),
        not_personal: !is_similar_to_personal_info(password, full_name, email, username),
    }
}

/// True iff all five requirements are met
pub fn is_password_valid(requirements: &PasswordRequirements) -> bool {
    requirements.all_met()
}

fn is_latin_charset(password: &str) -> bool {
    !password.is_empty()
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIAL_CHARS.contains(c))
}

fn is_only_digits(password: &str) -> bool {
    !password.is_empty() && password.chars().all(|c| c.is_ascii_digit())
}

/// Checks the password against the list of well-known weak passwords
pub fn is_common_password(password: &str) -> bool {
    let lower = password.to_lowercase();
    COMMON_PASSWORDS.contains(&lower.as_str())
}

/// Checks whether the password contains the user's name, email login or username.
///
/// Candidates are the whole full name, its first and second space-separated
/// words, the part of the email before `@` and the username, all compared
/// case-insensitively.
pub fn is_similar_to_personal_info(
    password: &str,
    full_name: &str,
    email: &str,
    username: &str,
) -> bool {
    let password = password.to_lowercase();
    let mut name_words = full_name.split(' ');
    let candidates = [
        Some(full_name),
        name_words.next(),
        name_words.next(),
        email.split('@').next(),
        Some(username),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter(|info| !info.is_empty())
        .any(|info| password.contains(&info.to_lowercase()))
}
