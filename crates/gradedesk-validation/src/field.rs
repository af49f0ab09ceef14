//! Registration form fields

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A field of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FullName,
    Phone,
    Email,
    Username,
    Password1,
    Password2,
}

impl Field {
    /// All fields in page order
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::Phone,
        Field::Email,
        Field::Username,
        Field::Password1,
        Field::Password2,
    ];

    /// Input element id, also used as the field name in error maps
    pub fn id(self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Username => "username",
            Field::Password1 => "password1",
            Field::Password2 => "password2",
        }
    }

    /// Id of the element that shows this field's error text
    pub fn error_id(self) -> String {
        format!("{}_error", self.id())
    }

    /// True for the fields the personal-info password check reads
    pub fn affects_password(self) -> bool {
        matches!(self, Field::FullName | Field::Email | Field::Username)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error for an unknown field id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown registration field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.id() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
