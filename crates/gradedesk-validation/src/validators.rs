//! Text field validators: full name, email, username, password confirmation

use once_cell::sync::Lazy;
use regex::Regex;

// Latin and Cyrillic letters, whitespace and hyphen only
static FULL_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zА-Яа-яЁё\s-]+$").expect("full name pattern is valid"));

// Deliberately permissive: something@something.something, no whitespace
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validates a full name such as "Иванов Алексей".
///
/// Accepts Latin and Cyrillic letters, whitespace and hyphens, and needs at
/// least two whitespace-separated words (surname and first name).
pub fn validate_full_name(full_name: &str) -> bool {
    FULL_NAME_REGEX.is_match(full_name) && full_name.split_whitespace().count() >= 2
}

/// Validates basic email format
///
/// Checks for a non-empty local part, a single `@`, and a domain with at
/// least one dot. Whitespace anywhere rejects the address.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates a login: ASCII letters, digits and underscores, non-empty.
pub fn validate_username(username: &str) -> bool {
    !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The confirmation field is valid when it repeats a non-empty password.
pub fn passwords_match(password1: &str, password2: &str) -> bool {
    !password1.is_empty() && password1 == password2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_full_names() {
        assert!(validate_full_name("Иванов Алексей"));
        assert!(validate_full_name("Иванов Алексей Петрович"));
        assert!(validate_full_name("Ivanov Aleksey"));
        assert!(validate_full_name("Римский-Корсаков Николай"));
        assert!(validate_full_name("Ёлкина Алёна"));
        assert!(validate_full_name("  Иванов   Алексей  "));
    }

    #[test]
    fn test_invalid_full_names() {
        assert!(!validate_full_name(""));
        assert!(!validate_full_name("   "));
        assert!(!validate_full_name("Иванов"));
        assert!(!validate_full_name("Ivan123"));
        assert!(!validate_full_name("Ivan 123"));
        assert!(!validate_full_name("Ivanov, Aleksey"));
        assert!(!validate_full_name("Ivanov Aleksey."));
    }

    #[test]
    fn test_byte_order_mark_is_not_a_separator() {
        // U+FEFF is not Unicode White_Space
        assert!(!validate_full_name("Иванов\u{FEFF}Алексей"));
        assert!(!validate_full_name("\u{FEFF}Иванов Алексей"));
        assert!(validate_email("a\u{FEFF}b@c.de"));
    }

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("teacher@school.ru"));
        assert!(validate_email("first.last+tag@mail.example.org"));
        // Permissive on purpose
        assert!(validate_email("учитель@школа.рф"));
        assert!(validate_email("a@b.c.d"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!validate_email(""));
        assert!(!validate_email("a.b.co"));
        assert!(!validate_email("a @b.co"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a@@b.co"));
        assert!(!validate_email("@b.co"));
        assert!(!validate_email("a@.co"));
        assert!(!validate_email("a@b."));
    }

    #[test]
    fn test_usernames() {
        assert!(validate_username("john_doe1"));
        assert!(validate_username("_"));
        assert!(validate_username("TEACHER"));

        assert!(!validate_username(""));
        assert!(!validate_username("john doe"));
        assert!(!validate_username("john-doe"));
        assert!(!validate_username("иван"));
    }

    #[test]
    fn test_passwords_match() {
        assert!(passwords_match("Kx8#mq2!Lp", "Kx8#mq2!Lp"));
        assert!(!passwords_match("Kx8#mq2!Lp", "Kx8#mq2!lp"));
        assert!(!passwords_match("", ""));
    }
}
