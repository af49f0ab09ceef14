//! Phone number validation and the `+7 (XXX) XXX-XX-XX` input mask

/// Number of digits in a full Russian phone number, country code included.
pub const PHONE_DIGITS: usize = 11;

/// Extracts the ASCII digits of a phone number as typed or masked.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Validates a phone number by stripping everything but digits.
///
/// Works on raw, partially typed and masked values alike:
/// `"+7 (900) 123-45-67"` and `"79001234567"` are both valid.
pub fn validate_phone(phone: &str) -> bool {
    phone.chars().filter(char::is_ascii_digit).count() == PHONE_DIGITS
}

/// Formats the phone field as the user types.
///
/// Keeps the first eleven digits and lays them out as
/// `+7 (XXX) XXX-XX-XX`. The first digit is the country code slot and is
/// always displayed as `+7`, so a leading `8` becomes `+7` as well.
/// Partial input produces a partial mask (`"+7 (90"`), and masking an
/// already masked value returns it unchanged.
pub fn format_phone_mask(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();
    let len = digits.len();

    let mut formatted = String::from("+7 ");
    if len > 1 {
        formatted.push('(');
        formatted.push_str(slice(&digits, 1, 4));
    }
    if len >= 4 {
        formatted.push_str(") ");
        formatted.push_str(slice(&digits, 4, 7));
    }
    if len >= 7 {
        formatted.push('-');
        formatted.push_str(slice(&digits, 7, 9));
    }
    if len >= 9 {
        formatted.push('-');
        formatted.push_str(slice(&digits, 9, 11));
    }
    formatted
}

// Digits are ASCII, so byte offsets are char offsets
fn slice(digits: &str, start: usize, end: usize) -> &str {
    let end = end.min(digits.len());
    let start = start.min(end);
    &digits[start..end]
}
