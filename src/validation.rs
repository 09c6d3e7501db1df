use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

/// Whole-string email pattern: local part, `@`, domain, and a 2-7 letter
/// final label. Partial matches are rejected.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,7}$").expect("Invalid regex")
});

/// Symbols accepted as the fourth password character class.
const PASSWORD_SYMBOLS: &str = "~`!@#$%^&*()_-+={[}]|:;'<,>.?/";

/// Check email syntax.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check phone number syntax: exactly 8 digits after stripping spaces.
pub fn is_valid_phone(phone_no: &str) -> bool {
    let digits: String = phone_no.chars().filter(|c| *c != ' ').collect();
    digits.len() == 8 && digits.chars().all(|c| c.is_ascii_digit())
}

/// Check password strength.
///
/// At least 8 characters, with a lowercase letter, an uppercase letter, a
/// digit and a symbol all present. Every character must fall into exactly
/// one of those four classes, so whitespace or characters outside the
/// symbol set reject the password.
pub fn is_strong_password(password: &str) -> bool {
    let mut lower = 0;
    let mut upper = 0;
    let mut digit = 0;
    let mut symbol = 0;

    if password.chars().count() >= 8 {
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                lower += 1;
            }
            if c.is_ascii_uppercase() {
                upper += 1;
            }
            if c.is_ascii_digit() {
                digit += 1;
            }
            if PASSWORD_SYMBOLS.contains(c) {
                symbol += 1;
            }
        }
    }

    lower >= 1
        && upper >= 1
        && digit >= 1
        && symbol >= 1
        && lower + upper + digit + symbol == password.chars().count()
}

/// Validate the writable account fields together. First failing field wins.
pub fn validate_account(
    email: &str,
    phone_no: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    if !is_valid_phone(phone_no) {
        return Err(ValidationError::InvalidPhone(phone_no.to_string()));
    }
    if !is_strong_password(password) {
        return Err(ValidationError::WeakPassword);
    }
    Ok(())
}
