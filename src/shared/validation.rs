// src/shared/validation.rs
use email_address::EmailAddress;

/// Trims a submitted text value; `None` when absent or blank.
pub fn required_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn is_valid_email(value: &str) -> bool {
    EmailAddress::is_valid(value)
}

/// Trimmed, lower-cased email; `None` when it is not a syntactically valid address.
pub fn normalize_email(value: &str) -> Option<String> {
    let normalized = value.trim().to_lowercase();
    is_valid_email(&normalized).then_some(normalized)
}
