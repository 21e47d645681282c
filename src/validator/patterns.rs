//! Pre-compiled patterns and normalization helpers for format rules.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern must compile")
});

// Indonesian mobile numbers: +62/62/0 prefix, then 8, then 7-10 digits.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+62|62|0)8[1-9][0-9]{6,9}$").expect("phone pattern must compile")
});

pub fn is_valid_email(input: &str) -> bool {
    EMAIL.is_match(input)
}

/// Strips the separators users habitually type into phone numbers
/// (whitespace, `-`, `(`, `)`, `.`) before pattern matching.
pub fn normalize_phone(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')' | '.'))
        .collect()
}

pub fn is_valid_phone(input: &str) -> bool {
    PHONE.is_match(&normalize_phone(input))
}

/// Canonicalizes an Indonesian mobile number to the `+62...` form.
/// Input that does not look like a local number is returned unchanged.
pub fn format_phone_number(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if let Some(rest) = digits.strip_prefix('0') {
        format!("+62{rest}")
    } else if digits.starts_with("62") {
        format!("+{digits}")
    } else if digits.starts_with('8') {
        format!("+62{digits}")
    } else {
        input.to_string()
    }
}
