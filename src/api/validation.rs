//! Declarative field-constraint validation for inbound payloads.
//!
//! All applicable rules run and their messages accumulate in declaration
//! order, with no short-circuiting. An empty required field therefore reports
//! both its "required" and its length violation, in that order.
//!
//! Length rules count characters of the raw value; the required and shape
//! rules look at the trimmed value, so padding alone never masks a missing
//! field or a malformed address.

use std::sync::LazyLock;

use regex::Regex;

use super::requests::ContactInput;

/// One `@` with non-empty, whitespace-free text on both sides.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern is valid"));

/// Optional leading `+`, then digits and common separators, at least one digit.
static PHONE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ().-]*[0-9][0-9 ().-]*$").expect("phone pattern is valid"));

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Validate a create/update payload, returning messages in rule order.
///
/// An empty vector means the payload is valid.
pub fn validate_contact(input: &ContactInput) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(&input.first_name) {
        errors.push("First name is required".to_owned());
    }
    let first_len = char_len(&input.first_name);
    if first_len == 0 || first_len > 64 {
        errors.push("First name must be between 1 and 64 characters".to_owned());
    }

    if is_blank(&input.last_name) {
        errors.push("Last name is required".to_owned());
    }
    let last_len = char_len(&input.last_name);
    if last_len == 0 || last_len > 64 {
        errors.push("Last name must be between 1 and 64 characters".to_owned());
    }

    if is_blank(&input.email) {
        errors.push("Email is required".to_owned());
    }
    if !EMAIL_SHAPE.is_match(input.email.trim()) {
        errors.push("Please provide a valid email address".to_owned());
    }
    if char_len(&input.email) > 256 {
        errors.push("Email must not exceed 256 characters".to_owned());
    }

    if is_blank(&input.phone) {
        errors.push("Phone number is required".to_owned());
    }
    if !PHONE_SHAPE.is_match(input.phone.trim()) {
        errors.push("Please provide a valid phone number".to_owned());
    }
    let phone_len = char_len(&input.phone);
    if !(10..=256).contains(&phone_len) {
        errors.push("Phone number must be between 10 and 256 characters".to_owned());
    }

    errors
}

/// Validate a raw search query.
///
/// An empty or whitespace-only query is not an error: it means "return
/// everything". The length rule applies to the trimmed query, the form
/// that is actually matched.
pub fn validate_search_query(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let len = char_len(trimmed);
    if !(3..=100).contains(&len) {
        return vec!["Search query must be between 3 and 100 characters".to_owned()];
    }
    Vec::new()
}
