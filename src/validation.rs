use crate::error::{YaError, YaResult};
use crate::model::ContactId;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> YaResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(YaError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Parses a contact id typed by the user.
pub fn contact_id(value: &str) -> YaResult<ContactId> {
    let trimmed = non_blank(value, "contact id")?;
    trimmed
        .parse::<i64>()
        .map(ContactId::new)
        .map_err(|_| YaError::InvalidContactId { value: trimmed })
}

/// Turns an optional search fragment into a `LIKE` pattern.
/// A missing fragment matches everything; the fragment itself is kept as typed,
/// so a leading `%` still allows matching anywhere in the name.
pub fn like_pattern(spec: Option<&str>) -> String {
    let mut pattern = spec.map(str::trim).unwrap_or_default().to_string();
    pattern.push('%');
    pattern
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
