//! Field-level validation rules applied on every write that sets a field.
//!
//! Required text fields must be present and non-empty. Required references
//! must be present and non-zero; `null`, a missing key and `0` are all
//! treated as "absent".

use crate::error::CoreError;
use crate::types::DbId;

/// Require a text field to be present with at least one character,
/// returning the accepted value.
///
/// Whitespace-only values are accepted.
pub fn require_text(field: &str, value: Option<String>) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("Must provide {field}."))),
    }
}

/// Require a foreign-key field to be present and non-zero.
///
/// Existence of the referenced row is left to the store.
pub fn require_reference(field: &str, value: Option<DbId>) -> Result<DbId, CoreError> {
    match value {
        Some(id) if id != 0 => Ok(id),
        _ => Err(CoreError::Validation(format!("Must provide {field}."))),
    }
}
