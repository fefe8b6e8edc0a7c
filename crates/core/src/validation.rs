//! Field-level validation helpers.
//!
//! Transfer shapes declare their constraints with `#[derive(Validate)]`;
//! this module flattens the resulting [`ValidationErrors`] into a
//! field -> messages map suitable for an error response body.

use std::collections::BTreeMap;

use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::types::DbId;

/// Messages keyed by the offending field name, sorted for stable output.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Flatten validator output into a [`FieldErrors`] map.
///
/// Uses the declared `message` when present and falls back to the
/// validator code (e.g. `length`, `range`).
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs.iter().map(message_for).collect();
            (field.to_string(), messages)
        })
        .collect()
}

fn message_for(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::InvalidFields(field_errors(&errors))
    }
}

/// Custom validator: identity is store-assigned, so a client may only
/// send it as `0` (or omit it).
pub fn unassigned_id(id: &DbId) -> Result<(), ValidationError> {
    if *id != 0 {
        let mut err = ValidationError::new("assigned_id");
        err.message = Some("id is assigned by the server and must be omitted or 0".into());
        return Err(err);
    }
    Ok(())
}

/// Custom validator: text columns cannot store NUL characters.
pub fn no_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        let mut err = ValidationError::new("nul_character");
        err.message = Some("must not contain NUL characters".into());
        return Err(err);
    }
    Ok(())
}

/// [`no_nul`] applied to every item of a text list.
pub fn no_nul_items(values: &[String]) -> Result<(), ValidationError> {
    values.iter().try_for_each(|value| no_nul(value))
}
