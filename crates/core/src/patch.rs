//! Applies RFC 6902 edit operations to an editable transfer shape.
//!
//! The target is serialized to a JSON document, patched, and then
//! deserialized back into its concrete type, so a patched value passes
//! through the same schema checks as a request body. Field constraints are
//! checked once, after every operation has been applied.

use json_patch::PatchOperation;
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::error::CoreError;

/// Apply `operations` in order to a copy of `current`.
///
/// - The first operation that cannot be applied (bad pointer, missing
///   target, failed `test`) aborts with [`CoreError::Validation`].
/// - A patched document that no longer matches `T` (unknown field, wrong
///   type, missing required field) is a [`CoreError::Validation`].
/// - Declared field constraints that fail yield
///   [`CoreError::InvalidFields`] with every offending field.
///
/// `current` is never modified.
pub fn apply_patch<T>(current: &T, operations: &[PatchOperation]) -> Result<T, CoreError>
where
    T: Serialize + DeserializeOwned + Validate,
{
    let mut document = serde_json::to_value(current)
        .map_err(|e| CoreError::Internal(format!("Failed to serialize patch target: {e}")))?;

    json_patch::patch(&mut document, operations)
        .map_err(|e| CoreError::Validation(format!("Invalid patch operation: {e}")))?;

    let patched: T = serde_json::from_value(document)
        .map_err(|e| CoreError::Validation(format!("Patched document is invalid: {e}")))?;

    patched.validate()?;
    Ok(patched)
}
