//! Presence rules for create and update request bodies.
//!
//! Create bodies must carry every required field; the first missing one (in
//! declared order) is reported. Update bodies must carry at least one
//! *truthy* updatable field: `null`, an empty string and the id `0` all count
//! as absent.

use crate::error::CoreError;
use crate::resource::Resource;
use crate::types::DbId;

/// Unwrap a required create-body field, reporting it as missing otherwise.
///
/// Callers check fields in declared order with `?`, so the first absent one
/// is the one reported.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, CoreError> {
    value.ok_or(CoreError::MissingField(field))
}

/// Require that at least one updatable field survived [`truthy_text`] /
/// [`truthy_id`] filtering.
pub fn require_any(resource: Resource, present: &[bool]) -> Result<(), CoreError> {
    if present.iter().any(|p| *p) {
        Ok(())
    } else {
        Err(CoreError::EmptyUpdate(resource))
    }
}

/// Drop empty strings.
pub fn truthy_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Drop the zero id.
pub fn truthy_id(value: Option<DbId>) -> Option<DbId> {
    value.filter(|v| *v != 0)
}
