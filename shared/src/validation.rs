//! Validation rules for advisory requests

use crate::models::AdvisoryRequest;

/// Message returned when any required field is missing or empty.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Location, date, and requester_name are required";

/// Check that location, date, and requester_name are all present and
/// non-empty.
pub fn validate_required_fields(request: &AdvisoryRequest) -> Result<(), &'static str> {
    if has_text(request.location.as_deref())
        && has_text(request.date.as_deref())
        && has_text(request.requester_name.as_deref())
    {
        Ok(())
    } else {
        Err(REQUIRED_FIELDS_MESSAGE)
    }
}

/// A field counts as present when it carries a non-empty string. No trimming:
/// whitespace-only values pass.
pub fn has_text(field: Option<&str>) -> bool {
    field.map(|value| !value.is_empty()).unwrap_or(false)
}
