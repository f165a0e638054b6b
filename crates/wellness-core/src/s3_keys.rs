//! S3 key/path conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of assessment objects in the portal's bucket.
//!
//! Record keys start with a zero-padded creation timestamp in nanoseconds, so
//! lexicographic key order under an owner prefix is creation order.

use crate::models::Assessment;

pub const ASSESSMENTS_PREFIX: &str = "assessments/";

pub fn user_assessments_prefix(user_id: &str) -> String {
    format!("assessments/users/{user_id}/")
}

pub fn session_assessments_prefix(session_id: &str) -> String {
    format!("assessments/sessions/{session_id}/")
}

/// Key for a single assessment record, placed under its owner's prefix.
pub fn assessment(assessment: &Assessment) -> String {
    let prefix = match (&assessment.user_id, &assessment.session_id) {
        (Some(user_id), _) => user_assessments_prefix(user_id),
        (None, Some(session_id)) => session_assessments_prefix(session_id),
        (None, None) => format!("{ASSESSMENTS_PREFIX}unattributed/"),
    };
    format!(
        "{prefix}{:020}-{}.json",
        assessment.created_at.as_nanosecond(),
        assessment.id
    )
}
