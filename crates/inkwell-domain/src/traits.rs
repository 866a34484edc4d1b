//! Trait definitions shared by every record shape

use crate::RecordKind;

/// A record recovered from generated text
///
/// Implemented by the four record shapes. Extraction never promises that a
/// field is filled; callers that need a stronger guarantee use
/// [`StructuredRecord::empty_fields`] to find gaps and prompt the user.
pub trait StructuredRecord {
    /// Kind of this record
    fn kind(&self) -> RecordKind;

    /// Canonical field names paired with their display value, in declaration order
    fn fields(&self) -> Vec<(&'static str, String)>;

    /// Canonical names of fields that hold no content
    fn empty_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// True when every field is empty
    fn is_blank(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.trim().is_empty())
    }
}
