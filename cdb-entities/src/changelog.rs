use crate::time::*;

/// A single recorded edit of a comment.
///
/// Entries are owned by their comment and only ever appended.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub created_at : Timestamp,
    pub before     : String,
    pub after      : String,
}
