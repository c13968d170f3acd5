//! Identifier generation for newly created records.
//!
//! Existing records arrive from the data layer with their ids already
//! assigned; only the creation helpers on [`crate::models`] mint new ones,
//! and they all go through this single collaborator.

use uuid::Uuid;

/// Source of identifiers for new records.
pub trait IdSource {
    fn next_id(&self) -> String;
}

/// Default generator: random UUID v4, hyphenated.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
