//! Repository record entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A cataloged software repository.
///
/// The identifier is assigned at creation and immutable thereafter; the
/// like counter only ever grows and is never client-settable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
    pub likes: u64,
}

/// Validated input for creating a record or overwriting its mutable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryDraft {
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
}

impl Repository {
    /// Build a new record from a draft, assigning a fresh identifier and
    /// zero likes.
    pub fn new(draft: RepositoryDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            url: draft.url,
            techs: draft.techs,
            likes: 0,
        }
    }
}
