//! Project domain model.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the store when a project row is inserted.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = i64;

/// A named container for an ordered set of tasks.
///
/// Deleting a project removes all of its tasks with it; a task row never
/// survives its owning project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned stable id, immutable after creation.
    pub id: ProjectId,
    /// User-supplied display name. Never blank.
    pub name: String,
    /// Free-form description. Defaults to empty.
    pub description: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds.
    pub updated_at: i64,
}
