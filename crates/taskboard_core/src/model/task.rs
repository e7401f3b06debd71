//! Task domain model.

use crate::model::project::ProjectId;
use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the store when a task row is inserted.
pub type TaskId = i64;

/// One actionable item inside a project.
///
/// `priority` is the 1-based display position of the task within its project.
/// For a project with N tasks the priorities always form the dense set
/// `{1..N}`; the ordering engine restores this after every mutation that can
/// break it. Priority is never edited directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned stable id, immutable after creation.
    pub id: TaskId,
    /// User-supplied display name. Never blank.
    pub name: String,
    /// 1-based ordering key within the owning project. Lower = earlier.
    pub priority: i64,
    /// Owning project. A task is never unowned.
    pub project_id: ProjectId,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds.
    pub updated_at: i64,
}
