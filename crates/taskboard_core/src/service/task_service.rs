//! Task use-case service.
//!
//! # Responsibility
//! - Provide task create/rename/delete/list entry points for UI callers.
//! - Restore the dense priority sequence after every gap-causing mutation.
//! - Translate drag-and-drop gesture payloads into engine calls.
//!
//! # Invariants
//! - Deleting a task always compacts the former project's priorities before
//!   the call returns; the dense `1..N` sequence is never left broken.
//! - Renaming never changes a task's priority.
//! - Validation failures never reach the store.

use crate::model::project::ProjectId;
use crate::model::task::{Task, TaskId};
use crate::repo::ordering::{OrderingEngine, OrderingError};
use crate::repo::task_repo::TaskRepository;
use crate::repo::RepoError;
use crate::service::project_service::normalize_name;
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for task use-cases.
#[derive(Debug)]
pub enum TaskServiceError {
    /// Task name is blank after trim.
    EmptyTaskName,
    /// Target task does not exist.
    TaskNotFound(TaskId),
    /// Target project does not exist.
    ProjectNotFound(ProjectId),
    /// A gesture payload token is not a task id.
    MalformedGesture(String),
    /// Bulk priority reassignment failed.
    Ordering(OrderingError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTaskName => write!(f, "task name must not be blank"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::MalformedGesture(token) => {
                write!(f, "gesture order contains invalid task id `{token}`")
            }
            Self::Ordering(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ordering(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TaskServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::TaskNotFound(id) => Self::TaskNotFound(id),
            RepoError::ProjectNotFound(id) => Self::ProjectNotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<OrderingError> for TaskServiceError {
    fn from(value: OrderingError) -> Self {
        Self::Ordering(value)
    }
}

/// Task service facade.
pub struct TaskService<R: TaskRepository, O: OrderingEngine> {
    repo: R,
    ordering: O,
}

impl<R: TaskRepository, O: OrderingEngine> TaskService<R, O> {
    /// Creates a service from repository and ordering engine implementations.
    pub fn new(repo: R, ordering: O) -> Self {
        Self { repo, ordering }
    }

    /// Creates one task at the end of the project's display order.
    pub fn create_task(
        &self,
        project_id: ProjectId,
        name: impl Into<String>,
    ) -> Result<Task, TaskServiceError> {
        let normalized = normalize_name(name.into()).ok_or(TaskServiceError::EmptyTaskName)?;

        self.repo
            .create_task(project_id, normalized.as_str())
            .map_err(|err| {
                error!(
                    "event=task_create module=service status=error project_id={project_id} error={err}"
                );
                err.into()
            })
    }

    /// Renames one task. Priority is left untouched.
    pub fn update_task(
        &self,
        task_id: TaskId,
        new_name: impl Into<String>,
    ) -> Result<(), TaskServiceError> {
        let normalized = normalize_name(new_name.into()).ok_or(TaskServiceError::EmptyTaskName)?;

        self.repo
            .rename_task(task_id, normalized.as_str())
            .map_err(|err| {
                error!(
                    "event=task_update module=service status=error task_id={task_id} error={err}"
                );
                err.into()
            })
    }

    /// Deletes one task, then compacts the former project's priorities.
    ///
    /// Compaction is a required side effect: the dense sequence is restored
    /// before this call returns, not lazily. A compaction failure is logged
    /// and reported to the caller as an error.
    pub fn delete_task(&self, task_id: TaskId) -> Result<(), TaskServiceError> {
        let project_id = self.repo.delete_task(task_id).map_err(|err| {
            error!("event=task_delete module=service status=error task_id={task_id} error={err}");
            TaskServiceError::from(err)
        })?;

        self.ordering.compact(project_id).map_err(|err| {
            error!(
                "event=task_compact module=service status=error project_id={project_id} error={err}"
            );
            TaskServiceError::from(err)
        })
    }

    /// Returns the current name of one task, for pre-filling the edit input.
    pub fn edit_buffer(&self, task_id: TaskId) -> Result<String, TaskServiceError> {
        match self.repo.get_task(task_id)? {
            Some(task) => Ok(task.name),
            None => {
                error!("event=task_edit module=service status=error task_id={task_id} error=not_found");
                Err(TaskServiceError::TaskNotFound(task_id))
            }
        }
    }

    /// Gets one task by id.
    pub fn get_task(&self, task_id: TaskId) -> Result<Option<Task>, TaskServiceError> {
        self.repo.get_task(task_id).map_err(Into::into)
    }

    /// Lists a project's tasks in display order.
    ///
    /// An unknown project yields an empty list, matching what a selector UI
    /// shows for a stale selection.
    pub fn list_tasks(&self, project_id: ProjectId) -> Result<Vec<Task>, TaskServiceError> {
        self.repo.list_tasks(project_id).map_err(|err| {
            error!(
                "event=task_list module=service status=error project_id={project_id} error={err}"
            );
            err.into()
        })
    }

    /// Applies a drag-and-drop gesture payload: a comma-separated list of
    /// task ids in final visual order.
    ///
    /// A blank payload is a no-op. Failures (malformed token, stale or
    /// partial order, persistence error) are logged but not reported back;
    /// the gesture path has no success/failure channel to the caller.
    pub fn reorder_from_gesture(&self, ordered_ids_csv: &str) {
        let ordered_ids = match parse_gesture_order(ordered_ids_csv) {
            Ok(ids) => ids,
            Err(err) => {
                error!("event=task_reorder module=service status=error error={err}");
                return;
            }
        };
        if ordered_ids.is_empty() {
            return;
        }

        if let Err(err) = self.ordering.apply_order(&ordered_ids) {
            error!("event=task_reorder module=service status=error error={err}");
        }
    }
}

/// Parses a comma-separated task id payload into an ordered id list.
///
/// An empty or whitespace-only payload parses to an empty list (no-op).
/// Tokens are trimmed before parsing; any non-integer token rejects the
/// whole payload.
pub fn parse_gesture_order(ordered_ids_csv: &str) -> Result<Vec<TaskId>, TaskServiceError> {
    if ordered_ids_csv.trim().is_empty() {
        return Ok(Vec::new());
    }

    ordered_ids_csv
        .split(',')
        .map(|token| {
            let trimmed = token.trim();
            trimmed
                .parse::<TaskId>()
                .map_err(|_| TaskServiceError::MalformedGesture(trimmed.to_string()))
        })
        .collect()
}
