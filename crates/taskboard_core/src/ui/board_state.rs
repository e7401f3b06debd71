//! Transient editing state of the board screen.
//!
//! # Responsibility
//! - Track the selected project, the task input buffer, the editing target,
//!   and the new-project input buffer.
//! - Apply UI events as an explicit `(state, event) -> state` transition.
//!
//! # Invariants
//! - Switching to a different project clears all input buffers.
//! - A failed mutation leaves the buffers untouched so the user can retry.
//! - A flash message survives exactly one transition.

use crate::model::project::ProjectId;
use crate::model::task::TaskId;

/// Which input field a flash message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashScope {
    /// Message for the task form.
    Task,
    /// Message for the project form.
    Project,
}

/// Transient field-scoped message shown after a failed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    /// Field scope of the message.
    pub scope: FlashScope,
    /// Human-readable message text.
    pub message: String,
}

impl Flash {
    /// Creates a task-scoped flash message.
    pub fn task(message: impl Into<String>) -> Self {
        Self {
            scope: FlashScope::Task,
            message: message.into(),
        }
    }

    /// Creates a project-scoped flash message.
    pub fn project(message: impl Into<String>) -> Self {
        Self {
            scope: FlashScope::Project,
            message: message.into(),
        }
    }
}

/// Events produced by the board screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// The user picked a project (or cleared the selection).
    ProjectSelected(Option<ProjectId>),
    /// The task name input changed.
    TaskNameEdited(String),
    /// The new-project name input changed.
    NewProjectNameEdited(String),
    /// The user started editing an existing task.
    TaskEditStarted {
        /// Task being edited.
        task_id: TaskId,
        /// Current persisted name, pre-filled into the input buffer.
        current_name: String,
    },
    /// A task create or rename succeeded.
    TaskSaved,
    /// A task delete succeeded.
    TaskDeleted,
    /// A task create/rename/delete failed.
    TaskActionFailed(String),
    /// A project was created and becomes the selection.
    ProjectCreated(ProjectId),
    /// The selected project was deleted.
    ProjectDeleted,
    /// A project create/delete failed.
    ProjectActionFailed(String),
}

/// Transient editing state of the board screen.
///
/// The project and task lists themselves are data owned by the services;
/// this struct carries only what the screen would lose on re-render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    /// Currently selected project. `None` = nothing selected.
    pub selected_project: Option<ProjectId>,
    /// Task name input buffer, shared by create and edit flows.
    pub task_name: String,
    /// Task being edited. `None` = the task form creates a new task.
    pub editing_task: Option<TaskId>,
    /// New-project name input buffer.
    pub new_project_name: String,
    /// Message from the previous transition, if it failed.
    pub flash: Option<Flash>,
}

impl BoardState {
    /// Creates the initial state: nothing selected, all buffers empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event and returns the next state.
    ///
    /// The previous flash is always discarded first; failure events install
    /// a fresh one.
    pub fn apply(self, event: BoardEvent) -> Self {
        let state = Self { flash: None, ..self };

        match event {
            BoardEvent::ProjectSelected(next) => {
                if next == state.selected_project {
                    return state;
                }
                Self {
                    selected_project: next,
                    ..Self::default()
                }
            }
            BoardEvent::TaskNameEdited(value) => Self {
                task_name: value,
                ..state
            },
            BoardEvent::NewProjectNameEdited(value) => Self {
                new_project_name: value,
                ..state
            },
            BoardEvent::TaskEditStarted {
                task_id,
                current_name,
            } => Self {
                editing_task: Some(task_id),
                task_name: current_name,
                ..state
            },
            BoardEvent::TaskSaved | BoardEvent::TaskDeleted => Self {
                task_name: String::new(),
                editing_task: None,
                ..state
            },
            BoardEvent::TaskActionFailed(message) => Self {
                flash: Some(Flash::task(message)),
                ..state
            },
            BoardEvent::ProjectCreated(project_id) => Self {
                selected_project: Some(project_id),
                ..Self::default()
            },
            BoardEvent::ProjectDeleted => Self::default(),
            BoardEvent::ProjectActionFailed(message) => Self {
                flash: Some(Flash::project(message)),
                ..state
            },
        }
    }
}
