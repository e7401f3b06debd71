//! Sample board seeding for demos and local smoke checks.
//!
//! # Responsibility
//! - Populate a migrated database with deterministic demonstration data.
//!
//! # Invariants
//! - Seeded tasks receive dense priorities `1..M` per project, the same way
//!   interactive task creation assigns them.

use crate::model::project::Project;
use crate::repo::project_repo::{ProjectRepository, SqliteProjectRepository};
use crate::repo::task_repo::{SqliteTaskRepository, TaskRepository};
use crate::repo::RepoResult;
use rusqlite::Connection;

/// Creates `n_projects` demonstration projects, each owning
/// `tasks_per_project` tasks in insertion order.
///
/// Returns the created projects. Intended for the CLI probe and tests; not
/// part of the interactive flows.
pub fn seed_sample_board(
    conn: &Connection,
    n_projects: u32,
    tasks_per_project: u32,
) -> RepoResult<Vec<Project>> {
    let project_repo = SqliteProjectRepository::try_new(conn)?;
    let task_repo = SqliteTaskRepository::try_new(conn)?;

    let mut projects = Vec::with_capacity(n_projects as usize);
    for project_index in 1..=n_projects {
        let project = project_repo.create_project(
            &format!("Project {project_index}"),
            &format!("Sample project {project_index}"),
        )?;
        for task_index in 1..=tasks_per_project {
            task_repo.create_task(project.id, &format!("Task {task_index}"))?;
        }
        projects.push(project);
    }

    Ok(projects)
}
