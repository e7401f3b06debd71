//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use taskboard_core::db::open_db_in_memory;
use taskboard_core::{
    seed_sample_board, ProjectRepository, SqliteProjectRepository, SqliteTaskRepository,
    TaskRepository,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("taskboard demo failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("taskboard_core version={}", taskboard_core::core_version());

    let conn = open_db_in_memory()?;
    seed_sample_board(&conn, 3, 4)?;

    let project_repo = SqliteProjectRepository::try_new(&conn)?;
    let task_repo = SqliteTaskRepository::try_new(&conn)?;

    for project in project_repo.list_projects()? {
        println!("project id={} name={}", project.id, project.name);
        for task in task_repo.list_tasks(project.id)? {
            println!("  [{}] {}", task.priority, task.name);
        }
    }

    Ok(())
}
