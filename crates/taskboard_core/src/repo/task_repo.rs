//! Task repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide persistence APIs for task rows within a project.
//! - Assign the append-at-end priority for newly created tasks.
//!
//! # Invariants
//! - A created task receives priority `count(project tasks) + 1`, so a
//!   project whose priorities are dense stays dense after every insert.
//! - Task listing is deterministic: `priority ASC, id ASC`.
//! - Renaming never touches the priority column.

use crate::model::project::ProjectId;
use crate::model::task::{Task, TaskId};
use crate::repo::{ensure_board_schema_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const TASK_SELECT_SQL: &str = "SELECT
    id,
    name,
    priority,
    project_id,
    created_at,
    updated_at
FROM tasks";

/// Repository interface for task persistence operations.
pub trait TaskRepository {
    /// Inserts one task row at the end of the project's order and returns
    /// the stored record.
    fn create_task(&self, project_id: ProjectId, name: &str) -> RepoResult<Task>;
    /// Replaces the task name. Priority is left untouched.
    fn rename_task(&self, id: TaskId, name: &str) -> RepoResult<()>;
    /// Loads one task by id.
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    /// Lists a project's tasks in display order.
    fn list_tasks(&self, project_id: ProjectId) -> RepoResult<Vec<Task>>;
    /// Deletes one task and returns the id of its former project.
    fn delete_task(&self, id: TaskId) -> RepoResult<ProjectId>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_board_schema_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(&self, project_id: ProjectId, name: &str) -> RepoResult<Task> {
        if !project_exists(self.conn, project_id)? {
            return Err(RepoError::ProjectNotFound(project_id));
        }

        let next_priority: i64 = self.conn.query_row(
            "SELECT COUNT(*) + 1 FROM tasks WHERE project_id = ?1;",
            [project_id],
            |row| row.get(0),
        )?;
        self.conn.execute(
            "INSERT INTO tasks (name, priority, project_id) VALUES (?1, ?2, ?3);",
            params![name, next_priority, project_id],
        )?;
        load_required_task(self.conn, self.conn.last_insert_rowid())
    }

    fn rename_task(&self, id: TaskId, name: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE tasks
             SET name = ?2,
                 updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![id, name],
        )?;
        if changed == 0 {
            return Err(RepoError::TaskNotFound(id));
        }
        Ok(())
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }
        Ok(None)
    }

    fn list_tasks(&self, project_id: ProjectId) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TASK_SELECT_SQL}
             WHERE project_id = ?1
             ORDER BY priority ASC, id ASC;"
        ))?;
        let mut rows = stmt.query([project_id])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }
        Ok(tasks)
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<ProjectId> {
        let project_id: Option<ProjectId> = self
            .conn
            .query_row("SELECT project_id FROM tasks WHERE id = ?1;", [id], |row| {
                row.get(0)
            })
            .optional()?;
        let project_id = project_id.ok_or(RepoError::TaskNotFound(id))?;

        self.conn.execute("DELETE FROM tasks WHERE id = ?1;", [id])?;
        Ok(project_id)
    }
}

fn project_exists(conn: &Connection, project_id: ProjectId) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1);",
        [project_id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn load_required_task(conn: &Connection, id: TaskId) -> RepoResult<Task> {
    let mut stmt = conn.prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_task_row(row);
    }
    Err(RepoError::TaskNotFound(id))
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let priority: i64 = row.get("priority")?;
    if priority < 1 {
        return Err(RepoError::InvalidData(format!(
            "invalid priority value `{priority}` in tasks.priority"
        )));
    }

    Ok(Task {
        id: row.get("id")?,
        name: row.get("name")?,
        priority,
        project_id: row.get("project_id")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
