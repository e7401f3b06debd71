//! Project repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide persistence APIs for project rows.
//! - Own the cascade-delete semantics for a project and its tasks.
//!
//! # Invariants
//! - Project listing is deterministic: `id ASC`.
//! - `delete_project` removes the project and all owned tasks in one
//!   transaction; concurrent readers see both rows sets intact or both gone.

use crate::model::project::{Project, ProjectId};
use crate::repo::{ensure_board_schema_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const PROJECT_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    created_at,
    updated_at
FROM projects";

/// Repository interface for project persistence operations.
pub trait ProjectRepository {
    /// Inserts one project row and returns the stored record.
    fn create_project(&self, name: &str, description: &str) -> RepoResult<Project>;
    /// Loads one project by id.
    fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>>;
    /// Lists all projects ordered by id.
    fn list_projects(&self) -> RepoResult<Vec<Project>>;
    /// Deletes one project and every task it owns, atomically.
    fn delete_project(&self, id: ProjectId) -> RepoResult<()>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_board_schema_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn create_project(&self, name: &str, description: &str) -> RepoResult<Project> {
        self.conn.execute(
            "INSERT INTO projects (name, description) VALUES (?1, ?2);",
            params![name, description],
        )?;
        load_required_project(self.conn, self.conn.last_insert_rowid())
    }

    fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_project_row(row)?));
        }
        Ok(None)
    }

    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }
        Ok(projects)
    }

    fn delete_project(&self, id: ProjectId) -> RepoResult<()> {
        // The schema also cascades via foreign key; the explicit task delete
        // keeps the operation readable and independent of pragma state.
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        tx.execute("DELETE FROM tasks WHERE project_id = ?1;", [id])?;
        let changed = tx.execute("DELETE FROM projects WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::ProjectNotFound(id));
        }
        tx.commit()?;
        Ok(())
    }
}

fn load_required_project(conn: &Connection, id: ProjectId) -> RepoResult<Project> {
    let mut stmt = conn.prepare(&format!("{PROJECT_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_project_row(row);
    }
    Err(RepoError::ProjectNotFound(id))
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    Ok(Project {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
