//! Priority ordering engine for a project's task set.
//!
//! # Responsibility
//! - Keep each project's task priorities a dense, gap-free `1..N` sequence.
//! - Close gaps after a deletion (`compact`).
//! - Persist an explicit drag-and-drop permutation (`apply_order`).
//!
//! # Invariants
//! - Both operations run as one bulk `CASE id WHEN .. THEN ..` update inside
//!   an immediate transaction: a concurrent reader sees either the old
//!   priorities or the new ones, never a half-renumbered project.
//! - `compact` orders by `priority ASC, id ASC`, so equal priorities keep
//!   their relative order and a second run is a no-op.
//! - `apply_order` accepts only a full permutation of one project's live task
//!   set; stale, duplicate, or cross-project ids reject the whole gesture
//!   before any row changes.

use crate::model::project::ProjectId;
use crate::model::task::TaskId;
use crate::repo::{ensure_board_schema_ready, RepoError};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension, Transaction, TransactionBehavior};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by ordering engine operations.
pub type OrderingResult<T> = Result<T, OrderingError>;

/// Errors from ordering engine operations.
#[derive(Debug)]
pub enum OrderingError {
    /// Underlying repository/bootstrap failure.
    Storage(RepoError),
    /// The same task id appears more than once in the supplied order.
    DuplicateTaskId(TaskId),
    /// A supplied task id does not exist.
    UnknownTaskId(TaskId),
    /// The supplied order mixes tasks from more than one project.
    MixedProjects {
        expected: ProjectId,
        conflicting: ProjectId,
        task_id: TaskId,
    },
    /// The supplied order does not cover the project's full live task set.
    IncompleteOrder {
        project_id: ProjectId,
        live_count: usize,
        supplied_count: usize,
    },
}

impl Display for OrderingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::DuplicateTaskId(id) => write!(f, "task id {id} appears twice in order"),
            Self::UnknownTaskId(id) => write!(f, "ordered task not found: {id}"),
            Self::MixedProjects {
                expected,
                conflicting,
                task_id,
            } => write!(
                f,
                "ordered task {task_id} belongs to project {conflicting}, expected project {expected}"
            ),
            Self::IncompleteOrder {
                project_id,
                live_count,
                supplied_count,
            } => write!(
                f,
                "order covers {supplied_count} of {live_count} tasks in project {project_id}"
            ),
        }
    }
}

impl Error for OrderingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for OrderingError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

impl From<rusqlite::Error> for OrderingError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(RepoError::from(value))
    }
}

/// Engine interface for bulk priority reassignment.
///
/// The two operations exist because their call sites have different input
/// shapes: after a deletion the desired order is implicit in the surviving
/// priorities, while a drag-and-drop gesture supplies the order explicitly.
pub trait OrderingEngine {
    /// Renumbers all tasks of `project_id` to priorities `1..N`, keeping the
    /// order implied by the current priority values.
    fn compact(&self, project_id: ProjectId) -> OrderingResult<()>;
    /// Assigns priority `i + 1` to the task at position `i` of `ordered_ids`.
    fn apply_order(&self, ordered_ids: &[TaskId]) -> OrderingResult<()>;
}

/// SQLite-backed ordering engine.
pub struct SqliteOrderingEngine<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOrderingEngine<'conn> {
    /// Constructs an engine from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> OrderingResult<Self> {
        ensure_board_schema_ready(conn)?;
        Ok(Self { conn })
    }
}

impl OrderingEngine for SqliteOrderingEngine<'_> {
    fn compact(&self, project_id: ProjectId) -> OrderingResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let mut stmt = tx.prepare(
            "SELECT id
             FROM tasks
             WHERE project_id = ?1
             ORDER BY priority ASC, id ASC;",
        )?;
        let mut rows = stmt.query([project_id])?;
        let mut ordered_ids = Vec::new();
        while let Some(row) = rows.next()? {
            ordered_ids.push(row.get::<_, TaskId>(0)?);
        }
        drop(rows);
        drop(stmt);

        // An empty or unknown project has nothing to renumber.
        assign_dense_priorities(&tx, &ordered_ids)?;
        tx.commit()?;
        Ok(())
    }

    fn apply_order(&self, ordered_ids: &[TaskId]) -> OrderingResult<()> {
        if ordered_ids.is_empty() {
            return Ok(());
        }

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        validate_full_permutation(&tx, ordered_ids)?;

        assign_dense_priorities(&tx, ordered_ids)?;
        tx.commit()?;
        Ok(())
    }
}

/// Checks that `ordered_ids` is exactly one project's live task set.
fn validate_full_permutation(conn: &Connection, ordered_ids: &[TaskId]) -> OrderingResult<()> {
    let mut seen = HashSet::with_capacity(ordered_ids.len());
    let mut project_id: Option<ProjectId> = None;

    for &task_id in ordered_ids {
        if !seen.insert(task_id) {
            return Err(OrderingError::DuplicateTaskId(task_id));
        }

        let owner: Option<ProjectId> = conn
            .query_row(
                "SELECT project_id FROM tasks WHERE id = ?1;",
                [task_id],
                |row| row.get(0),
            )
            .optional()?;
        let owner = owner.ok_or(OrderingError::UnknownTaskId(task_id))?;

        match project_id {
            None => project_id = Some(owner),
            Some(expected) if expected != owner => {
                return Err(OrderingError::MixedProjects {
                    expected,
                    conflicting: owner,
                    task_id,
                });
            }
            Some(_) => {}
        }
    }

    if let Some(project_id) = project_id {
        let live_count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM tasks WHERE project_id = ?1;",
            [project_id],
            |row| row.get(0),
        )?;
        if live_count as usize != ordered_ids.len() {
            return Err(OrderingError::IncompleteOrder {
                project_id,
                live_count: live_count as usize,
                supplied_count: ordered_ids.len(),
            });
        }
    }

    Ok(())
}

/// Assigns priority `index + 1` to each id in one bulk `CASE` update.
///
/// A single statement keeps the renumbering atomic from the store's point of
/// view and avoids one round trip per row.
fn assign_dense_priorities(conn: &Connection, ordered_ids: &[TaskId]) -> OrderingResult<()> {
    if ordered_ids.is_empty() {
        return Ok(());
    }

    let mut sql = String::from("UPDATE tasks SET priority = CASE id ");
    let mut bind_values: Vec<Value> = Vec::with_capacity(ordered_ids.len() * 3);
    for (index, &task_id) in ordered_ids.iter().enumerate() {
        sql.push_str("WHEN ? THEN ? ");
        bind_values.push(Value::Integer(task_id));
        bind_values.push(Value::Integer(index as i64 + 1));
    }
    sql.push_str("END, updated_at = (strftime('%s', 'now') * 1000) WHERE id IN (");
    for (index, &task_id) in ordered_ids.iter().enumerate() {
        if index > 0 {
            sql.push_str(", ");
        }
        sql.push('?');
        bind_values.push(Value::Integer(task_id));
    }
    sql.push_str(");");

    conn.execute(&sql, params_from_iter(bind_values))?;
    Ok(())
}
