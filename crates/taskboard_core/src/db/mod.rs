//! SQLite storage bootstrap and schema migration entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the task board core.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write application data before migrations succeed.
//! - Returned connections enforce foreign keys, so task rows can never outlive
//!   their owning project row.
//!
//! Failures surface as [`crate::repo::RepoError`]; the persistence stack
//! shares one error type from bootstrap through repository queries.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
