//! Domain records for projects and their ordered tasks.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every record is identified by a stable store-assigned integer id.
//! - A task always belongs to exactly one project.

pub mod project;
pub mod task;
