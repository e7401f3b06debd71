//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and ordering engine calls into use-case APIs.
//! - Validate user input before anything touches the store.
//! - Keep UI layers decoupled from storage details.
//!
//! # Invariants
//! - No persistence error escapes a service uncaught; failures are logged
//!   with operation context and converted to typed service errors.

pub mod project_service;
pub mod seed;
pub mod task_service;
