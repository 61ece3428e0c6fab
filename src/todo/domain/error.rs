//! Error types for todo domain value construction.

use thiserror::Error;

/// Error returned when a raw value cannot be used as a todo identifier.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid todo id {0}, expected a positive integer")]
pub struct InvalidTodoId(pub u64);
