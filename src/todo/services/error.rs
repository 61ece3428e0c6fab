//! Service-level error types, one enum per fallible operation.
//!
//! Keeping the enums separate means each call site matches exactly the
//! failures its operation can produce.

use crate::todo::domain::TodoId;
use thiserror::Error;

/// Broad category of a service error, for boundary layers that translate
/// failures into transport responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoErrorClass {
    /// The caller supplied unusable input.
    InvalidInput,
    /// The addressed todo does not exist.
    NotFound,
}

/// Errors returned by [`super::TodoService::create`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CreateTodoError {
    /// The task is empty after trimming whitespace.
    #[error("todo task must not be empty")]
    EmptyTask,
}

impl CreateTodoError {
    /// Returns the broad category of this error.
    #[must_use]
    pub const fn class(self) -> TodoErrorClass {
        match self {
            Self::EmptyTask => TodoErrorClass::InvalidInput,
        }
    }
}

/// Errors returned by [`super::TodoService::get`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GetTodoError {
    /// No todo is stored under the identifier.
    #[error("no todo with id [{0}]")]
    NoSuchTodo(TodoId),
}

impl GetTodoError {
    /// Returns the broad category of this error.
    #[must_use]
    pub const fn class(self) -> TodoErrorClass {
        match self {
            Self::NoSuchTodo(_) => TodoErrorClass::NotFound,
        }
    }
}

/// Errors returned by [`super::TodoService::delete`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DeleteTodoError {
    /// No todo is stored under the identifier.
    #[error("no todo with id [{0}]")]
    NoSuchTodo(TodoId),
}

impl DeleteTodoError {
    /// Returns the broad category of this error.
    #[must_use]
    pub const fn class(self) -> TodoErrorClass {
        match self {
            Self::NoSuchTodo(_) => TodoErrorClass::NotFound,
        }
    }
}

/// Errors returned by [`super::TodoService::update`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum UpdateTodoError {
    /// The replacement task is empty after trimming whitespace.
    #[error("todo task must not be empty")]
    EmptyTask,
    /// No todo is stored under the identifier.
    #[error("no todo with id [{0}]")]
    NoSuchTodo(TodoId),
}

impl UpdateTodoError {
    /// Returns the broad category of this error.
    #[must_use]
    pub const fn class(self) -> TodoErrorClass {
        match self {
            Self::EmptyTask => TodoErrorClass::InvalidInput,
            Self::NoSuchTodo(_) => TodoErrorClass::NotFound,
        }
    }
}
