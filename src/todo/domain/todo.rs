//! Todo record type.

use super::{Task, TodoId};
use serde::{Deserialize, Serialize};

/// A stored todo: an identifier paired with its task.
///
/// Values are immutable snapshots. Reading a todo from a repository yields an
/// independent copy, so later mutations of the store never change a `Todo`
/// already handed out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    task: Task,
}

impl Todo {
    /// Creates a todo from its parts.
    ///
    /// No validation is applied to `task`; callers going through
    /// [`crate::todo::services::TodoService`] get blank-task rejection there.
    #[must_use]
    pub const fn new(id: TodoId, task: Task) -> Self {
        Self { id, task }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the todo task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Splits the todo into its identifier and task.
    #[must_use]
    pub fn into_parts(self) -> (TodoId, Task) {
        (self.id, self.task)
    }
}
