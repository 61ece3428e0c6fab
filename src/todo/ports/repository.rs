//! Repository port for todo persistence and lookup.

use crate::todo::domain::{Task, Todo, TodoId};
use async_trait::async_trait;

/// Todo storage contract.
///
/// Implementations own identifier assignment and all internal
/// synchronisation. Each operation is atomic with respect to the others on
/// the same identifier. Absence of a record is reported as `None`, never as
/// an error; implementations do not fail under normal operation.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Stores a new todo under a freshly allocated identifier.
    ///
    /// Identifiers start at 1, increase strictly and are never handed out
    /// twice, even to concurrent callers.
    async fn create(&self, task: Task) -> Todo;

    /// Returns the todo stored under `id`.
    ///
    /// Returns `None` when the todo does not exist.
    async fn get(&self, id: TodoId) -> Option<Todo>;

    /// Removes the todo stored under `id` and returns it as it was just
    /// before removal.
    ///
    /// Returns `None` when the todo does not exist. Of several concurrent
    /// deletes of one identifier, exactly one observes the record.
    async fn delete(&self, id: TodoId) -> Option<Todo>;

    /// Returns a snapshot of every stored todo, ascending by identifier.
    async fn list(&self) -> Vec<Todo>;

    /// Replaces the task of an existing todo and returns `todo`.
    ///
    /// Returns `None` without mutating anything when `todo.id()` is not
    /// stored. This never inserts a new record.
    async fn update(&self, todo: Todo) -> Option<Todo>;
}
