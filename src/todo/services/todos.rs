//! Service layer for todo creation, lookup, removal and replacement.

use crate::todo::{
    domain::{Task, Todo, TodoId},
    ports::TodoRepository,
};
use std::sync::Arc;
use tracing::{debug, instrument};

use super::error::{CreateTodoError, DeleteTodoError, GetTodoError, UpdateTodoError};

/// Todo orchestration service.
///
/// Validates input before the repository is touched and turns repository
/// absence into the named error of each operation. A rejected call has no
/// side effect on the store and consumes no identifier.
#[derive(Clone)]
pub struct TodoService<R>
where
    R: TodoRepository,
{
    repository: Arc<R>,
}

impl<R> TodoService<R>
where
    R: TodoRepository,
{
    /// Creates a new todo service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a todo from a non-blank task.
    ///
    /// # Errors
    ///
    /// Returns [`CreateTodoError::EmptyTask`] when the task is empty after
    /// trimming. The repository is not called in that case.
    #[instrument(level = "debug", skip(self))]
    pub async fn create(&self, task: Task) -> Result<Todo, CreateTodoError> {
        if task.is_blank() {
            debug!("rejected todo with empty task");
            return Err(CreateTodoError::EmptyTask);
        }
        let todo = self.repository.create(task).await;
        debug!(todo_id = %todo.id(), "todo created");
        Ok(todo)
    }

    /// Retrieves a todo by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GetTodoError::NoSuchTodo`] when no todo is stored under
    /// `id`.
    #[instrument(level = "debug", skip(self))]
    pub async fn get(&self, id: TodoId) -> Result<Todo, GetTodoError> {
        self.repository.get(id).await.ok_or_else(|| {
            debug!(todo_id = %id, "todo not found");
            GetTodoError::NoSuchTodo(id)
        })
    }

    /// Deletes a todo and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`DeleteTodoError::NoSuchTodo`] when no todo is stored under
    /// `id`.
    #[instrument(level = "debug", skip(self))]
    pub async fn delete(&self, id: TodoId) -> Result<Todo, DeleteTodoError> {
        let Some(removed) = self.repository.delete(id).await else {
            debug!(todo_id = %id, "todo not found");
            return Err(DeleteTodoError::NoSuchTodo(id));
        };
        debug!(todo_id = %id, "todo deleted");
        Ok(removed)
    }

    /// Returns every todo, ascending by identifier.
    #[instrument(level = "debug", skip(self))]
    pub async fn list(&self) -> Vec<Todo> {
        self.repository.list().await
    }

    /// Replaces the task of an existing todo.
    ///
    /// Blank tasks are rejected before existence is checked.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateTodoError::EmptyTask`] when the new task is empty
    /// after trimming, or [`UpdateTodoError::NoSuchTodo`] when no todo is
    /// stored under `todo.id()`.
    #[instrument(level = "debug", skip(self))]
    pub async fn update(&self, todo: Todo) -> Result<Todo, UpdateTodoError> {
        let id = todo.id();
        if todo.task().is_blank() {
            debug!(todo_id = %id, "rejected todo update with empty task");
            return Err(UpdateTodoError::EmptyTask);
        }
        let Some(updated) = self.repository.update(todo).await else {
            debug!(todo_id = %id, "todo not found");
            return Err(UpdateTodoError::NoSuchTodo(id));
        };
        debug!(todo_id = %id, "todo updated");
        Ok(updated)
    }
}
