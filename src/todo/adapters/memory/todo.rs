//! In-memory repository for todo records.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::todo::{
    domain::{Task, Todo, TodoId},
    ports::TodoRepository,
};

/// Thread-safe in-memory todo repository.
///
/// Clones share the same underlying store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<InMemoryTodoState>,
}

#[derive(Debug)]
struct InMemoryTodoState {
    next_id: AtomicU64,
    todos: RwLock<BTreeMap<TodoId, Task>>,
}

impl Default for InMemoryTodoState {
    fn default() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            todos: RwLock::new(BTreeMap::new()),
        }
    }
}

// Every critical section is a single map operation, so a guard poisoned by a
// panicking holder never exposes a partially written entry.
impl InMemoryTodoState {
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<TodoId, Task>> {
        self.todos.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<TodoId, Task>> {
        self.todos.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Hands out the next identifier.
    ///
    /// The counter would only wrap back to zero after `u64::MAX` creations,
    /// which no single process reaches; ids are otherwise never repeated.
    fn allocate_id(&self) -> TodoId {
        TodoId::from_counter(self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of todos currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().len()
    }

    /// Returns `true` when no todos are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().is_empty()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, task: Task) -> Todo {
        let id = self.state.allocate_id();
        self.state.write().insert(id, task.clone());
        Todo::new(id, task)
    }

    async fn get(&self, id: TodoId) -> Option<Todo> {
        let todos = self.state.read();
        todos.get(&id).map(|task| Todo::new(id, task.clone()))
    }

    async fn delete(&self, id: TodoId) -> Option<Todo> {
        let removed = self.state.write().remove(&id);
        removed.map(|task| Todo::new(id, task))
    }

    async fn list(&self) -> Vec<Todo> {
        let todos = self.state.read();
        todos
            .iter()
            .map(|(id, task)| Todo::new(*id, task.clone()))
            .collect()
    }

    async fn update(&self, todo: Todo) -> Option<Todo> {
        let (id, task) = todo.into_parts();
        let mut todos = self.state.write();
        let stored = todos.get_mut(&id)?;
        stored.clone_from(&task);
        drop(todos);
        Some(Todo::new(id, task))
    }
}
