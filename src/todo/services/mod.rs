//! Application services for todo management.

mod error;
mod todos;

pub use error::{
    CreateTodoError, DeleteTodoError, GetTodoError, TodoErrorClass, UpdateTodoError,
};
pub use todos::TodoService;
