//! Domain model for todo records.
//!
//! The todo domain is deliberately small: an identifier, a free-text task and
//! the record pairing the two. Validation of task content belongs to the
//! service layer, so these types stay infrastructure- and policy-free.

mod error;
mod ids;
mod task;
mod todo;

pub use error::InvalidTodoId;
pub use ids::TodoId;
pub use task::Task;
pub use todo::Todo;
