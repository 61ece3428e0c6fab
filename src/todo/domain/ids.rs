//! Identifier type for the todo domain.

use super::InvalidTodoId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive identifier of a todo record.
///
/// Identifiers are minted by the repository and are never reused within the
/// lifetime of a store, including after the record is deleted. Ordering
/// follows the numeric value, which is the order in which records are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a validated todo identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTodoId`] when the value is zero.
    pub const fn new(value: u64) -> Result<Self, InvalidTodoId> {
        if value == 0 {
            return Err(InvalidTodoId(value));
        }
        Ok(Self(value))
    }

    /// Wraps a counter value that is already known to be positive.
    pub(crate) const fn from_counter(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for TodoId {
    type Error = InvalidTodoId;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TodoId> for u64 {
    fn from(id: TodoId) -> Self {
        id.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
