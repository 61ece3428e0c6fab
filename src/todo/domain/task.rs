//! Free-text task content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text describing what a todo is about.
///
/// A `Task` may hold any string, including blank ones; rejecting blank
/// content is a service-level precondition checked through
/// [`Task::is_blank`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Task(String);

impl Task {
    /// Creates a task from raw text without validation.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns `true` when the text is empty after trimming whitespace.
    ///
    /// Whitespace follows the Unicode `White_Space` property, as
    /// [`str::trim`] does: no-break and em spaces count as blank, while
    /// control characters such as U+0001 do not.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Returns the task text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the task and returns the owned text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Task {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Task {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Task {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
