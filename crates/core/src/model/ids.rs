use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a trivia category as issued by the remote service.
///
/// The service decides the encoding; the client only echoes it back in
/// query strings and score records, so it is kept as opaque text.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Creates a new `CategoryId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying textual value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when no category has been picked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<u64> for CategoryId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Debug for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryId({})", self.0)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
