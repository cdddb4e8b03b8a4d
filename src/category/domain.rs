//! Core category domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The name of a category, e.g. "Groceries".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name, trimming surrounding whitespace.
    ///
    /// Returns `None` if `name` is empty or only whitespace.
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();

        if name.is_empty() {
            None
        } else {
            Some(Self(name.to_owned()))
        }
    }

    /// Create a category name without validation.
    ///
    /// Used for names read back from the database.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database identifier for a category.
pub type CategoryId = i64;

/// A named grouping that an expense belongs to.
///
/// Serializes as `{"id": 1, "name": "Food"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,
    /// The unique name of the category.
    pub name: CategoryName,
}
