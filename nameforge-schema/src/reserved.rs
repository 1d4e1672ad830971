//! Reserved and already-used names.

use std::collections::BTreeSet;

/// Names a generated type name must not collide with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedNames {
    names: BTreeSet<String>,
}

impl ReservedNames {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a name is reserved.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Reserve a name. Returns false if it was already reserved.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }
}

impl<S: Into<String>> FromIterator<S> for ReservedNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
