//! Ordered, duplicate-free list of source names.

use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// Source names in first-seen order.
///
/// Pushing a name that is already present, or an empty name, is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceList {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl SourceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` unless it is empty or already listed.
    ///
    /// Returns whether the name was added.
    pub fn push(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() || self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.names.push(name);
        true
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }

    /// Join the names with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.names.join(separator)
    }
}

impl<S: Into<String>> FromIterator<S> for SourceList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<S: Into<String>> Extend<S> for SourceList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.push(name);
        }
    }
}

impl<'a> IntoIterator for &'a SourceList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl IntoIterator for SourceList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

impl Serialize for SourceList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.names.serialize(serializer)
    }
}
