//! Result set returned by [`Reader`](super::Reader) builders

use serde::{Deserialize, Serialize};

/// Records produced by a read, in the order the API returned them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSet<T> {
    records: Vec<T>,
    /// Page size the read was issued with, if any
    pub page_size: Option<u32>,
    /// Upper bound on records the read was allowed to return, if any
    pub limit: Option<u64>,
}

impl<T> ResourceSet<T> {
    /// Create a set from already-fetched records
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records,
            page_size: None,
            limit: None,
        }
    }

    /// Create an empty set
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Record the page size the read used
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Record the limit the read used
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.records.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Take the records out of the set
    pub fn into_vec(self) -> Vec<T> {
        self.records
    }
}

impl<T> Default for ResourceSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> FromIterator<T> for ResourceSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for ResourceSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResourceSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
