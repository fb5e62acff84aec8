//! Post-processing applied to a fetched collection before it is shown.

use std::cmp::Ordering;
use std::sync::Arc;

type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Sort-then-limit policy for a loader.
///
/// Sorting is stable, so records with equal keys keep service order.
pub struct LoadPolicy<T> {
    sort: Option<Comparator<T>>,
    limit: Option<usize>,
}

impl<T> LoadPolicy<T> {
    /// Identity policy: service order, no limit.
    pub fn new() -> Self {
        Self {
            sort: None,
            limit: None,
        }
    }

    pub fn sorted_by<F>(mut self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.sort = Some(Arc::new(compare));
        self
    }

    /// Descending by `key`, e.g. a publication date.
    pub fn newest_first_by<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.sorted_by(move |a, b| key(b).cmp(&key(a)))
    }

    /// Ascending by `key`.
    pub fn oldest_first_by<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.sorted_by(move |a, b| key(a).cmp(&key(b)))
    }

    /// Keep at most `limit` records after sorting.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn apply(&self, mut items: Vec<T>) -> Vec<T> {
        if let Some(compare) = &self.sort {
            items.sort_by(|a, b| compare(a, b));
        }
        if let Some(limit) = self.limit {
            items.truncate(limit);
        }
        items
    }
}

impl<T> Default for LoadPolicy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for LoadPolicy<T> {
    fn clone(&self) -> Self {
        Self {
            sort: self.sort.clone(),
            limit: self.limit,
        }
    }
}

impl<T> std::fmt::Debug for LoadPolicy<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadPolicy")
            .field("sorted", &self.sort.is_some())
            .field("limit", &self.limit)
            .finish()
    }
}
