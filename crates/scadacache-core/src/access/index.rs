// ── Sorted-array index ──
//
// Lookup over an immutable snapshot sorted ascending by key. The shared
// slot is read exactly once per lookup; the search only touches the local
// snapshot, so a concurrent replacement is either fully seen or not at all.

use std::sync::Arc;

use super::locks::{DomainLocks, ResourceDomain};
use crate::error::{CoreError, SourceError};
use crate::model::Keyed;
use crate::store::{DataCache, Snapshot};

/// Binary search of a sorted snapshot. Returns the stored element itself.
pub(crate) fn search<T: Keyed>(snapshot: &[Arc<T>], key: i32) -> Option<Arc<T>> {
    snapshot
        .binary_search_by_key(&key, |item| item.key())
        .ok()
        .and_then(|pos| snapshot.get(pos))
        .map(Arc::clone)
}

type ReadSnapshot<T> = fn(&dyn DataCache) -> Result<Snapshot<T>, SourceError>;

/// A property sequence served from one resource domain.
pub(crate) struct SortedIndex<T> {
    domain: ResourceDomain,
    read: ReadSnapshot<T>,
}

impl<T: Keyed> SortedIndex<T> {
    pub(crate) const fn new(domain: ResourceDomain, read: ReadSnapshot<T>) -> Self {
        Self { domain, read }
    }

    pub(crate) fn lookup(
        &self,
        locks: &DomainLocks,
        cache: &dyn DataCache,
        key: i32,
    ) -> Result<Option<Arc<T>>, CoreError> {
        let _guard = locks.lock(self.domain);
        let snapshot = (self.read)(cache)?;
        Ok(search(&snapshot, key))
    }
}
