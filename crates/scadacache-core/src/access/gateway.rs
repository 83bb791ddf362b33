// ── Tabular gateway ──
//
// Every role and user lookup takes the base-table lock, asks the cache to
// refresh if stale, then filters the current tables. Concurrent refreshes
// from one facade are serialized by that lock.

use std::fmt;

use super::locks::{DomainLocks, ResourceDomain};
use crate::error::CoreError;
use crate::model::BaseTables;
use crate::sink::{FailSoft, Operation};
use crate::store::DataCache;

pub(crate) struct TabularGateway<'a> {
    locks: &'a DomainLocks,
    cache: &'a dyn DataCache,
    fail_soft: FailSoft<'a>,
}

impl<'a> TabularGateway<'a> {
    pub(crate) fn new(
        locks: &'a DomainLocks,
        cache: &'a dyn DataCache,
        fail_soft: FailSoft<'a>,
    ) -> Self {
        Self {
            locks,
            cache,
            fail_soft,
        }
    }

    /// Refresh, then run `select` against the current tables.
    pub(crate) fn try_find_row<T>(
        &self,
        select: impl FnOnce(&BaseTables) -> Option<T>,
    ) -> Result<Option<T>, CoreError> {
        let _guard = self.locks.lock(ResourceDomain::BaseTables);
        self.cache.refresh_base_tables()?;
        let tables = self.cache.base_tables()?;
        Ok(select(&tables))
    }

    /// Fail-soft [`try_find_row`](Self::try_find_row): `default` on a miss,
    /// and on any failure after reporting it.
    pub(crate) fn find_row_or<T>(
        &self,
        operation: Operation,
        key: &dyn fmt::Display,
        default: T,
        select: impl FnOnce(&BaseTables) -> Option<T>,
    ) -> T {
        match self.try_find_row(select) {
            Ok(found) => found.unwrap_or(default),
            Err(error) => self
                .fail_soft
                .recover(operation, key, Err(error), move || default),
        }
    }
}
