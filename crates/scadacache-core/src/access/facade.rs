// ── Data access facade ──
//
// Public entry point for request threads. Every operation takes the lock
// of exactly one resource domain and never lets a lookup failure escape:
// it is reported to the error sink and the caller gets a defined default.

use std::fmt;
use std::sync::Arc;

use super::gateway::TabularGateway;
use super::index::SortedIndex;
use super::locks::{DomainLocks, ResourceDomain};
use super::{roles, users};
use crate::config::AccessConfig;
use crate::error::CoreError;
use crate::model::{ChannelProperties, ControlChannelProperties};
use crate::sink::{ErrorSink, FailSoft, Operation, TracingSink};
use crate::store::DataCache;

const CHANNELS: SortedIndex<ChannelProperties> =
    SortedIndex::new(ResourceDomain::ChannelProperties, |cache| {
        cache.channel_properties()
    });

const CONTROL_CHANNELS: SortedIndex<ControlChannelProperties> =
    SortedIndex::new(ResourceDomain::ControlChannelProperties, |cache| {
        cache.control_channel_properties()
    });

/// Thread-safe, fail-soft read access to the client cache.
///
/// Share it behind an `Arc`; all operations take `&self`.
pub struct DataAccess {
    cache: Arc<dyn DataCache>,
    sink: Arc<dyn ErrorSink>,
    config: AccessConfig,
    locks: DomainLocks,
}

impl DataAccess {
    pub fn builder() -> DataAccessBuilder {
        DataAccessBuilder::default()
    }

    /// Facade over `cache` that reports failures through `tracing`.
    pub fn new(cache: Arc<dyn DataCache>, config: AccessConfig) -> Self {
        Self {
            cache,
            sink: Arc::new(TracingSink),
            config,
            locks: DomainLocks::default(),
        }
    }

    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    // ── Channel properties ───────────────────────────────────────────

    /// Input channel properties, distinguishing "absent" (`Ok(None)`) from
    /// "lookup failed" (`Err`). Nothing is reported to the sink.
    pub fn try_channel_properties(
        &self,
        cnl_num: i32,
    ) -> Result<Option<Arc<ChannelProperties>>, CoreError> {
        CHANNELS.lookup(&self.locks, self.cache.as_ref(), cnl_num)
    }

    /// Input channel properties by number, or `None` if absent or the
    /// lookup failed.
    pub fn channel_properties(&self, cnl_num: i32) -> Option<Arc<ChannelProperties>> {
        self.fail_soft().recover(
            Operation::ChannelProperties,
            &cnl_num,
            self.try_channel_properties(cnl_num),
            || None,
        )
    }

    /// Control channel properties, distinguishing "absent" from "failed".
    pub fn try_control_channel_properties(
        &self,
        ctrl_cnl_num: i32,
    ) -> Result<Option<Arc<ControlChannelProperties>>, CoreError> {
        CONTROL_CHANNELS.lookup(&self.locks, self.cache.as_ref(), ctrl_cnl_num)
    }

    /// Control channel properties by number, or `None` if absent or the
    /// lookup failed.
    pub fn control_channel_properties(
        &self,
        ctrl_cnl_num: i32,
    ) -> Option<Arc<ControlChannelProperties>> {
        self.fail_soft().recover(
            Operation::ControlChannelProperties,
            &ctrl_cnl_num,
            self.try_control_channel_properties(ctrl_cnl_num),
            || None,
        )
    }

    // ── Accounts ─────────────────────────────────────────────────────

    /// Id of the user with exactly this name, or
    /// [`EMPTY_USER_ID`](crate::EMPTY_USER_ID).
    pub fn user_id(&self, username: &str) -> i32 {
        users::user_id(&self.gateway(), username)
    }

    /// Display name of a role. Custom-band ids are looked up in the role
    /// table; everything else comes from the built-in names.
    pub fn role_name(&self, role_id: i32) -> String {
        roles::role_name(
            &self.gateway(),
            &self.config.roles,
            self.config.locale,
            role_id,
        )
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn fail_soft(&self) -> FailSoft<'_> {
        FailSoft {
            sink: self.sink.as_ref(),
            locale: self.config.locale,
        }
    }

    fn gateway(&self) -> TabularGateway<'_> {
        TabularGateway::new(&self.locks, self.cache.as_ref(), self.fail_soft())
    }
}

impl fmt::Debug for DataAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataAccess")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for [`DataAccess`]. The cache is required; the sink defaults to
/// [`TracingSink`].
#[derive(Default)]
pub struct DataAccessBuilder {
    cache: Option<Arc<dyn DataCache>>,
    sink: Option<Arc<dyn ErrorSink>>,
    config: AccessConfig,
}

impl DataAccessBuilder {
    pub fn cache(mut self, cache: Arc<dyn DataCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn config(mut self, config: AccessConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<DataAccess, CoreError> {
        let cache = self
            .cache
            .ok_or(CoreError::MissingCollaborator { name: "data cache" })?;
        Ok(DataAccess {
            cache,
            sink: self.sink.unwrap_or_else(|| Arc::new(TracingSink)),
            config: self.config,
            locks: DomainLocks::default(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::Ordering;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sink::RecordingSink;
    use crate::store::stub::StubCache;

    fn channel(cnl_num: i32, name: &str) -> Arc<ChannelProperties> {
        Arc::new(ChannelProperties {
            cnl_num,
            cnl_name: name.into(),
            ..Default::default()
        })
    }

    fn facade(cache: &Arc<StubCache>, sink: &Arc<RecordingSink>) -> DataAccess {
        DataAccess::builder()
            .cache(Arc::clone(cache) as Arc<dyn DataCache>)
            .sink(Arc::clone(sink) as Arc<dyn ErrorSink>)
            .build()
            .unwrap()
    }

    #[test]
    fn build_without_cache_fails() {
        let err = DataAccess::builder().build().unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingCollaborator { name: "data cache" }
        ));
    }

    #[test]
    fn channel_lookup_scenario() {
        let cache = Arc::new(StubCache::default());
        *cache.channels.lock().unwrap() =
            Arc::new(vec![channel(10, "A"), channel(20, "B"), channel(30, "C")]);
        let sink = Arc::new(RecordingSink::default());
        let access = facade(&cache, &sink);

        assert_eq!(access.channel_properties(20).unwrap().cnl_name, "B");
        assert!(access.channel_properties(15).is_none());
        assert!(sink.reports().is_empty());
    }

    #[test]
    fn channel_and_control_channel_key_spaces_are_separate() {
        let cache = Arc::new(StubCache::default());
        *cache.channels.lock().unwrap() = Arc::new(vec![channel(5, "in")]);
        let sink = Arc::new(RecordingSink::default());
        let access = facade(&cache, &sink);

        assert!(access.channel_properties(5).is_some());
        assert!(access.control_channel_properties(5).is_none());
    }

    #[test]
    fn snapshot_failure_is_reported_and_swallowed() {
        let cache = Arc::new(StubCache::default());
        cache.fail_snapshots.store(true, Ordering::SeqCst);
        let sink = Arc::new(RecordingSink::default());
        let access = facade(&cache, &sink);

        assert!(access.channel_properties(1).is_none());
        assert!(access.control_channel_properties(2).is_none());
        assert!(access.try_channel_properties(1).is_err());
        assert_eq!(
            sink.reports(),
            vec![
                (Operation::ChannelProperties, "1".to_owned()),
                (Operation::ControlChannelProperties, "2".to_owned()),
            ]
        );
    }

    #[test]
    fn try_variant_distinguishes_absent_from_failed() {
        let cache = Arc::new(StubCache::default());
        let sink = Arc::new(RecordingSink::default());
        let access = facade(&cache, &sink);

        assert!(access.try_control_channel_properties(3).unwrap().is_none());
        cache.fail_snapshots.store(true, Ordering::SeqCst);
        assert!(access.try_control_channel_properties(3).is_err());
    }

    #[test]
    fn debug_does_not_require_collaborators_to_be_debug() {
        let access = DataAccess::new(Arc::new(StubCache::default()), AccessConfig::default());
        assert!(format!("{access:?}").starts_with("DataAccess"));
    }
}
