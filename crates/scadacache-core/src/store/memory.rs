// ── In-process cache ──
//
// Each property sequence lives in its own `ArcSwap` slot and is replaced
// whole on publish. Base tables are reloaded through a `BaseTablesLoader`
// only when older than the configured interval, so a burst of role/user
// lookups costs at most one reload.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::{DataCache, Snapshot};
use crate::error::SourceError;
use crate::model::{BaseTables, ChannelProperties, ControlChannelProperties, Keyed};

/// Source of fresh base tables (configuration database, dump file, ...).
pub trait BaseTablesLoader: Send + Sync {
    fn load(&self) -> Result<BaseTables, SourceError>;
}

impl<F> BaseTablesLoader for F
where
    F: Fn() -> Result<BaseTables, SourceError> + Send + Sync,
{
    fn load(&self) -> Result<BaseTables, SourceError> {
        self()
    }
}

#[derive(Default)]
struct RefreshState {
    loader: Option<Box<dyn BaseTablesLoader>>,
    /// Monotonic time of the last successful load, for staleness.
    loaded_at: Option<Instant>,
    /// Wall-clock time of the last successful load, for reporting.
    loaded_at_utc: Option<DateTime<Utc>>,
}

/// A [`DataCache`] held entirely in memory.
pub struct MemoryCache {
    channels: ArcSwap<Vec<Arc<ChannelProperties>>>,
    control_channels: ArcSwap<Vec<Arc<ControlChannelProperties>>>,
    base: ArcSwap<BaseTables>,
    refresh: Mutex<RefreshState>,
    refresh_interval: Duration,
}

impl MemoryCache {
    /// An empty cache without a loader; base tables change only through
    /// [`publish_base_tables`](Self::publish_base_tables).
    pub fn new() -> Self {
        Self {
            channels: ArcSwap::from_pointee(Vec::new()),
            control_channels: ArcSwap::from_pointee(Vec::new()),
            base: ArcSwap::from_pointee(BaseTables::default()),
            refresh: Mutex::new(RefreshState::default()),
            refresh_interval: Duration::ZERO,
        }
    }

    /// An empty cache that reloads base tables through `loader` once they
    /// are older than `refresh_interval`.
    pub fn with_loader(loader: impl BaseTablesLoader + 'static, refresh_interval: Duration) -> Self {
        Self {
            refresh: Mutex::new(RefreshState {
                loader: Some(Box::new(loader)),
                ..RefreshState::default()
            }),
            refresh_interval,
            ..Self::new()
        }
    }

    // ── Publication ──────────────────────────────────────────────────

    /// Replace the input channel snapshot. Sorts by channel number first.
    pub fn publish_channel_properties(&self, props: Vec<ChannelProperties>) {
        let snapshot = sorted_snapshot(props);
        debug!(count = snapshot.len(), "publishing input channel properties");
        self.channels.store(snapshot);
    }

    /// Replace the control channel snapshot. Sorts by channel number first.
    pub fn publish_control_channel_properties(&self, props: Vec<ControlChannelProperties>) {
        let snapshot = sorted_snapshot(props);
        debug!(count = snapshot.len(), "publishing control channel properties");
        self.control_channels.store(snapshot);
    }

    /// Replace the base tables and mark them fresh.
    pub fn publish_base_tables(&self, tables: BaseTables) {
        let mut state = self.refresh.lock().unwrap_or_else(PoisonError::into_inner);
        self.base.store(Arc::new(tables));
        state.loaded_at = Some(Instant::now());
        state.loaded_at_utc = Some(Utc::now());
    }

    /// Force the next [`refresh_base_tables`](DataCache::refresh_base_tables)
    /// to reload.
    pub fn invalidate_base_tables(&self) {
        let mut state = self.refresh.lock().unwrap_or_else(PoisonError::into_inner);
        state.loaded_at = None;
    }

    // ── Metadata ─────────────────────────────────────────────────────

    pub fn last_base_refresh(&self) -> Option<DateTime<Utc>> {
        self.refresh
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .loaded_at_utc
    }

    /// How long ago base tables were last loaded, or `None` if never.
    pub fn base_tables_age(&self) -> Option<chrono::Duration> {
        self.last_base_refresh().map(|t| Utc::now() - t)
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DataCache for MemoryCache {
    fn refresh_base_tables(&self) -> Result<(), SourceError> {
        let mut state = self.refresh.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(loader) = state.loader.as_ref() else {
            return Ok(());
        };

        let fresh = state
            .loaded_at
            .is_some_and(|at| at.elapsed() < self.refresh_interval);
        if fresh {
            debug!("base tables are fresh, skipping reload");
            return Ok(());
        }

        let tables = loader.load().inspect_err(|e| {
            warn!(error = %e, "base table reload failed, keeping previous tables");
        })?;
        debug!(
            roles = tables.roles.len(),
            users = tables.users.len(),
            "base tables reloaded"
        );
        self.base.store(Arc::new(tables));
        state.loaded_at = Some(Instant::now());
        state.loaded_at_utc = Some(Utc::now());
        Ok(())
    }

    fn base_tables(&self) -> Result<Arc<BaseTables>, SourceError> {
        Ok(self.base.load_full())
    }

    fn channel_properties(&self) -> Result<Snapshot<ChannelProperties>, SourceError> {
        Ok(self.channels.load_full())
    }

    fn control_channel_properties(
        &self,
    ) -> Result<Snapshot<ControlChannelProperties>, SourceError> {
        Ok(self.control_channels.load_full())
    }
}

fn sorted_snapshot<T: Keyed>(mut props: Vec<T>) -> Snapshot<T> {
    props.sort_by_key(Keyed::key);
    Arc::new(props.into_iter().map(Arc::new).collect())
}
