// Test double for `DataCache` with call counting and failure injection.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::{DataCache, Snapshot};
use crate::error::SourceError;
use crate::model::{BaseTables, ChannelProperties, ControlChannelProperties};

#[derive(Default)]
pub(crate) struct StubCache {
    pub(crate) tables: Mutex<Arc<BaseTables>>,
    pub(crate) channels: Mutex<Snapshot<ChannelProperties>>,
    pub(crate) control_channels: Mutex<Snapshot<ControlChannelProperties>>,
    pub(crate) refresh_calls: AtomicUsize,
    pub(crate) fail_refresh: AtomicBool,
    pub(crate) fail_snapshots: AtomicBool,
}

impl StubCache {
    pub(crate) fn with_tables(tables: BaseTables) -> Self {
        Self {
            tables: Mutex::new(Arc::new(tables)),
            ..Self::default()
        }
    }

    pub(crate) fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    fn snapshot_guard(&self) -> Result<(), SourceError> {
        if self.fail_snapshots.load(Ordering::SeqCst) {
            Err(SourceError::malformed("snapshot unreadable"))
        } else {
            Ok(())
        }
    }
}

impl DataCache for StubCache {
    fn refresh_base_tables(&self) -> Result<(), SourceError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_refresh.load(Ordering::SeqCst) {
            return Err(SourceError::unavailable("refresh failed"));
        }
        Ok(())
    }

    fn base_tables(&self) -> Result<Arc<BaseTables>, SourceError> {
        Ok(Arc::clone(
            &self.tables.lock().unwrap_or_else(PoisonError::into_inner),
        ))
    }

    fn channel_properties(&self) -> Result<Snapshot<ChannelProperties>, SourceError> {
        self.snapshot_guard()?;
        Ok(Arc::clone(
            &self.channels.lock().unwrap_or_else(PoisonError::into_inner),
        ))
    }

    fn control_channel_properties(
        &self,
    ) -> Result<Snapshot<ControlChannelProperties>, SourceError> {
        self.snapshot_guard()?;
        Ok(Arc::clone(
            &self
                .control_channels
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        ))
    }
}
