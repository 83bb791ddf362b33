// ── Cache collaborator ──
//
// The refresh side owns and replaces all data. The facade only asks for
// "the current snapshot" or "ensure fresh, then the current tables".

mod memory;
#[cfg(test)]
pub(crate) mod stub;

use std::sync::Arc;

use crate::error::SourceError;
use crate::model::{BaseTables, ChannelProperties, ControlChannelProperties};

pub use memory::{BaseTablesLoader, MemoryCache};

/// An immutable, whole-value snapshot of a property sequence sorted
/// ascending by key.
pub type Snapshot<T> = Arc<Vec<Arc<T>>>;

/// Contract between the facade and the component that refreshes the cache.
///
/// Snapshot accessors must publish atomically: a caller sees either the
/// whole old sequence or the whole new one.
pub trait DataCache: Send + Sync {
    /// Reload the base tables if they are stale. Called under the
    /// base-table lock, so it never runs concurrently with itself from the
    /// same facade, but it may block.
    fn refresh_base_tables(&self) -> Result<(), SourceError>;

    /// The current base-table bundle.
    fn base_tables(&self) -> Result<Arc<BaseTables>, SourceError>;

    /// Current input channel properties, sorted by `cnl_num`.
    fn channel_properties(&self) -> Result<Snapshot<ChannelProperties>, SourceError>;

    /// Current control channel properties, sorted by `ctrl_cnl_num`.
    fn control_channel_properties(&self)
    -> Result<Snapshot<ControlChannelProperties>, SourceError>;
}

impl<T: DataCache + ?Sized> DataCache for Arc<T> {
    fn refresh_base_tables(&self) -> Result<(), SourceError> {
        (**self).refresh_base_tables()
    }

    fn base_tables(&self) -> Result<Arc<BaseTables>, SourceError> {
        (**self).base_tables()
    }

    fn channel_properties(&self) -> Result<Snapshot<ChannelProperties>, SourceError> {
        (**self).channel_properties()
    }

    fn control_channel_properties(
        &self,
    ) -> Result<Snapshot<ControlChannelProperties>, SourceError> {
        (**self).control_channel_properties()
    }
}
