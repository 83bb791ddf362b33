//! Thread-safe, fail-soft read access to a periodically refreshed SCADA
//! client cache.
//!
//! Many request threads read channel metadata and account information
//! while an external refresh process replaces the underlying data at any
//! time. This crate owns the read side:
//!
//! - **[`DataAccess`]**: the facade. Four total operations
//!   ([`channel_properties`](DataAccess::channel_properties),
//!   [`control_channel_properties`](DataAccess::control_channel_properties),
//!   [`user_id`](DataAccess::user_id), [`role_name`](DataAccess::role_name))
//!   that log failures through an [`ErrorSink`] and return a defined
//!   default instead of propagating them.
//!
//! - **Resource domains** ([`ResourceDomain`]): three independent locks.
//!   Channel and control-channel lookups hold theirs for one snapshot read
//!   plus a binary search; role and user lookups share the base-table lock
//!   across the refresh-if-stale call.
//!
//! - **[`DataCache`]**: the collaborator contract the refresh side
//!   implements. [`MemoryCache`] is an in-process implementation built on
//!   `ArcSwap` slots with interval-coalesced base-table reloads.
//!
//! - **[`AppContext`]**: explicit application context handed to every
//!   component, including the login role check in [`auth`].

pub mod access;
pub mod auth;
pub mod config;
pub mod context;
pub mod error;
pub mod model;
pub mod phrases;
pub mod sink;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use access::{DataAccess, DataAccessBuilder, ResourceDomain};
pub use auth::{LoginError, UserVerifier, check_user};
pub use config::{AccessConfig, Locale};
pub use context::AppContext;
pub use error::{CoreError, SourceError};
pub use sink::{ErrorSink, LookupFailure, Operation, TracingSink};
pub use store::{BaseTablesLoader, DataCache, MemoryCache, Snapshot};

pub use model::{
    BaseTables, ChannelProperties, ControlChannelProperties, EMPTY_USER_ID, Equals, Keyed,
    RoleColumn, RoleRow, RoleScheme, Row, Table, UserColumn, UserRow, Value,
};
