// ── Domain model ──
//
// Channel descriptors published as sorted snapshots, the base-table bundle
// with typed equality filters, and the role numbering scheme.

mod channel;
mod role;
mod table;

pub use channel::{ChannelProperties, ControlChannelProperties, Keyed};
pub use role::RoleScheme;
pub use table::{
    BaseTables, EMPTY_USER_ID, Equals, RoleColumn, RoleRow, Row, Table, UserColumn, UserRow,
    Value,
};
