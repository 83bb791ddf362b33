// ── Concurrent cache-access facade ──
//
// Segmented locks, snapshot-then-search over sorted property arrays, the
// refresh-then-filter gateway over base tables, and the role/user
// resolvers composed on top of it.

mod facade;
mod gateway;
mod index;
mod locks;
mod roles;
mod users;

pub use facade::{DataAccess, DataAccessBuilder};
pub use locks::ResourceDomain;
