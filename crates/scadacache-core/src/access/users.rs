// ── User resolver ──

use super::gateway::TabularGateway;
use crate::model::{EMPTY_USER_ID, Equals, UserColumn};
use crate::sink::Operation;

/// Id of the user named exactly `username`, or [`EMPTY_USER_ID`].
/// Matching is byte-for-byte: no trimming or case folding.
pub(crate) fn user_id(gateway: &TabularGateway<'_>, username: &str) -> i32 {
    gateway.find_row_or(Operation::UserId, &username, EMPTY_USER_ID, |tables| {
        tables
            .users
            .first(&Equals::new(UserColumn::Name, username))
            .map(|row| row.user_id)
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::access::locks::DomainLocks;
    use crate::config::Locale;
    use crate::model::{BaseTables, UserRow};
    use crate::sink::{FailSoft, RecordingSink};
    use crate::store::stub::StubCache;

    fn resolve(cache: &StubCache, sink: &RecordingSink, username: &str) -> i32 {
        let locks = DomainLocks::default();
        let gateway = TabularGateway::new(&locks, cache, FailSoft {
            sink,
            locale: Locale::En,
        });
        user_id(&gateway, username)
    }

    fn admin_tables() -> BaseTables {
        BaseTables::new(
            Vec::new(),
            vec![UserRow {
                user_id: 7,
                name: "admin".into(),
                role_id: 1,
                password: None,
            }],
        )
    }

    #[test]
    fn exact_match_only() {
        let cache = StubCache::with_tables(admin_tables());
        let sink = RecordingSink::default();

        assert_eq!(resolve(&cache, &sink, "admin"), 7);
        assert_eq!(resolve(&cache, &sink, "Admin"), EMPTY_USER_ID);
        assert_eq!(resolve(&cache, &sink, "nobody"), EMPTY_USER_ID);
        assert!(sink.reports().is_empty());
    }

    #[test]
    fn refresh_failure_is_reported_once() {
        let cache = StubCache::with_tables(admin_tables());
        cache.fail_refresh.store(true, Ordering::SeqCst);
        let sink = RecordingSink::default();

        assert_eq!(resolve(&cache, &sink, "admin"), EMPTY_USER_ID);
        assert_eq!(sink.reports(), vec![(Operation::UserId, "admin".to_owned())]);
    }
}
