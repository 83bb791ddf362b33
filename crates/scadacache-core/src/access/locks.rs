// ── Segmented lock manager ──
//
// One mutex per resource domain. An operation takes exactly one of them and
// never nests, so there is no lock order to get wrong. The mutexes guard no
// data of their own: they serialize access to the collaborator's slots.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Independent lock scope of the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ResourceDomain {
    /// Role and user tables, shared by both resolvers.
    BaseTables,
    ChannelProperties,
    ControlChannelProperties,
}

#[derive(Debug, Default)]
pub(crate) struct DomainLocks {
    base_tables: Mutex<()>,
    channel_properties: Mutex<()>,
    control_channel_properties: Mutex<()>,
}

impl DomainLocks {
    /// Block until `domain` is free. A panic in a previous holder leaves
    /// nothing inconsistent behind `()`, so poisoning is ignored.
    pub(crate) fn lock(&self, domain: ResourceDomain) -> MutexGuard<'_, ()> {
        self.mutex(domain)
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub(crate) fn try_lock(&self, domain: ResourceDomain) -> Option<MutexGuard<'_, ()>> {
        match self.mutex(domain).try_lock() {
            Ok(guard) => Some(guard),
            Err(std::sync::TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
            Err(std::sync::TryLockError::WouldBlock) => None,
        }
    }

    fn mutex(&self, domain: ResourceDomain) -> &Mutex<()> {
        match domain {
            ResourceDomain::BaseTables => &self.base_tables,
            ResourceDomain::ChannelProperties => &self.channel_properties,
            ResourceDomain::ControlChannelProperties => &self.control_channel_properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn same_domain_is_exclusive() {
        let locks = DomainLocks::default();
        for domain in ResourceDomain::iter() {
            let _held = locks.lock(domain);
            assert!(locks.try_lock(domain).is_none(), "{domain} should be held");
        }
    }

    #[test]
    fn distinct_domains_never_contend() {
        let locks = DomainLocks::default();
        for held in ResourceDomain::iter() {
            let _guard = locks.lock(held);
            for other in ResourceDomain::iter().filter(|d| *d != held) {
                assert!(locks.try_lock(other).is_some(), "{held} blocked {other}");
            }
        }
    }

    #[test]
    fn poisoned_domain_is_still_usable() {
        let locks = DomainLocks::default();
        std::thread::scope(|s| {
            let result = s
                .spawn(|| {
                    let _guard = locks.lock(ResourceDomain::BaseTables);
                    panic!("holder died");
                })
                .join();
            assert!(result.is_err());
        });

        drop(locks.lock(ResourceDomain::BaseTables));
        assert!(locks.try_lock(ResourceDomain::BaseTables).is_some());
    }
}
