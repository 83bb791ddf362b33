//! JSON cache dumps.
//!
//! A dump holds everything a client cache would: both channel property
//! sequences and the role and user tables. Channel snapshots are published
//! once at startup; base tables are re-read from the file whenever the
//! cache considers them stale.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use scadacache_core::{
    BaseTables, BaseTablesLoader, ChannelProperties, ControlChannelProperties, DataCache, Equals,
    RoleRow, RoleScheme, SourceError, UserColumn, UserRow, UserVerifier,
};

// ── Dump file ───────────────────────────────────────────────────────

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheDump {
    pub channels: Vec<ChannelProperties>,
    pub control_channels: Vec<ControlChannelProperties>,
    pub roles: Vec<RoleRow>,
    pub users: Vec<UserRow>,
}

impl CacheDump {
    pub fn read(path: &Path) -> Result<Self, SourceError> {
        let text = std::fs::read_to_string(path)?;
        let dump: Self = serde_json::from_str(&text)
            .map_err(|e| SourceError::malformed(format!("{}: {e}", path.display())))?;
        debug!(
            path = %path.display(),
            channels = dump.channels.len(),
            control_channels = dump.control_channels.len(),
            roles = dump.roles.len(),
            users = dump.users.len(),
            "cache dump read"
        );
        Ok(dump)
    }

    pub fn into_base_tables(self) -> BaseTables {
        BaseTables::new(self.roles, self.users)
    }
}

/// Reloads base tables from a dump file.
pub struct DumpLoader {
    path: PathBuf,
}

impl DumpLoader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl BaseTablesLoader for DumpLoader {
    fn load(&self) -> Result<BaseTables, SourceError> {
        CacheDump::read(&self.path).map(CacheDump::into_base_tables)
    }
}

// ── Credential check ────────────────────────────────────────────────

/// Verifies logins against the user table of the cache.
///
/// Passwords are compared with the dump's stored credential as plain text.
/// A user without a stored credential only passes role-only checks.
pub struct TableVerifier {
    cache: Arc<dyn DataCache>,
}

impl TableVerifier {
    pub fn new(cache: Arc<dyn DataCache>) -> Self {
        Self { cache }
    }
}

impl UserVerifier for TableVerifier {
    fn verify(&self, username: &str, password: Option<&str>) -> Result<i32, SourceError> {
        self.cache.refresh_base_tables()?;
        let tables = self.cache.base_tables()?;

        let Some(user) = tables.users.first(&Equals::new(UserColumn::Name, username)) else {
            return Ok(RoleScheme::ERR);
        };

        let accepted = password.is_none_or(|given| user.password.as_deref() == Some(given));
        Ok(if accepted { user.role_id } else { RoleScheme::ERR })
    }
}
