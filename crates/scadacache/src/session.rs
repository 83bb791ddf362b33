//! Startup wiring: config, dump, cache, facade and application context.

use std::sync::Arc;

use tracing::info;

use scadacache_core::{AppContext, BaseTables, DataAccess, MemoryCache};

use crate::cli::GlobalOpts;
use crate::config;
use crate::dump::{CacheDump, DumpLoader, TableVerifier};
use crate::error::CliError;

/// Everything a command needs, built once per invocation.
pub struct Session {
    pub ctx: AppContext,
    pub cache: Arc<MemoryCache>,
}

impl Session {
    pub fn open(global: &GlobalOpts) -> Result<Self, CliError> {
        let cfg = config::load(global)?;
        let access_config = config::to_access_config(&cfg)?;

        let path = cfg.cache.dump.clone().ok_or_else(|| CliError::NoDump {
            path: config::resolve_path(global).display().to_string(),
        })?;
        let dump = CacheDump::read(&path).map_err(|source| CliError::DumpUnreadable {
            path: path.display().to_string(),
            source,
        })?;

        let cache = Arc::new(MemoryCache::with_loader(
            DumpLoader::new(path.clone()),
            access_config.base_refresh_interval,
        ));
        cache.publish_channel_properties(dump.channels);
        cache.publish_control_channel_properties(dump.control_channels);
        cache.publish_base_tables(BaseTables::new(dump.roles, dump.users));
        info!(path = %path.display(), "cache dump loaded");

        let access = DataAccess::builder()
            .cache(cache.clone())
            .config(access_config)
            .build()?;
        let ctx = AppContext::new(access).with_verifier(Arc::new(TableVerifier::new(cache.clone())));

        Ok(Self { ctx, cache })
    }
}
