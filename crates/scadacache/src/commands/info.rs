//! Cache summary handler.

use serde::Serialize;

use scadacache_core::{CoreError, DataCache};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;
use crate::session::Session;

#[derive(Serialize)]
struct CacheInfo {
    channels: usize,
    control_channels: usize,
    roles: usize,
    users: usize,
    base_loaded_at: Option<chrono::DateTime<chrono::Utc>>,
    refresh_interval_secs: u64,
}

pub fn handle(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let cache = &session.cache;
    let tables = cache.base_tables().map_err(CoreError::from)?;
    let info = CacheInfo {
        channels: cache.channel_properties().map_err(CoreError::from)?.len(),
        control_channels: cache
            .control_channel_properties()
            .map_err(CoreError::from)?
            .len(),
        roles: tables.roles.len(),
        users: tables.users.len(),
        base_loaded_at: cache.last_base_refresh(),
        refresh_interval_secs: cache.refresh_interval().as_secs(),
    };

    let out = output::render_single(
        &global.output,
        &info,
        |i| {
            let loaded = i
                .base_loaded_at
                .map_or_else(|| "-".into(), |t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string());
            [
                format!("Channels:         {}", i.channels),
                format!("Control channels: {}", i.control_channels),
                format!("Roles:            {}", i.roles),
                format!("Users:            {}", i.users),
                format!("Base loaded:      {loaded}"),
                format!("Refresh interval: {}s", i.refresh_interval_secs),
            ]
            .join("\n")
        },
        |i| i.channels.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
