//! CLI configuration: shared config crate plus command-line overrides.

use std::path::PathBuf;

pub use scadacache_config::{Config, config_path, load_config_from, to_access_config};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// The config file in effect: `--config` or the platform default.
pub fn resolve_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config_path)
}

/// Load config from file and environment, then apply CLI flags.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = load_config_from(&resolve_path(global))?;
    if let Some(locale) = global.locale {
        cfg.locale = locale;
    }
    if let Some(ref dump) = global.dump {
        cfg.cache.dump = Some(dump.clone());
    }
    Ok(cfg)
}
