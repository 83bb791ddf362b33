//! Shared configuration for scadacache tools.
//!
//! A TOML file under the platform config directory, overridable through
//! `SCADACACHE_*` environment variables, translated into
//! `scadacache_core::AccessConfig`. Nested keys use a double underscore:
//! `SCADACACHE_ROLES__CUSTOM=100`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use scadacache_core::{AccessConfig, Locale, RoleScheme};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Locale for diagnostics and built-in role names.
    #[serde(default)]
    pub locale: Locale,

    #[serde(default)]
    pub roles: Roles,

    #[serde(default)]
    pub cache: Cache,
}

/// Role numbering bounds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Roles {
    /// First custom role id.
    #[serde(default = "default_custom")]
    pub custom: i32,

    /// First invalid role id.
    #[serde(default = "default_err")]
    pub err: i32,
}

impl Default for Roles {
    fn default() -> Self {
        Self {
            custom: default_custom(),
            err: default_err(),
        }
    }
}

fn default_custom() -> i32 {
    RoleScheme::CUSTOM
}
fn default_err() -> i32 {
    RoleScheme::ERR
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Cache {
    /// Seconds loaded base tables stay fresh. 0 = reload on every lookup.
    #[serde(default = "default_base_refresh_secs")]
    pub base_refresh_secs: u64,

    /// Cache dump to load (JSON).
    pub dump: Option<PathBuf>,
}

impl Default for Cache {
    fn default() -> Self {
        Self {
            base_refresh_secs: default_base_refresh_secs(),
            dump: None,
        }
    }
}

fn default_base_refresh_secs() -> u64 {
    60
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "scadacache", "scadacache").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("scadacache");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the default file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the full Config from `path` + environment. A missing file is not
/// an error; defaults and environment still apply.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SCADACACHE_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if it cannot be read.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Serialize config to TOML and write it to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

// ── Translation ─────────────────────────────────────────────────────

/// Validate and build the core `AccessConfig`.
pub fn to_access_config(cfg: &Config) -> Result<AccessConfig, ConfigError> {
    if cfg.roles.custom < 0 {
        return Err(ConfigError::Validation {
            field: "roles.custom".into(),
            reason: format!("must be non-negative, got {}", cfg.roles.custom),
        });
    }
    if cfg.roles.err <= cfg.roles.custom {
        return Err(ConfigError::Validation {
            field: "roles.err".into(),
            reason: format!(
                "must be greater than roles.custom ({}), got {}",
                cfg.roles.custom, cfg.roles.err
            ),
        });
    }

    Ok(AccessConfig {
        locale: cfg.locale,
        roles: RoleScheme::new(cfg.roles.custom, cfg.roles.err),
        base_refresh_interval: Duration::from_secs(cfg.cache.base_refresh_secs),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_core_scheme() {
        let access = to_access_config(&Config::default()).unwrap();
        assert_eq!(access.roles, RoleScheme::default());
        assert_eq!(access.locale, Locale::En);
        assert_eq!(access.base_refresh_interval, Duration::from_secs(60));
    }

    #[test]
    fn file_values_are_loaded() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "scadacache.toml",
                r#"
                    locale = "ru"

                    [roles]
                    custom = 100
                    err = 999

                    [cache]
                    base_refresh_secs = 5
                    dump = "cache.json"
                "#,
            )?;

            let cfg = load_config_from(Path::new("scadacache.toml")).map_err(|e| e.to_string())?;
            assert_eq!(cfg.locale, Locale::Ru);
            assert_eq!(cfg.roles, Roles { custom: 100, err: 999 });
            assert_eq!(cfg.cache.base_refresh_secs, 5);
            assert_eq!(cfg.cache.dump, Some(PathBuf::from("cache.json")));
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("scadacache.toml", "[roles]\ncustom = 100\nerr = 999\n")?;
            jail.set_env("SCADACACHE_ROLES__ERR", "500");
            jail.set_env("SCADACACHE_LOCALE", "ru");

            let cfg = load_config_from(Path::new("scadacache.toml")).map_err(|e| e.to_string())?;
            assert_eq!(cfg.roles.custom, 100);
            assert_eq!(cfg.roles.err, 500);
            assert_eq!(cfg.locale, Locale::Ru);
            Ok(())
        });
    }

    #[test]
    fn missing_file_yields_defaults() {
        Jail::expect_with(|_| {
            let cfg = load_config_from(Path::new("absent.toml")).map_err(|e| e.to_string())?;
            assert_eq!(cfg, Config::default());
            Ok(())
        });
    }

    #[test]
    fn inverted_band_is_rejected() {
        let cfg = Config {
            roles: Roles { custom: 50, err: 50 },
            ..Config::default()
        };
        let err = to_access_config(&cfg).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "roles.err"));
    }

    #[test]
    fn negative_custom_is_rejected() {
        let cfg = Config {
            roles: Roles { custom: -1, err: 10 },
            ..Config::default()
        };
        assert!(to_access_config(&cfg).is_err());
    }

    #[test]
    fn save_writes_pretty_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = Config {
            locale: Locale::Ru,
            roles: Roles { custom: 20, err: 200 },
            cache: Cache {
                base_refresh_secs: 0,
                dump: Some(PathBuf::from("/var/lib/scada/cache.json")),
            },
        };

        save_config_to(&cfg, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("locale = \"ru\""));
        assert!(text.contains("custom = 20"));
    }
}
