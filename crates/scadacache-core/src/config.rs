// ── Runtime access configuration ──
//
// Describes how the facade behaves: diagnostic locale, role numbering
// bounds, and how long loaded base tables stay fresh. Core never reads
// config files; `scadacache-config` builds an `AccessConfig` and hands it in.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::RoleScheme;

/// Language used for diagnostic messages and built-in role names.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Configuration for a single [`DataAccess`](crate::DataAccess) facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessConfig {
    /// Locale for log messages and built-in role names.
    pub locale: Locale,
    /// Role numbering scheme (custom band bounds).
    pub roles: RoleScheme,
    /// How long base tables loaded by [`MemoryCache`](crate::MemoryCache)
    /// stay fresh. Zero reloads on every lookup.
    pub base_refresh_interval: Duration,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            roles: RoleScheme::default(),
            base_refresh_interval: Duration::from_secs(60),
        }
    }
}
