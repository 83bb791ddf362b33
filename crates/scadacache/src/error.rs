//! CLI error types with miette diagnostics.
//!
//! Maps core, config and login failures into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use scadacache_config::ConfigError;
use scadacache_core::{CoreError, SourceError};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Cache dump ───────────────────────────────────────────────────
    #[error("No cache dump configured")]
    #[diagnostic(
        code(scadacache::no_dump),
        help(
            "Pass --dump <FILE>, set SCADACACHE_DUMP, or set cache.dump in\n\
             {path}"
        )
    )]
    NoDump { path: String },

    #[error("Could not load cache dump {path}")]
    #[diagnostic(
        code(scadacache::dump_unreadable),
        help("The dump must be a JSON object with channels, control_channels, roles and users.")
    )]
    DumpUnreadable {
        path: String,
        #[source]
        source: SourceError,
    },

    // ── Lookups ──────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(scadacache::not_found),
        help("Run: scadacache {list_command} to see what the dump contains")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Login ────────────────────────────────────────────────────────
    #[error("Login refused for '{username}': {message}")]
    #[diagnostic(code(scadacache::login_refused))]
    LoginRefused {
        username: String,
        message: String,
        unavailable: bool,
    },

    // ── Validation / configuration ───────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(scadacache::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(
        code(scadacache::config),
        help("Run: scadacache config path to locate the config file.")
    )]
    Config(Box<ConfigError>),

    #[error(transparent)]
    #[diagnostic(code(scadacache::core))]
    Core(#[from] CoreError),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render TOML: {0}")]
    #[diagnostic(code(scadacache::toml))]
    Toml(#[from] toml::ser::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(scadacache::json))]
    Json(#[from] serde_json::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(Box::new(other)),
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::LoginRefused {
                unavailable: true, ..
            }
            | Self::DumpUnreadable { .. } => exit_code::CONNECTION,
            Self::LoginRefused { .. } => exit_code::AUTH,
            Self::NoDump { .. } | Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}
