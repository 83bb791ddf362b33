//! Clap derive structures for the `scadacache` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use scadacache_core::Locale;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// scadacache -- query a SCADA client data cache
#[derive(Debug, Parser)]
#[command(
    name = "scadacache",
    version,
    about = "Query SCADA channel metadata and accounts from a cache dump",
    long_about = "Loads a JSON dump of a SCADA client cache and answers the same\n\
        lookups a running client makes: channel properties, user ids,\n\
        role names and login role checks.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "SCADACACHE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Cache dump to load (overrides cache.dump)
    #[arg(long, short = 'd', env = "SCADACACHE_DUMP", global = true)]
    pub dump: Option<PathBuf>,

    /// Message and role name language (en, ru)
    #[arg(long, short = 'l', global = true)]
    pub locale: Option<Locale>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SCADACACHE_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show input channel properties
    #[command(alias = "cnl")]
    Channel(ChannelArgs),

    /// Show control channel properties
    #[command(alias = "ctrl")]
    Control(ChannelArgs),

    /// List input channels in the dump
    Channels,

    /// Look up a user id by exact name
    User(UserArgs),

    /// Show a role's display name
    Role(RoleArgs),

    /// Check whether a user may log in and with which role
    Login(LoginArgs),

    /// Summarize the loaded cache
    Info,

    /// Inspect configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ChannelArgs {
    /// Channel number
    #[arg(allow_negative_numbers = true)]
    pub num: i32,
}

#[derive(Debug, Args)]
pub struct UserArgs {
    /// User name (case-sensitive)
    pub name: String,
}

#[derive(Debug, Args)]
pub struct RoleArgs {
    /// Role id
    #[arg(allow_negative_numbers = true)]
    pub id: i32,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// User name
    pub name: String,

    /// Password to check
    #[arg(long, short = 'p', env = "SCADACACHE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Resolve the role without checking the password
    #[arg(long)]
    pub no_password_check: bool,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: Shell,
}
