//! Command dispatch.

pub mod channel;
pub mod config_cmd;
pub mod info;
pub mod login;
pub mod role;
pub mod user;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;
use crate::session::Session;

/// Route a cache command to its handler.
pub fn dispatch(cmd: Command, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Channel(args) => channel::handle_input(&args, session, global),
        Command::Control(args) => channel::handle_control(&args, session, global),
        Command::Channels => channel::handle_list(session, global),
        Command::User(args) => user::handle(&args, session, global),
        Command::Role(args) => role::handle(&args, session, global),
        Command::Login(args) => login::handle(&args, session, global),
        Command::Info => info::handle(session, global),
        Command::Config(_) | Command::Completions(_) => unreachable!("handled before dispatch"),
    }
}
