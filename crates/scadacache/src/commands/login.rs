//! Login check handler.

use serde::Serialize;

use scadacache_core::LoginError;

use crate::cli::{GlobalOpts, LoginArgs};
use crate::error::CliError;
use crate::output;
use crate::session::Session;

#[derive(Serialize)]
struct LoginResult<'a> {
    username: &'a str,
    role_id: i32,
    role_name: String,
}

pub fn handle(args: &LoginArgs, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let check_password = !args.no_password_check;
    let password = args.password.as_deref().unwrap_or_default();

    let role_id = session
        .ctx
        .check_user(&args.name, password, check_password)
        .map_err(|e| CliError::LoginRefused {
            username: args.name.clone(),
            message: e.message(session.ctx.config().locale).into(),
            unavailable: e == LoginError::ServerUnavailable,
        })?;

    let result = LoginResult {
        username: &args.name,
        role_id,
        role_name: session.ctx.access().role_name(role_id),
    };
    let out = output::render_single(
        &global.output,
        &result,
        |r| {
            format!(
                "User:     {}\nRole:     {} ({})",
                r.username, r.role_name, r.role_id
            )
        },
        |r| r.role_id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
