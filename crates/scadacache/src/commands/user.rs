//! User lookup handler.

use serde::Serialize;

use scadacache_core::EMPTY_USER_ID;

use crate::cli::{GlobalOpts, UserArgs};
use crate::error::CliError;
use crate::output;
use crate::session::Session;

#[derive(Serialize)]
struct UserLookup<'a> {
    name: &'a str,
    user_id: i32,
}

/// Prints the user id; an unknown name prints 0 and exits as not found.
pub fn handle(args: &UserArgs, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let lookup = UserLookup {
        name: &args.name,
        user_id: session.ctx.access().user_id(&args.name),
    };
    let out = output::render_single(
        &global.output,
        &lookup,
        |u| format!("User:     {}\nID:       {}", u.name, u.user_id),
        |u| u.user_id.to_string(),
    )?;
    output::print_output(&out, global.quiet);

    if lookup.user_id == EMPTY_USER_ID {
        return Err(CliError::NotFound {
            resource_type: "user".into(),
            identifier: args.name.clone(),
            list_command: "info".into(),
        });
    }
    Ok(())
}
