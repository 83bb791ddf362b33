//! Role name handler.

use serde::Serialize;

use crate::cli::{GlobalOpts, RoleArgs};
use crate::error::CliError;
use crate::output;
use crate::session::Session;

#[derive(Serialize)]
struct RoleLookup {
    role_id: i32,
    name: String,
    custom: bool,
}

pub fn handle(args: &RoleArgs, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let access = session.ctx.access();
    let lookup = RoleLookup {
        role_id: args.id,
        name: access.role_name(args.id),
        custom: access.config().roles.is_custom(args.id),
    };
    let out = output::render_single(
        &global.output,
        &lookup,
        |r| {
            let kind = if r.custom { "custom" } else { "built-in" };
            format!("Role:     {}\nName:     {}\nKind:     {kind}", r.role_id, r.name)
        },
        |r| r.name.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
