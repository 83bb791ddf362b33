//! Channel command handlers.

use std::sync::Arc;

use tabled::Tabled;

use scadacache_core::{ChannelProperties, ControlChannelProperties, CoreError, DataCache};

use crate::cli::{ChannelArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;
use crate::session::Session;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ChannelRow {
    #[tabled(rename = "Num")]
    num: i32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Object")]
    object: String,
    #[tabled(rename = "Device")]
    device: String,
    #[tabled(rename = "Unit")]
    unit: String,
}

impl From<&Arc<ChannelProperties>> for ChannelRow {
    fn from(c: &Arc<ChannelProperties>) -> Self {
        Self {
            num: c.cnl_num,
            name: c.cnl_name.clone(),
            object: or_dash(&c.obj_name),
            device: or_dash(&c.kp_name),
            unit: or_dash(&c.unit_name),
        }
    }
}

fn or_dash(s: &str) -> String {
    if s.is_empty() { "-".into() } else { s.to_owned() }
}

// ── Detail views ────────────────────────────────────────────────────

fn input_detail(c: &ChannelProperties) -> String {
    [
        format!("Channel:  {}", c.cnl_num),
        format!("Name:     {}", c.cnl_name),
        format!("Type:     {}", c.cnl_type_id),
        format!("Object:   {} {}", c.obj_num, or_dash(&c.obj_name)),
        format!("Device:   {} {}", c.kp_num, or_dash(&c.kp_name)),
        format!("Param:    {} {}", c.param_id, or_dash(&c.param_name)),
        format!("Format:   {}", c.format_id),
        format!("Unit:     {}", or_dash(&c.unit_name)),
        format!("Show num: {}", c.show_number),
        format!("Events:   {}", c.event_enabled),
    ]
    .join("\n")
}

fn control_detail(c: &ControlChannelProperties) -> String {
    [
        format!("Channel:  {}", c.ctrl_cnl_num),
        format!("Name:     {}", c.ctrl_cnl_name),
        format!("Command:  {}", c.cmd_type_id),
        format!("Object:   {} {}", c.obj_num, or_dash(&c.obj_name)),
        format!("Device:   {} {}", c.kp_num, or_dash(&c.kp_name)),
        format!("Values:   {}", c.cmd_val_id),
        format!("Events:   {}", c.event_enabled),
    ]
    .join("\n")
}

fn not_found(resource_type: &str, num: i32) -> CliError {
    CliError::NotFound {
        resource_type: resource_type.into(),
        identifier: num.to_string(),
        list_command: "channels".into(),
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub fn handle_input(
    args: &ChannelArgs,
    session: &Session,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let props = session
        .ctx
        .access()
        .channel_properties(args.num)
        .ok_or_else(|| not_found("input channel", args.num))?;
    let out = output::render_single(
        &global.output,
        props.as_ref(),
        input_detail,
        |c| c.cnl_name.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub fn handle_control(
    args: &ChannelArgs,
    session: &Session,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let props = session
        .ctx
        .access()
        .control_channel_properties(args.num)
        .ok_or_else(|| not_found("control channel", args.num))?;
    let out = output::render_single(
        &global.output,
        props.as_ref(),
        control_detail,
        |c| c.ctrl_cnl_name.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub fn handle_list(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let snapshot = session
        .cache
        .channel_properties()
        .map_err(CoreError::from)?;
    let out = output::render_list(
        &global.output,
        snapshot.as_slice(),
        |c| ChannelRow::from(c),
        |c| c.cnl_num.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
