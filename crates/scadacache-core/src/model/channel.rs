// ── Channel domain types ──

use serde::{Deserialize, Serialize};

/// A value addressable by a unique integer key inside a sorted snapshot.
pub trait Keyed {
    fn key(&self) -> i32;
}

/// Properties of one input channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelProperties {
    /// Input channel number, unique within the snapshot.
    pub cnl_num: i32,
    pub cnl_name: String,
    pub cnl_type_id: i32,
    /// Object (site/area) the channel belongs to.
    pub obj_num: i32,
    pub obj_name: String,
    /// Device (KP) that produces the channel's data.
    pub kp_num: i32,
    pub kp_name: String,
    pub param_id: i32,
    pub param_name: String,
    pub format_id: i32,
    pub unit_name: String,
    pub show_number: bool,
    pub event_enabled: bool,
}

impl Keyed for ChannelProperties {
    fn key(&self) -> i32 {
        self.cnl_num
    }
}

/// Properties of one control (output) channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlChannelProperties {
    /// Control channel number, unique within the snapshot.
    pub ctrl_cnl_num: i32,
    pub ctrl_cnl_name: String,
    pub cmd_type_id: i32,
    pub obj_num: i32,
    pub obj_name: String,
    pub kp_num: i32,
    pub kp_name: String,
    /// Command value set (e.g. "Off/On"), if the channel has one.
    pub cmd_val_id: i32,
    pub event_enabled: bool,
}

impl Keyed for ControlChannelProperties {
    fn key(&self) -> i32 {
        self.ctrl_cnl_num
    }
}
