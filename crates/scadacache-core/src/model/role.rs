// ── Role numbering scheme ──
//
// Built-in roles occupy fixed low ids. Ids in `custom..err` are defined by
// administrators in the role table; `err` marks an invalid or failed login.

use serde::{Deserialize, Serialize};

use crate::config::Locale;
use crate::phrases::Phrases;

/// Bounds of the custom role band plus the well-known built-in role ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleScheme {
    /// First administrator-defined role id (inclusive).
    pub custom: i32,
    /// First invalid role id; also returned for failed logins (exclusive
    /// upper bound of the custom band).
    pub err: i32,
}

impl RoleScheme {
    pub const DISABLED: i32 = 0x00;
    pub const ADMIN: i32 = 0x01;
    pub const DISPATCHER: i32 = 0x02;
    pub const GUEST: i32 = 0x03;
    pub const APP: i32 = 0x04;
    pub const CUSTOM: i32 = 0x0B;
    pub const ERR: i32 = 0xFF;

    pub const fn new(custom: i32, err: i32) -> Self {
        Self { custom, err }
    }

    /// Whether `role_id` must be resolved through the role table.
    pub const fn is_custom(&self, role_id: i32) -> bool {
        self.custom <= role_id && role_id < self.err
    }

    /// Name of a role from the static table. Never touches the role table.
    pub fn builtin_name(&self, role_id: i32, locale: Locale) -> &'static str {
        let phrases = Phrases::for_locale(locale);
        match role_id {
            Self::DISABLED => phrases.disabled_role,
            Self::ADMIN => phrases.admin_role,
            Self::DISPATCHER => phrases.dispatcher_role,
            Self::GUEST => phrases.guest_role,
            Self::APP => phrases.app_role,
            id if id == self.err => phrases.err_role,
            id if self.is_custom(id) => phrases.custom_role,
            _ => phrases.unknown_role,
        }
    }
}

impl Default for RoleScheme {
    fn default() -> Self {
        Self::new(Self::CUSTOM, Self::ERR)
    }
}
