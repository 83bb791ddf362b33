// ── Role resolver ──
//
// Built-in ids come from the static table. Only ids inside the custom band
// pay for the base-table lock and refresh.

use super::gateway::TabularGateway;
use crate::config::Locale;
use crate::model::{Equals, RoleColumn, RoleScheme};
use crate::sink::Operation;

pub(crate) fn role_name(
    gateway: &TabularGateway<'_>,
    scheme: &RoleScheme,
    locale: Locale,
    role_id: i32,
) -> String {
    let static_name = scheme.builtin_name(role_id, locale);
    if !scheme.is_custom(role_id) {
        return static_name.to_owned();
    }

    gateway.find_row_or(
        Operation::RoleName,
        &role_id,
        static_name.to_owned(),
        |tables| {
            tables
                .roles
                .first(&Equals::new(RoleColumn::RoleId, role_id))
                .map(|row| row.name.clone())
        },
    )
}
