// ── In-memory base tables ──
//
// Immutable tables rebuilt whole on every refresh. Rows are queried with
// typed equality filters over named columns; an optional hash index on one
// column turns the common lookup into a single probe.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// User id returned when no user matches.
pub const EMPTY_USER_ID: i32 = 0;

/// A borrowed cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Int(i32),
    Text(&'a str),
}

impl From<i32> for Value<'_> {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Self::Text(v)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

/// A table row with named columns.
pub trait Row {
    type Column: Copy + Eq + fmt::Debug;

    fn value(&self, column: Self::Column) -> Value<'_>;
}

/// Equality predicate on one column. The compared value is carried as
/// data and never spliced into a textual query.
#[derive(Debug, Clone, Copy)]
pub struct Equals<'v, C> {
    column: C,
    value: Value<'v>,
}

impl<'v, C: Copy> Equals<'v, C> {
    pub fn new(column: C, value: impl Into<Value<'v>>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }

    pub fn column(&self) -> C {
        self.column
    }

    pub fn value(&self) -> Value<'v> {
        self.value
    }

    pub fn matches<R>(&self, row: &R) -> bool
    where
        R: Row<Column = C>,
    {
        row.value(self.column) == self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum IndexKey {
    Int(i32),
    Text(String),
}

impl From<Value<'_>> for IndexKey {
    fn from(v: Value<'_>) -> Self {
        match v {
            Value::Int(i) => Self::Int(i),
            Value::Text(s) => Self::Text(s.to_owned()),
        }
    }
}

#[derive(Debug, Clone)]
struct ColumnIndex<C> {
    column: C,
    /// Cell value -> position of the first row holding it.
    positions: HashMap<IndexKey, usize>,
}

/// An immutable in-memory table.
#[derive(Debug, Clone)]
pub struct Table<R: Row> {
    rows: Vec<R>,
    index: Option<ColumnIndex<R::Column>>,
}

impl<R: Row> Table<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows, index: None }
    }

    /// Build a table with a hash index on `column`. When several rows share
    /// a value the first one wins, matching a linear scan.
    pub fn indexed(rows: Vec<R>, column: R::Column) -> Self {
        let mut positions = HashMap::with_capacity(rows.len());
        for (pos, row) in rows.iter().enumerate() {
            positions
                .entry(IndexKey::from(row.value(column)))
                .or_insert(pos);
        }
        Self {
            rows,
            index: Some(ColumnIndex { column, positions }),
        }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row matching `filter`.
    pub fn first(&self, filter: &Equals<'_, R::Column>) -> Option<&R> {
        if let Some(index) = &self.index {
            if index.column == filter.column() {
                return index
                    .positions
                    .get(&IndexKey::from(filter.value()))
                    .and_then(|&pos| self.rows.get(pos));
            }
        }
        self.rows.iter().find(|row| filter.matches(*row))
    }

    /// All rows matching `filter`, in table order.
    pub fn filter<'t>(
        &'t self,
        filter: &'t Equals<'_, R::Column>,
    ) -> impl Iterator<Item = &'t R> + 't {
        self.rows.iter().filter(move |row| filter.matches(*row))
    }
}

impl<R: Row> Default for Table<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

// ── Role table ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRow {
    pub role_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleColumn {
    RoleId,
    Name,
}

impl Row for RoleRow {
    type Column = RoleColumn;

    fn value(&self, column: RoleColumn) -> Value<'_> {
        match column {
            RoleColumn::RoleId => Value::Int(self.role_id),
            RoleColumn::Name => Value::Text(&self.name),
        }
    }
}

// ── User table ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub user_id: i32,
    pub name: String,
    #[serde(default)]
    pub role_id: i32,
    /// Stored credential, only present in test and inspection dumps.
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserColumn {
    UserId,
    Name,
    RoleId,
}

impl Row for UserRow {
    type Column = UserColumn;

    fn value(&self, column: UserColumn) -> Value<'_> {
        match column {
            UserColumn::UserId => Value::Int(self.user_id),
            UserColumn::Name => Value::Text(&self.name),
            UserColumn::RoleId => Value::Int(self.role_id),
        }
    }
}

// ── Bundle ──────────────────────────────────────────────────────────

/// The configuration-database tables the facade reads. Replaced whole by
/// the refresh side.
#[derive(Debug, Clone, Default)]
pub struct BaseTables {
    pub roles: Table<RoleRow>,
    pub users: Table<UserRow>,
}

impl BaseTables {
    /// Bundle rows, indexing roles by id and users by name.
    pub fn new(roles: Vec<RoleRow>, users: Vec<UserRow>) -> Self {
        Self {
            roles: Table::indexed(roles, RoleColumn::RoleId),
            users: Table::indexed(users, UserColumn::Name),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::RoleScheme;

    fn user(user_id: i32, name: &str, role_id: i32) -> UserRow {
        UserRow {
            user_id,
            name: name.into(),
            role_id,
            password: None,
        }
    }

    fn users() -> Vec<UserRow> {
        vec![
            user(7, "admin", RoleScheme::ADMIN),
            user(8, "operator", 20),
            user(9, "guest", RoleScheme::GUEST),
            user(10, "operator", 21),
        ]
    }

    #[test]
    fn indexed_and_scanned_lookups_agree() {
        let indexed = Table::indexed(users(), UserColumn::Name);
        let scanned = Table::new(users());

        for name in ["admin", "operator", "guest", "nobody", "Admin", ""] {
            let filter = Equals::new(UserColumn::Name, name);
            assert_eq!(indexed.first(&filter), scanned.first(&filter), "name {name:?}");
        }
    }

    #[test]
    fn duplicate_values_resolve_to_first_row() {
        let table = Table::indexed(users(), UserColumn::Name);
        let row = table.first(&Equals::new(UserColumn::Name, "operator")).unwrap();
        assert_eq!(row.user_id, 8);
    }

    #[test]
    fn text_equality_is_exact() {
        let table = Table::indexed(users(), UserColumn::Name);
        assert!(table.first(&Equals::new(UserColumn::Name, "Admin")).is_none());
        assert!(table.first(&Equals::new(UserColumn::Name, "admin ")).is_none());
    }

    #[test]
    fn filter_on_unindexed_column_scans() {
        let table = Table::indexed(users(), UserColumn::Name);
        let filter = Equals::new(UserColumn::RoleId, 20);
        let ids: Vec<i32> = table.filter(&filter).map(|u| u.user_id).collect();
        assert_eq!(ids, vec![8]);
        assert_eq!(table.first(&Equals::new(UserColumn::UserId, 9)).unwrap().name, "guest");
    }

    #[test]
    fn hostile_names_are_plain_values() {
        let mut rows = users();
        rows.push(user(11, "x' OR '1'='1", RoleScheme::GUEST));
        let table = Table::indexed(rows, UserColumn::Name);

        let hit = table.first(&Equals::new(UserColumn::Name, "x' OR '1'='1")).unwrap();
        assert_eq!(hit.user_id, 11);
        assert!(table.first(&Equals::new(UserColumn::Name, "' OR ''='")).is_none());
    }

    #[test]
    fn base_tables_index_roles_by_id() {
        let tables = BaseTables::new(
            vec![RoleRow {
                role_id: 150,
                name: "Operator".into(),
            }],
            Vec::new(),
        );
        let row = tables.roles.first(&Equals::new(RoleColumn::RoleId, 150)).unwrap();
        assert_eq!(row.name, "Operator");
        assert!(tables.users.is_empty());
    }
}
