use std::collections::BTreeMap;

use crudforge_core::{ColumnDescriptor, EntityPermission};
use tracing::warn;

use crate::options::IntrospectOptions;

use super::queries::{RawColumn, RawPermission};

const SYSTEM_TABLE_PREFIXES: &[&str] = &["sqlite_", "_libsql_", "_cf_"];
const SYSTEM_TABLES: &[&str] = &["libsql_wappruntime_config"];

pub fn is_system_table(name: &str) -> bool {
    SYSTEM_TABLE_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
        || SYSTEM_TABLES.contains(&name)
}

pub fn filter_tables(raw: Vec<String>, opts: &IntrospectOptions) -> Vec<String> {
    raw.into_iter()
        .filter(|table| match &opts.tables {
            Some(list) => list.iter().any(|item| item == table),
            None => opts.include_system_tables || !is_system_table(table),
        })
        .collect()
}

pub fn map_columns(raw: Vec<RawColumn>) -> Vec<ColumnDescriptor> {
    raw.into_iter()
        .filter(|col| col.hidden != 1)
        .map(|col| ColumnDescriptor {
            name: col.name,
            declared_type: col.declared_type,
            nullable: !col.not_null,
            primary_key_rank: u32::try_from(col.pk).unwrap_or(0),
            // Generated columns are computed by the store, like defaults.
            has_default: col.default.is_some() || col.hidden >= 2,
        })
        .collect()
}

pub fn map_permissions(raw: Vec<RawPermission>) -> BTreeMap<String, EntityPermission> {
    raw.into_iter()
        .filter_map(|row| match (row.read_perm, row.write_perm) {
            (Some(read), Some(write)) => Some((row.table_name, EntityPermission { read, write })),
            _ => {
                warn!(
                    event = "permission_incomplete",
                    table = %row.table_name,
                    "permission row without read and write values ignored"
                );
                None
            }
        })
        .collect()
}
