use std::collections::BTreeMap;

use serde_json::Value;
use sqlx::{QueryBuilder, Sqlite};

use crate::error::RepositoryError;

pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 100;
pub const DEFAULT_LIMIT: u32 = 20;

/// serde default for list-query `limit`.
pub fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// Append `where` equality filters to a `SELECT`.
///
/// Keys must be in `columns`; values are always bound, never interpolated.
/// `has_where` tells whether the statement already carries a `WHERE`.
pub fn push_filters<'args>(
    builder: &mut QueryBuilder<'args, Sqlite>,
    columns: &[&str],
    filter: Option<&BTreeMap<String, Value>>,
    has_where: bool,
) -> Result<(), RepositoryError> {
    let Some(filter) = filter else {
        return Ok(());
    };

    let mut first = !has_where;
    for (column, value) in filter {
        if !columns.contains(&column.as_str()) {
            return Err(RepositoryError::UnknownFilter(column.clone()));
        }
        builder.push(if first { " WHERE " } else { " AND " });
        first = false;
        builder.push(format!("\"{column}\""));

        match value {
            Value::Null => {
                builder.push(" IS NULL");
            }
            Value::Bool(flag) => {
                builder.push(" = ").push_bind(*flag);
            }
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    builder.push(" = ").push_bind(int);
                } else if let Some(float) = number.as_f64() {
                    builder.push(" = ").push_bind(float);
                } else {
                    return Err(RepositoryError::UnsupportedFilter(column.clone()));
                }
            }
            Value::String(text) => {
                builder.push(" = ").push_bind(text.clone());
            }
            Value::Array(_) | Value::Object(_) => {
                return Err(RepositoryError::UnsupportedFilter(column.clone()));
            }
        }
    }
    Ok(())
}
