use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crudforge_core::{ColumnDescriptor, Result};

use crate::adapter::SchemaReader;
use crate::options::IntrospectOptions;

mod mapper;
mod policy;
mod queries;

pub use policy::{
    AUDIT_ENTITIES, ENTITY_PERMISSIONS, EXCLUDED_TABLES, SqlitePolicyReader, TIMESTAMP_FIELDS,
};

/// Open an existing SQLite database read-only.
///
/// Accepts either a `sqlite:` URL or a plain file path; the file is never
/// created.
pub async fn connect_read_only(location: &str) -> Result<SqlitePool> {
    let options = if location.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(location)
            .map_err(|err| crudforge_core::Error::Db(err.to_string()))?
    } else {
        SqliteConnectOptions::new().filename(location)
    };

    SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options.read_only(true).create_if_missing(false))
        .await
        .map_err(|err| crudforge_core::Error::Db(format!("{location}: {err}")))
}

/// Schema reader for SQLite application stores.
#[derive(Debug, Clone)]
pub struct SqliteSchemaReader {
    pool: SqlitePool,
    options: IntrospectOptions,
}

impl SqliteSchemaReader {
    /// Create a reader using a pre-configured pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_options(pool, IntrospectOptions::default())
    }

    pub fn with_options(pool: SqlitePool, options: IntrospectOptions) -> Self {
        Self { pool, options }
    }
}

#[async_trait]
impl SchemaReader for SqliteSchemaReader {
    fn engine(&self) -> &'static str {
        "sqlite"
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        let raw = queries::list_tables(&self.pool).await?;
        Ok(mapper::filter_tables(raw, &self.options))
    }

    async fn columns_of(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let raw = queries::list_columns(&self.pool, table).await?;
        Ok(mapper::map_columns(raw))
    }
}
