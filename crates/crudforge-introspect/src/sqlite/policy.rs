use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::warn;

use crudforge_core::{EntityPermission, Result};

use crate::adapter::PolicyReader;

use super::{mapper, queries};

pub const EXCLUDED_TABLES: &str = "codegen_excluded_tables";
pub const TIMESTAMP_FIELDS: &str = "codegen_timestamp_fields";
pub const ENTITY_PERMISSIONS: &str = "codegen_entity_permissions";
pub const AUDIT_ENTITIES: &str = "codegen_audit_entities";

/// Policy reader over the four `codegen_*` tables of a SQLite policy store.
///
/// A missing policy table reads as empty.
#[derive(Debug, Clone)]
pub struct SqlitePolicyReader {
    pool: SqlitePool,
}

impl SqlitePolicyReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn source_present(&self, table: &str) -> Result<bool> {
        let present = queries::table_exists(&self.pool, table).await?;
        if !present {
            warn!(event = "policy_table_missing", table = %table, "treating policy source as empty");
        }
        Ok(present)
    }

    async fn name_set(&self, table: &str, column: &str) -> Result<BTreeSet<String>> {
        if !self.source_present(table).await? {
            return Ok(BTreeSet::new());
        }
        let sql = format!("select {column} from {table} order by {column}");
        Ok(queries::list_names(&self.pool, &sql)
            .await?
            .into_iter()
            .collect())
    }
}

#[async_trait]
impl PolicyReader for SqlitePolicyReader {
    async fn excluded_tables(&self) -> Result<BTreeSet<String>> {
        self.name_set(EXCLUDED_TABLES, "table_name").await
    }

    async fn timestamp_fields(&self) -> Result<BTreeSet<String>> {
        self.name_set(TIMESTAMP_FIELDS, "field_name").await
    }

    async fn permissions(&self) -> Result<BTreeMap<String, EntityPermission>> {
        if !self.source_present(ENTITY_PERMISSIONS).await? {
            return Ok(BTreeMap::new());
        }
        let raw = queries::list_permissions(&self.pool).await?;
        Ok(mapper::map_permissions(raw))
    }

    async fn audit_entities(&self) -> Result<BTreeSet<String>> {
        self.name_set(AUDIT_ENTITIES, "table_name").await
    }
}
