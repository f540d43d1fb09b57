use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;

use crudforge_core::{
    ColumnDescriptor, EntityPermission, GenerationPolicy, Result, SchemaSnapshot, TableDescriptor,
};

/// Trait implemented by application stores that can describe their tables.
#[async_trait]
pub trait SchemaReader: Send + Sync {
    /// Returns the engine identifier (e.g. `sqlite`).
    fn engine(&self) -> &'static str;

    /// Application table names in name order, system tables removed.
    async fn list_tables(&self) -> Result<Vec<String>>;

    /// Columns of one table in declaration order.
    async fn columns_of(&self, table: &str) -> Result<Vec<ColumnDescriptor>>;

    /// Read every table in full. Any store error aborts the whole snapshot.
    async fn read_schema(&self) -> Result<SchemaSnapshot> {
        let mut tables = Vec::new();
        for name in self.list_tables().await? {
            let columns = self.columns_of(&name).await?;
            tables.push(TableDescriptor { name, columns });
        }
        Ok(SchemaSnapshot {
            engine: self.engine().to_string(),
            tables,
        })
    }
}

/// Trait implemented by stores holding the generation policy.
///
/// Each operation reads one independent source; an empty source is a valid
/// policy, not an error.
#[async_trait]
pub trait PolicyReader: Send + Sync {
    async fn excluded_tables(&self) -> Result<BTreeSet<String>>;

    async fn timestamp_fields(&self) -> Result<BTreeSet<String>>;

    async fn permissions(&self) -> Result<BTreeMap<String, EntityPermission>>;

    async fn audit_entities(&self) -> Result<BTreeSet<String>>;

    async fn read_policy(&self) -> Result<GenerationPolicy> {
        Ok(GenerationPolicy {
            excluded_tables: self.excluded_tables().await?,
            timestamp_fields: self.timestamp_fields().await?,
            permissions: self.permissions().await?,
            audit_entities: self.audit_entities().await?,
        })
    }
}
