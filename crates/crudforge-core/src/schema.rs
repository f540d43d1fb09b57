use serde::{Deserialize, Serialize};

/// Snapshot of every application table read in one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemaSnapshot {
    /// Database engine identifier (e.g. `sqlite`).
    pub engine: String,
    /// Tables in name order.
    pub tables: Vec<TableDescriptor>,
}

/// One table as reported by the schema store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableDescriptor {
    pub name: String,
    /// Columns in declaration order.
    pub columns: Vec<ColumnDescriptor>,
}

/// Column metadata exactly as the store declares it.
///
/// The declared type is kept opaque here; interpreting it is the
/// classifier's job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub declared_type: String,
    pub nullable: bool,
    /// 1-based position inside the primary key, `0` when not part of it.
    pub primary_key_rank: u32,
    pub has_default: bool,
}

impl ColumnDescriptor {
    pub fn is_primary_key(&self) -> bool {
        self.primary_key_rank > 0
    }
}

impl TableDescriptor {
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|column| column.name == name)
    }
}
