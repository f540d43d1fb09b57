use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Read and write permission strings guarding one table's handler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityPermission {
    pub read: String,
    pub write: String,
}

/// Generation policy loaded once per run from the policy store.
///
/// Ordered collections keep every lookup and serialization deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationPolicy {
    pub excluded_tables: BTreeSet<String>,
    pub timestamp_fields: BTreeSet<String>,
    pub permissions: BTreeMap<String, EntityPermission>,
    pub audit_entities: BTreeSet<String>,
}

impl GenerationPolicy {
    pub fn is_excluded(&self, table: &str) -> bool {
        self.excluded_tables.contains(table)
    }

    pub fn is_timestamp_field(&self, column: &str) -> bool {
        self.timestamp_fields.contains(column)
    }

    pub fn permission_for(&self, table: &str) -> Option<&EntityPermission> {
        self.permissions.get(table)
    }

    pub fn is_audited(&self, table: &str) -> bool {
        self.audit_entities.contains(table)
    }
}
