use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::{is_integer_type, FieldClassifier, ValidationRule};
use crate::conventions::Conventions;
use crate::identifiers::{is_emittable_identifier, is_reserved_type_name, module_name};
use crate::naming::NameResolver;
use crate::policy::{EntityPermission, GenerationPolicy};
use crate::schema::{ColumnDescriptor, TableDescriptor};

/// Value type of the single primary-key column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryKeyType {
    Integer,
    String,
}

/// A column together with the rule the classifier assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub column: ColumnDescriptor,
    pub rule: ValidationRule,
}

impl FieldDescriptor {
    pub fn name(&self) -> &str {
        &self.column.name
    }
}

/// Normalized per-table input to every emitter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityDescriptor {
    pub table_name: String,
    pub entity_name: String,
    /// snake_case module/file stem derived from `entity_name`.
    pub module_name: String,
    pub primary_key_column: String,
    pub primary_key_type: PrimaryKeyType,
    /// Every column in declaration order.
    pub columns: Vec<FieldDescriptor>,
    pub insertable_columns: Vec<String>,
    pub updatable_columns: Vec<String>,
    pub created_at_column: Option<String>,
    pub updated_at_column: Option<String>,
    pub soft_delete_column: Option<String>,
    pub permission: Option<EntityPermission>,
    pub audit_enabled: bool,
}

impl EntityDescriptor {
    pub fn has_soft_delete_column(&self) -> bool {
        self.soft_delete_column.is_some()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.columns.iter().find(|field| field.name() == name)
    }

    pub fn primary_key_field(&self) -> Option<&FieldDescriptor> {
        self.field(&self.primary_key_column)
    }

    pub fn insertable_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.columns
            .iter()
            .filter(|field| self.insertable_columns.iter().any(|name| name == field.name()))
    }

    pub fn updatable_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.columns
            .iter()
            .filter(|field| self.updatable_columns.iter().any(|name| name == field.name()))
    }
}

/// Why a table produced no entity.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "code")]
pub enum SkipReason {
    #[error("table name is not a valid identifier")]
    InvalidTableName,
    #[error("column '{column}' is not a usable identifier")]
    InvalidColumnName { column: String },
    #[error("table has no primary key")]
    MissingPrimaryKey,
    #[error("composite primary key ({}) is unsupported", .columns.join(", "))]
    CompositePrimaryKey { columns: Vec<String> },
    #[error("entity name '{entity}' is not a valid type name")]
    InvalidEntityName { entity: String },
    #[error("entity name '{entity}' shadows a type the generated code uses; add a naming override")]
    ReservedEntityName { entity: String },
    #[error("entity name '{entity}' is already produced by table '{table}'")]
    DuplicateEntity { entity: String, table: String },
    #[error("module '{module}' is already produced by table '{table}'")]
    DuplicateModule { module: String, table: String },
    #[error("emission failed: {message}")]
    EmitFailed { message: String },
}

impl SkipReason {
    /// Stable short code used to aggregate skip counts.
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::InvalidTableName => "invalid_table_name",
            SkipReason::InvalidColumnName { .. } => "invalid_column_name",
            SkipReason::MissingPrimaryKey => "missing_primary_key",
            SkipReason::CompositePrimaryKey { .. } => "composite_primary_key",
            SkipReason::InvalidEntityName { .. } => "invalid_entity_name",
            SkipReason::ReservedEntityName { .. } => "reserved_entity_name",
            SkipReason::DuplicateEntity { .. } => "duplicate_entity",
            SkipReason::DuplicateModule { .. } => "duplicate_module",
            SkipReason::EmitFailed { .. } => "emit_failed",
        }
    }
}

/// Result of building one table.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    Built(Box<EntityDescriptor>),
    /// Listed in the policy's excluded tables; not a failure.
    Excluded,
    Skipped(SkipReason),
}

/// Combines schema, policy and naming into entity descriptors.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorBuilder<'a> {
    policy: &'a GenerationPolicy,
    conventions: &'a Conventions,
    names: &'a NameResolver,
}

impl<'a> DescriptorBuilder<'a> {
    pub fn new(
        policy: &'a GenerationPolicy,
        conventions: &'a Conventions,
        names: &'a NameResolver,
    ) -> Self {
        Self {
            policy,
            conventions,
            names,
        }
    }

    /// Build every table in order, skipping later tables whose entity name or
    /// module name collides with an earlier one.
    pub fn build_all(&self, tables: &[TableDescriptor]) -> Vec<(String, BuildOutcome)> {
        // module name -> (entity name, table)
        let mut seen: BTreeMap<String, (String, String)> = BTreeMap::new();

        tables
            .iter()
            .map(|table| {
                let outcome = match self.build(table) {
                    BuildOutcome::Built(entity) => match seen.get(&entity.module_name) {
                        Some((first_entity, first_table)) if *first_entity == entity.entity_name => {
                            BuildOutcome::Skipped(SkipReason::DuplicateEntity {
                                entity: entity.entity_name.clone(),
                                table: first_table.clone(),
                            })
                        }
                        Some((_, first_table)) => {
                            BuildOutcome::Skipped(SkipReason::DuplicateModule {
                                module: entity.module_name.clone(),
                                table: first_table.clone(),
                            })
                        }
                        None => {
                            seen.insert(
                                entity.module_name.clone(),
                                (entity.entity_name.clone(), table.name.clone()),
                            );
                            BuildOutcome::Built(entity)
                        }
                    },
                    other => other,
                };
                (table.name.clone(), outcome)
            })
            .collect()
    }

    pub fn build(&self, table: &TableDescriptor) -> BuildOutcome {
        if self.policy.is_excluded(&table.name) {
            return BuildOutcome::Excluded;
        }
        match self.try_build(table) {
            Ok(entity) => BuildOutcome::Built(Box::new(entity)),
            Err(reason) => BuildOutcome::Skipped(reason),
        }
    }

    fn try_build(&self, table: &TableDescriptor) -> Result<EntityDescriptor, SkipReason> {
        if !is_emittable_identifier(&table.name) {
            return Err(SkipReason::InvalidTableName);
        }
        if let Some(column) = table
            .columns
            .iter()
            .find(|column| !is_emittable_identifier(&column.name))
        {
            return Err(SkipReason::InvalidColumnName {
                column: column.name.clone(),
            });
        }

        let primary_key = single_primary_key(&table.columns)?;

        let entity_name = self.names.resolve(&table.name);
        if !is_type_name(&entity_name) {
            return Err(SkipReason::InvalidEntityName {
                entity: entity_name,
            });
        }
        if is_reserved_type_name(&entity_name) {
            return Err(SkipReason::ReservedEntityName {
                entity: entity_name,
            });
        }

        let classifier = FieldClassifier::new(&self.policy.timestamp_fields, self.conventions);
        let columns: Vec<FieldDescriptor> = table
            .columns
            .iter()
            .map(|column| {
                let mut rule = classifier.classify(column);
                // Primary keys are row identities; SQLite reports rowid aliases as nullable.
                if column.name == primary_key.name {
                    rule.nullable = false;
                }
                FieldDescriptor {
                    column: column.clone(),
                    rule,
                }
            })
            .collect();

        let insertable_columns = table
            .columns
            .iter()
            .filter(|column| column.name != primary_key.name)
            .filter(|column| !self.policy.is_timestamp_field(&column.name))
            .filter(|column| !self.conventions.is_auto_maintained(&column.name))
            .filter(|column| !column.has_default)
            .map(|column| column.name.clone())
            .collect();

        let updatable_columns = table
            .columns
            .iter()
            .filter(|column| column.name != primary_key.name)
            .filter(|column| {
                column.name != self.conventions.created_at
                    && column.name != self.conventions.updated_at
            })
            .map(|column| column.name.clone())
            .collect();

        let present = |name: &str| table.column(name).map(|column| column.name.clone());

        Ok(EntityDescriptor {
            table_name: table.name.clone(),
            module_name: module_name(&entity_name),
            entity_name,
            primary_key_column: primary_key.name.clone(),
            primary_key_type: if is_integer_type(&primary_key.declared_type) {
                PrimaryKeyType::Integer
            } else {
                PrimaryKeyType::String
            },
            columns,
            insertable_columns,
            updatable_columns,
            created_at_column: present(&self.conventions.created_at),
            updated_at_column: present(&self.conventions.updated_at),
            soft_delete_column: present(&self.conventions.soft_delete),
            permission: self.policy.permission_for(&table.name).cloned(),
            audit_enabled: self.policy.is_audited(&table.name),
        })
    }
}

fn single_primary_key(columns: &[ColumnDescriptor]) -> Result<&ColumnDescriptor, SkipReason> {
    let mut keys: Vec<&ColumnDescriptor> =
        columns.iter().filter(|column| column.is_primary_key()).collect();
    keys.sort_by_key(|column| column.primary_key_rank);

    match keys.as_slice() {
        [] => Err(SkipReason::MissingPrimaryKey),
        [single] => Ok(*single),
        many => Err(SkipReason::CompositePrimaryKey {
            columns: many.iter().map(|column| column.name.clone()).collect(),
        }),
    }
}

fn is_type_name(entity_name: &str) -> bool {
    entity_name
        .chars()
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic())
        && is_emittable_identifier(entity_name)
}
