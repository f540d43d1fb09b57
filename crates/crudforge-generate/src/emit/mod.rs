//! Pure emitters: one [`EntityDescriptor`] in, one source file out.
//!
//! Emitters share no state. They agree on field sets, nullability and key
//! types only because they all read the same descriptor through
//! [`EntityNames`] and the type mapping below.

mod contract;
mod handler;
mod manifest;
mod repository;
mod types;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crudforge_core::{
    EntityDescriptor, FieldDescriptor, PrimaryKeyType, RuleKind, ValidationRule, constant_prefix,
    is_emittable_identifier, rust_ident,
};

pub use manifest::{emit_manifest, emit_root_manifest};

/// First line of every emitted file; also how `clean` recognizes our files.
pub const GENERATED_HEADER: &str = "// @generated by crudforge. Do not edit by hand.";

/// Kind of emitted artifact; each kind owns one output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Types,
    Contract,
    Repository,
    Handler,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Types,
        ArtifactKind::Contract,
        ArtifactKind::Repository,
        ArtifactKind::Handler,
    ];

    pub fn dir(&self) -> &'static str {
        match self {
            ArtifactKind::Types => "types",
            ArtifactKind::Contract => "contracts",
            ArtifactKind::Repository => "repositories",
            ArtifactKind::Handler => "handlers",
        }
    }
}

/// One emitted file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub contents: String,
}

/// Settings shared by every emitter in a run.
#[derive(Debug, Clone)]
pub struct EmitContext {
    module_root: String,
}

impl EmitContext {
    /// `module_root` is the Rust path the output directory is mounted at,
    /// e.g. `crate::generated`.
    pub fn new(module_root: impl Into<String>) -> Result<Self, String> {
        let module_root = module_root.into();
        let valid = module_root
            .split("::")
            .all(|segment| segment == "crate" || is_emittable_identifier(segment));
        if module_root.is_empty() || !valid {
            return Err(format!("module root '{module_root}' is not a Rust path"));
        }
        Ok(Self { module_root })
    }

    pub fn module_root(&self) -> &str {
        &self.module_root
    }

    fn module_path(&self, kind: ArtifactKind, entity: &EntityDescriptor) -> String {
        format!(
            "{}::{}::{}",
            self.module_root,
            kind.dir(),
            rust_ident(&entity.module_name)
        )
    }

    /// Emit the three or four artifacts of one entity.
    pub fn emit_entity(&self, entity: &EntityDescriptor) -> Vec<Artifact> {
        let mut artifacts = vec![
            self.artifact(ArtifactKind::Types, entity, types::emit(entity)),
            self.artifact(ArtifactKind::Contract, entity, contract::emit(self, entity)),
            self.artifact(ArtifactKind::Repository, entity, repository::emit(self, entity)),
        ];
        if let Some(source) = handler::emit(self, entity) {
            artifacts.push(self.artifact(ArtifactKind::Handler, entity, source));
        }
        artifacts
    }

    fn artifact(&self, kind: ArtifactKind, entity: &EntityDescriptor, contents: String) -> Artifact {
        Artifact {
            kind,
            path: PathBuf::from(kind.dir()).join(format!("{}.rs", entity.module_name)),
            contents,
        }
    }
}

/// Emit the validation/type module alone.
pub fn emit_types(entity: &EntityDescriptor) -> String {
    types::emit(entity)
}

/// Emit the repository contract alone.
pub fn emit_contract(ctx: &EmitContext, entity: &EntityDescriptor) -> String {
    contract::emit(ctx, entity)
}

/// Emit the SQLite repository implementation alone.
pub fn emit_repository(ctx: &EmitContext, entity: &EntityDescriptor) -> String {
    repository::emit(ctx, entity)
}

/// Emit the request handler; `None` when the table has no permission entry.
pub fn emit_handler(ctx: &EmitContext, entity: &EntityDescriptor) -> Option<String> {
    handler::emit(ctx, entity)
}

/// Every Rust name derived from one entity.
pub(crate) struct EntityNames {
    pub entity: String,
    pub id: String,
    pub columns: String,
    pub create_input: String,
    pub update_input: String,
    pub query: String,
    pub contract: String,
    pub implementation: String,
    pub handler: String,
    pub read_permission: String,
    pub write_permission: String,
    pub primary_key: String,
}

impl EntityNames {
    pub fn of(entity: &EntityDescriptor) -> Self {
        let name = &entity.entity_name;
        let prefix = constant_prefix(name);
        Self {
            entity: name.clone(),
            id: format!("{name}Id"),
            columns: format!("{prefix}_COLUMNS"),
            create_input: format!("Create{name}Input"),
            update_input: format!("Update{name}Input"),
            query: format!("{name}Query"),
            contract: format!("{name}Repository"),
            implementation: format!("Sqlite{name}Repository"),
            handler: format!("{name}Handler"),
            read_permission: format!("{prefix}_READ_PERMISSION"),
            write_permission: format!("{prefix}_WRITE_PERMISSION"),
            primary_key: rust_ident(&entity.primary_key_column),
        }
    }
}

/// Accumulates emitted source line by line.
pub(crate) struct Source {
    buf: String,
}

impl Source {
    /// New file starting with the generated header and a module doc line.
    pub fn file(doc: &str) -> Self {
        let mut source = Self { buf: String::new() };
        source.line(GENERATED_HEADER).line(format!("//! {doc}")).blank();
        source
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

pub(crate) fn id_type(key: PrimaryKeyType) -> &'static str {
    match key {
        PrimaryKeyType::Integer => "i64",
        PrimaryKeyType::String => "String",
    }
}

/// Argument expression passing `id` on while keeping it usable afterwards.
pub(crate) fn reusable_id(entity: &EntityDescriptor) -> &'static str {
    match entity.primary_key_type {
        PrimaryKeyType::Integer => "id",
        PrimaryKeyType::String => "id.clone()",
    }
}

pub(crate) fn base_type(kind: RuleKind) -> &'static str {
    match kind {
        RuleKind::DateTime => "chrono::DateTime<chrono::Utc>",
        RuleKind::Email | RuleKind::Url | RuleKind::Password { .. } | RuleKind::Text => "String",
        RuleKind::Integer => "i64",
        RuleKind::Boolean => "bool",
        RuleKind::Bytes => "Vec<u8>",
        RuleKind::Number => "f64",
    }
}

pub(crate) fn value_type(rule: ValidationRule) -> String {
    if rule.nullable {
        format!("Option<{}>", base_type(rule.kind))
    } else {
        base_type(rule.kind).to_string()
    }
}

pub(crate) fn garde_rule(kind: RuleKind) -> String {
    match kind {
        RuleKind::Email => "email".to_string(),
        RuleKind::Url => "url".to_string(),
        RuleKind::Password { min_length } => format!("length(min = {min_length})"),
        _ => "skip".to_string(),
    }
}

/// Double-quoted SQL identifier.
pub(crate) fn sql_ident(name: &str) -> String {
    format!("\"{name}\"")
}

/// Rust raw string literal holding `sql`.
pub(crate) fn sql_literal(sql: &str) -> String {
    format!("r#\"{sql}\"#")
}

pub(crate) fn is_primary_key(entity: &EntityDescriptor, field: &FieldDescriptor) -> bool {
    field.name() == entity.primary_key_column
}
