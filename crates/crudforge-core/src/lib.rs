//! Core contracts and helpers for crudforge.
//!
//! This crate defines the schema and policy value objects read from the
//! stores, the naming and classification heuristics, and the builder that
//! turns one table into the normalized descriptor every emitter consumes.

pub mod classify;
pub mod conventions;
pub mod descriptor;
pub mod error;
pub mod identifiers;
pub mod naming;
pub mod policy;
pub mod schema;

pub use classify::{FieldClassifier, RuleKind, ValidationRule};
pub use conventions::Conventions;
pub use descriptor::{
    BuildOutcome, DescriptorBuilder, EntityDescriptor, FieldDescriptor, PrimaryKeyType,
    SkipReason,
};
pub use error::{Error, Result};
pub use identifiers::{
    constant_prefix, is_emittable_identifier, is_reserved_type_name, is_valid_identifier, module_name,
    rust_ident,
};
pub use naming::NameResolver;
pub use policy::{EntityPermission, GenerationPolicy};
pub use schema::{ColumnDescriptor, SchemaSnapshot, TableDescriptor};
