//! Schema and policy store introspection adapters.

pub mod adapter;
pub mod options;
pub mod sqlite;

pub use adapter::{PolicyReader, SchemaReader};
pub use options::IntrospectOptions;
pub use sqlite::{SqlitePolicyReader, SqliteSchemaReader, connect_read_only};

pub use crudforge_core::{GenerationPolicy, SchemaSnapshot};
