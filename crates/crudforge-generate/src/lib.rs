//! Artifact generation for crudforge.
//!
//! Consumes a schema snapshot plus a generation policy and writes, per
//! entity, a types module, a repository contract, a SQLite repository and
//! (for permission-gated tables) a request handler, followed by the
//! aggregating `mod.rs` manifests.

pub mod emit;
pub mod engine;
pub mod errors;
pub mod model;
pub mod output;

pub use emit::{Artifact, ArtifactKind, EmitContext, GENERATED_HEADER};
pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{EntityReport, GenerateOptions, GenerationReport, SkippedTable};
