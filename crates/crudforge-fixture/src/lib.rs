//! The golden tree from `crudforge-generate/tests/golden/generated`, mounted
//! at `crate::generated` the way an application mounts its output directory.

#[rustfmt::skip]
#[path = "../../crudforge-generate/tests/golden/generated/mod.rs"]
pub mod generated;
