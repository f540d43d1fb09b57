use super::{ArtifactKind, Source};

use crudforge_core::rust_ident;

/// Aggregating `mod.rs` for one artifact kind.
///
/// `modules` are module names in entity-name order; every module is declared
/// and glob re-exported so callers can `use generated::types::*`.
pub fn emit_manifest(kind: ArtifactKind, modules: &[String]) -> String {
    let mut out = Source::file(&format!("Generated {} modules.", kind.dir()));
    if modules.is_empty() {
        return out.finish();
    }

    for module in modules {
        out.line(format!("pub mod {};", rust_ident(module)));
    }
    out.blank();
    for module in modules {
        out.line(format!("pub use {}::*;", rust_ident(module)));
    }
    out.finish()
}

/// Root `mod.rs` mounting the four artifact directories.
pub fn emit_root_manifest() -> String {
    let mut out = Source::file("Generated data-access layer.");
    for kind in ArtifactKind::ALL {
        out.line(format!("pub mod {};", kind.dir()));
    }
    out.finish()
}
