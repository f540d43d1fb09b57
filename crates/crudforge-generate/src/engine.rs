use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crudforge_core::{
    BuildOutcome, DescriptorBuilder, EntityDescriptor, GenerationPolicy, NameResolver,
    SchemaSnapshot, SkipReason, TableDescriptor,
};

use crate::emit::{ArtifactKind, EmitContext, emit_manifest, emit_root_manifest};
use crate::errors::GenerationError;
use crate::model::{EntityReport, GenerateOptions, GenerationReport};
use crate::output::{clean_generated, ensure_layout, write_atomic};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub report: GenerationReport,
    /// Descriptors of the entities whose artifacts were written, in table order.
    pub descriptors: Vec<EntityDescriptor>,
}

/// Entry point for generating artifacts from schema + policy.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Build descriptors for every table without touching the filesystem.
    ///
    /// Tables are visited in name order so duplicate-entity resolution does
    /// not depend on the order the schema store returned them in.
    pub fn plan(
        &self,
        schema: &SchemaSnapshot,
        policy: &GenerationPolicy,
    ) -> (Vec<EntityDescriptor>, GenerationReport) {
        let mut tables: Vec<TableDescriptor> = schema.tables.clone();
        tables.sort_by(|a, b| a.name.cmp(&b.name));

        let names = NameResolver::new(self.options.naming_overrides.clone());
        let builder = DescriptorBuilder::new(policy, &self.options.conventions, &names);

        let mut report = GenerationReport {
            tables_total: tables.len(),
            ..GenerationReport::default()
        };
        let mut descriptors = Vec::new();

        for (table, outcome) in builder.build_all(&tables) {
            match outcome {
                BuildOutcome::Built(entity) => {
                    debug!(
                        event = "descriptor_built",
                        table = %table,
                        entity = %entity.entity_name,
                        "descriptor built"
                    );
                    descriptors.push(*entity);
                }
                BuildOutcome::Excluded => {
                    info!(event = "table_excluded", table = %table, "table excluded by policy");
                    report.record_excluded(&table);
                }
                BuildOutcome::Skipped(reason) => {
                    warn!(
                        event = "table_skipped",
                        table = %table,
                        code = reason.code(),
                        reason = %reason,
                        "table skipped"
                    );
                    report.record_skip(&table, reason);
                }
            }
        }

        (descriptors, report)
    }

    pub fn run(
        &self,
        schema: &SchemaSnapshot,
        policy: &GenerationPolicy,
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let ctx = EmitContext::new(self.options.module_root.clone())
            .map_err(GenerationError::InvalidOptions)?;

        info!(
            engine = %schema.engine,
            tables = schema.tables.len(),
            out_dir = %self.options.out_dir.display(),
            parallel = self.options.parallel,
            "generation started"
        );

        let (descriptors, mut report) = self.plan(schema, policy);
        if descriptors.is_empty() {
            return Err(GenerationError::NoEntities(report));
        }

        let out_dir = &self.options.out_dir;
        ensure_layout(out_dir)?;
        if self.options.clean {
            let removed = clean_generated(out_dir)?;
            info!(removed, "cleaned previously generated files");
        }

        let emit_one = |entity: &EntityDescriptor| self.emit_entity(&ctx, entity);
        let outcomes: Vec<Result<EntityReport, SkipReason>> = if self.options.parallel {
            descriptors.par_iter().map(emit_one).collect()
        } else {
            descriptors.iter().map(emit_one).collect()
        };

        let mut emitted = Vec::new();
        for (entity, outcome) in descriptors.into_iter().zip(outcomes) {
            match outcome {
                Ok(entry) => {
                    info!(
                        event = "entity_emitted",
                        table = %entry.table,
                        entity = %entry.entity,
                        files = entry.files.len(),
                        handler = entry.handler,
                        audited = entry.audited,
                        "entity emitted"
                    );
                    report.record_entity(entry);
                    emitted.push(entity);
                }
                Err(reason) => {
                    warn!(
                        event = "table_skipped",
                        table = %entity.table_name,
                        code = reason.code(),
                        reason = %reason,
                        "table skipped"
                    );
                    report.record_skip(&entity.table_name, reason);
                }
            }
        }

        if emitted.is_empty() {
            return Err(GenerationError::NoEntities(report));
        }

        report.files_written += self.write_manifests(&emitted)?;

        info!(
            event = "generation_finished",
            processed = report.tables_processed(),
            skipped = report.skipped.len(),
            entities = report.entities.len(),
            files = report.files_written,
            duration_ms = start.elapsed().as_millis() as u64,
            "{}",
            report.summary()
        );

        Ok(GenerationResult {
            report,
            descriptors: emitted,
        })
    }

    fn emit_entity(
        &self,
        ctx: &EmitContext,
        entity: &EntityDescriptor,
    ) -> Result<EntityReport, SkipReason> {
        let artifacts = ctx.emit_entity(entity);
        let mut files = Vec::with_capacity(artifacts.len());
        let mut handler = false;

        for artifact in artifacts {
            let path = self.options.out_dir.join(&artifact.path);
            write_atomic(&path, artifact.contents.as_bytes()).map_err(|err| {
                SkipReason::EmitFailed {
                    message: format!("{}: {err}", artifact.path.display()),
                }
            })?;
            handler |= artifact.kind == ArtifactKind::Handler;
            files.push(artifact.path);
        }

        Ok(EntityReport {
            table: entity.table_name.clone(),
            entity: entity.entity_name.clone(),
            module: entity.module_name.clone(),
            files,
            handler,
            audited: entity.audit_enabled,
        })
    }

    /// Regenerate every manifest wholesale; returns the number of files written.
    fn write_manifests(&self, emitted: &[EntityDescriptor]) -> Result<usize, GenerationError> {
        let mut sorted: Vec<&EntityDescriptor> = emitted.iter().collect();
        sorted.sort_by(|a, b| a.entity_name.cmp(&b.entity_name));

        let out_dir = &self.options.out_dir;
        let mut written = 0;
        for kind in ArtifactKind::ALL {
            let modules: Vec<String> = sorted
                .iter()
                .filter(|entity| kind != ArtifactKind::Handler || entity.permission.is_some())
                .map(|entity| entity.module_name.clone())
                .collect();
            let path: PathBuf = out_dir.join(kind.dir()).join("mod.rs");
            write_atomic(&path, emit_manifest(kind, &modules).as_bytes())?;
            written += 1;
        }
        write_atomic(&out_dir.join("mod.rs"), emit_root_manifest().as_bytes())?;
        Ok(written + 1)
    }
}
