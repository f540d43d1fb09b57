use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crudforge_core::{Conventions, SkipReason};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory receiving the artifact tree.
    pub out_dir: PathBuf,
    /// Rust path the output directory is mounted at.
    pub module_root: String,
    pub conventions: Conventions,
    /// Table name to entity name, consulted before the heuristic.
    pub naming_overrides: BTreeMap<String, String>,
    /// Remove previously generated files before writing.
    pub clean: bool,
    /// Emit tables on the rayon pool.
    pub parallel: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("src/generated"),
            module_root: "crate::generated".to_string(),
            conventions: Conventions::default(),
            naming_overrides: BTreeMap::new(),
            clean: false,
            parallel: true,
        }
    }
}

/// Table that produced no artifacts, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedTable {
    pub table: String,
    pub reason: SkipReason,
}

/// Summary of one emitted entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityReport {
    pub table: String,
    pub entity: String,
    pub module: String,
    /// Paths relative to the output directory.
    pub files: Vec<PathBuf>,
    pub handler: bool,
    pub audited: bool,
}

/// Report for a generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub tables_total: usize,
    pub excluded: Vec<String>,
    pub skipped: Vec<SkippedTable>,
    pub entities: Vec<EntityReport>,
    pub skip_counts: BTreeMap<String, u64>,
    pub files_written: usize,
}

impl GenerationReport {
    pub fn record_excluded(&mut self, table: &str) {
        self.excluded.push(table.to_string());
    }

    pub fn record_skip(&mut self, table: &str, reason: SkipReason) {
        *self.skip_counts.entry(reason.code().to_string()).or_insert(0) += 1;
        self.skipped.push(SkippedTable {
            table: table.to_string(),
            reason,
        });
    }

    pub fn record_entity(&mut self, entity: EntityReport) {
        self.files_written += entity.files.len();
        self.entities.push(entity);
    }

    /// Tables that reached the descriptor builder (everything not excluded).
    pub fn tables_processed(&self) -> usize {
        self.tables_total - self.excluded.len()
    }

    /// One-line human summary.
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} tables processed, {} skipped, {} excluded, {} entities emitted",
            self.tables_processed(),
            self.skipped.len(),
            self.excluded.len(),
            self.entities.len()
        );
        if !self.skip_counts.is_empty() {
            let reasons = self
                .skip_counts
                .iter()
                .map(|(code, count)| format!("{code}={count}"))
                .collect::<Vec<_>>()
                .join(", ");
            line.push_str(&format!(" (skips: {reasons})"));
        }
        line
    }
}
