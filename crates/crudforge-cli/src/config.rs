use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crudforge_core::Conventions;
use crudforge_generate::GenerateOptions;

use crate::CliError;

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "crudforge.toml";

/// `crudforge.toml` as written by users; every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub schema_db: Option<String>,
    pub policy_db: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub module_root: Option<String>,
    pub run_dir: Option<PathBuf>,
    pub clean: Option<bool>,
    pub parallel: Option<bool>,
    pub naming: NamingConfig,
    pub conventions: Conventions,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    pub overrides: BTreeMap<String, String>,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub schema_db: Option<String>,
    pub policy_db: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub module_root: Option<String>,
    pub run_dir: Option<PathBuf>,
    pub tables: Vec<String>,
    pub clean: bool,
    pub no_parallel: bool,
}

/// Configuration after merging file and flags; recorded as `config.json`.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    pub schema_db: String,
    pub policy_db: String,
    pub out_dir: PathBuf,
    pub module_root: String,
    pub run_dir: PathBuf,
    pub clean: bool,
    pub parallel: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<String>>,
    pub naming_overrides: BTreeMap<String, String>,
    pub conventions: Conventions,
}

impl ResolvedConfig {
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            out_dir: self.out_dir.clone(),
            module_root: self.module_root.clone(),
            conventions: self.conventions.clone(),
            naming_overrides: self.naming_overrides.clone(),
            clean: self.clean,
            parallel: self.parallel,
        }
    }
}

/// Load `path`; a missing default file reads as an empty configuration, a
/// missing file the user named explicitly is an error.
pub fn load_config(path: Option<&Path>) -> Result<FileConfig, CliError> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    if !explicit && !path.exists() {
        return Ok(FileConfig::default());
    }
    let content = std::fs::read_to_string(&path).map_err(|err| {
        CliError::InvalidConfig(format!("reading {}: {err}", path.display()))
    })?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<FileConfig, CliError> {
    toml::from_str(content).map_err(CliError::from)
}

pub fn resolve(file: FileConfig, flags: Overrides) -> Result<ResolvedConfig, CliError> {
    let defaults = GenerateOptions::default();

    let schema_db = flags.schema_db.or(file.schema_db).ok_or_else(|| {
        CliError::InvalidConfig("schema_db is required (--schema-db or crudforge.toml)".into())
    })?;
    let policy_db = flags.policy_db.or(file.policy_db).ok_or_else(|| {
        CliError::InvalidConfig("policy_db is required (--policy-db or crudforge.toml)".into())
    })?;

    Ok(ResolvedConfig {
        schema_db,
        policy_db,
        out_dir: flags.out_dir.or(file.out_dir).unwrap_or(defaults.out_dir),
        module_root: flags
            .module_root
            .or(file.module_root)
            .unwrap_or(defaults.module_root),
        run_dir: flags
            .run_dir
            .or(file.run_dir)
            .unwrap_or_else(|| PathBuf::from("runs")),
        clean: flags.clean || file.clean.unwrap_or(defaults.clean),
        parallel: !flags.no_parallel && file.parallel.unwrap_or(defaults.parallel),
        tables: if flags.tables.is_empty() {
            None
        } else {
            Some(flags.tables)
        },
        naming_overrides: file.naming.overrides,
        conventions: file.conventions,
    })
}
