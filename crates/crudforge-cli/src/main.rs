mod config;
mod registry;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use crudforge_core::{Error as CoreError, GenerationPolicy, SchemaSnapshot};
use crudforge_generate::{GenerationEngine, GenerationError};
use crudforge_introspect::{
    IntrospectOptions, PolicyReader, SchemaReader, SqlitePolicyReader, SqliteSchemaReader,
    connect_read_only,
};
use registry::{RunContext, init_logging, start_run, write_descriptors, write_report};
use thiserror::Error;
use uuid::Uuid;

use crate::config::{Overrides, ResolvedConfig, load_config, resolve};

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("store error: {0}")]
    Core(#[from] CoreError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("config error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "crudforge", version, about = "Schema-driven CRUD layer generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read both stores and write the artifact tree.
    Generate(GenerateArgs),
    /// Print the entity descriptors as JSON without writing artifacts.
    Describe(SourceArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Configuration file (defaults to ./crudforge.toml when present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Application SQLite database (path or sqlite: URL).
    #[arg(long, value_name = "DB")]
    schema_db: Option<String>,
    /// Generation-policy SQLite database (path or sqlite: URL).
    #[arg(long, value_name = "DB")]
    policy_db: Option<String>,
    /// Restrict introspection to this table; repeatable.
    #[arg(long = "table", value_name = "TABLE")]
    tables: Vec<String>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Output directory for generated modules.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Rust path the output directory is mounted at.
    #[arg(long)]
    module_root: Option<String>,
    /// Directory for run records.
    #[arg(long)]
    run_dir: Option<PathBuf>,
    /// Remove previously generated files first.
    #[arg(long, default_value_t = false)]
    clean: bool,
    /// Emit tables one at a time.
    #[arg(long, default_value_t = false)]
    no_parallel: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args).await,
        Command::Describe(args) => run_describe(args).await,
    }
}

fn resolve_config(source: SourceArgs, overrides: Overrides) -> Result<ResolvedConfig, CliError> {
    let file = load_config(source.config.as_deref())?;
    resolve(
        file,
        Overrides {
            schema_db: source.schema_db,
            policy_db: source.policy_db,
            tables: source.tables,
            ..overrides
        },
    )
}

async fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let GenerateArgs {
        source,
        out_dir,
        module_root,
        run_dir,
        clean,
        no_parallel,
    } = args;

    let config = resolve_config(
        source,
        Overrides {
            out_dir,
            module_root,
            run_dir,
            clean,
            no_parallel,
            ..Overrides::default()
        },
    )?;

    let run_id = Uuid::new_v4().to_string();
    let run_ctx = RunContext {
        run_id: run_id.clone(),
        started_at: chrono::Utc::now(),
        config,
    };
    let run_paths = start_run(&run_ctx)?;
    init_logging(Some(&run_paths.logs_path))?;

    tracing::info!(
        event = "run_started",
        run_id = %run_id,
        run_dir = %run_paths.root.display()
    );
    let timer = Instant::now();
    let config = &run_ctx.config;

    let (schema, policy) = read_stores(config).await?;

    let engine = GenerationEngine::new(config.generate_options());
    let result = match engine.run(&schema, &policy) {
        Ok(result) => result,
        Err(GenerationError::NoEntities(report)) => {
            write_report(&run_paths, &report)?;
            tracing::error!(event = "run_finished", status = "failed", "{}", report.summary());
            return Err(GenerationError::NoEntities(report).into());
        }
        Err(err) => {
            tracing::error!(event = "run_finished", status = "failed", error = %err);
            return Err(err.into());
        }
    };

    write_descriptors(&run_paths, &result.descriptors)?;
    write_report(&run_paths, &result.report)?;

    tracing::info!(
        event = "run_finished",
        status = "success",
        duration_ms = timer.elapsed().as_millis() as u64
    );
    println!("{}", result.report.summary());
    Ok(())
}

async fn run_describe(args: SourceArgs) -> Result<(), CliError> {
    let config = resolve_config(args, Overrides::default())?;
    init_logging(None)?;

    let (schema, policy) = read_stores(&config).await?;
    let engine = GenerationEngine::new(config.generate_options());
    let (descriptors, report) = engine.plan(&schema, &policy);

    println!("{}", serde_json::to_string_pretty(&descriptors)?);
    eprintln!("{}", report.summary());
    Ok(())
}

/// Read schema and policy in full before any table is processed.
async fn read_stores(config: &ResolvedConfig) -> Result<(SchemaSnapshot, GenerationPolicy), CliError> {
    let schema_pool = connect_read_only(&config.schema_db).await?;
    let options = IntrospectOptions {
        tables: config.tables.clone(),
        ..IntrospectOptions::default()
    };
    let schema = SqliteSchemaReader::with_options(schema_pool.clone(), options)
        .read_schema()
        .await?;
    schema_pool.close().await;
    tracing::info!(
        event = "schema_read",
        tables = schema.tables.len(),
        engine = %schema.engine
    );

    let policy_pool = connect_read_only(&config.policy_db).await?;
    let policy = SqlitePolicyReader::new(policy_pool.clone())
        .read_policy()
        .await?;
    policy_pool.close().await;
    tracing::info!(
        event = "policy_read",
        excluded = policy.excluded_tables.len(),
        timestamp_fields = policy.timestamp_fields.len(),
        permissions = policy.permissions.len(),
        audited = policy.audit_entities.len()
    );

    Ok((schema, policy))
}
