use thiserror::Error;

use crate::model::GenerationReport;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no entities generated: {}", .0.summary())]
    NoEntities(GenerationReport),
}
