use std::fmt;

use thiserror::Error;

/// Errors returned by generated repositories.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("record not found")]
    NotFound,
    #[error("unknown filter column: {0}")]
    UnknownFilter(String),
    #[error("unsupported filter value for column {0}")]
    UnsupportedFilter(String),
}

/// Errors returned by generated request handlers.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("authentication required")]
    Unauthenticated,
    #[error("missing permission: {permission}")]
    Forbidden { permission: String },
    #[error("record not found")]
    NotFound,
    #[error("invalid request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl HandlerError {
    pub fn validation(report: impl fmt::Display) -> Self {
        HandlerError::BadRequest(report.to_string())
    }

    /// HTTP-style status for transports that want one.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::Unauthenticated => 401,
            HandlerError::Forbidden { .. } => 403,
            HandlerError::NotFound | HandlerError::Repository(RepositoryError::NotFound) => 404,
            HandlerError::BadRequest(_)
            | HandlerError::Repository(RepositoryError::UnknownFilter(_))
            | HandlerError::Repository(RepositoryError::UnsupportedFilter(_)) => 400,
            HandlerError::Repository(RepositoryError::Database(_)) => 500,
        }
    }
}
