use thiserror::Error;

/// Core error type shared across crudforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Schema or policy store failure.
    #[error("database error: {0}")]
    Db(String),
}

/// Convenience alias for results returned by crudforge crates.
pub type Result<T> = std::result::Result<T, Error>;
