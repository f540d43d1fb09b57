//! Support library linked by crudforge-generated code.
//!
//! Generated repositories and handlers only depend on the types here plus
//! `sqlx`, `serde`, `garde` and `async-trait`; the permission and audit
//! primitives stay behind the [`AccessControl`] and [`AuditSink`] traits so
//! applications plug in their own.

pub mod access;
pub mod context;
pub mod double_option;
pub mod error;
pub mod query;

pub use access::{AccessControl, AuditAction, AuditSink, authorize};
pub use context::{Actor, RequestContext};
pub use error::{HandlerError, RepositoryError};
pub use query::{DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT, default_limit, push_filters};
