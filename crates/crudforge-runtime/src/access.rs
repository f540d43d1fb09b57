use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::{Actor, RequestContext};
use crate::error::HandlerError;

/// Permission primitive: `hasPermission(actor, permission)`.
#[async_trait]
pub trait AccessControl: Send + Sync {
    async fn has_permission(&self, actor_id: &str, permission: &str) -> bool;
}

/// Kind of successful write reported to the audit primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "create",
            AuditAction::Update => "update",
            AuditAction::Delete => "delete",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit primitive: `recordAudit(action, actor, entity, recordId, origin)`.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn record_audit(
        &self,
        action: AuditAction,
        actor_id: &str,
        entity: &str,
        record_id: &str,
        origin: Option<&str>,
    );
}

/// Reject anonymous callers, then callers lacking `permission`.
pub async fn authorize<'a>(
    ctx: &'a RequestContext,
    access: &dyn AccessControl,
    permission: &str,
) -> Result<&'a Actor, HandlerError> {
    let actor = ctx.actor().ok_or(HandlerError::Unauthenticated)?;
    if !access.has_permission(&actor.id, permission).await {
        debug!(actor = %actor.id, permission, "permission denied");
        return Err(HandlerError::Forbidden {
            permission: permission.to_string(),
        });
    }
    Ok(actor)
}
