// @generated by crudforge. Do not edit by hand.
//! Request handler for `leads`.

use std::sync::Arc;

use garde::Validate;
use crudforge_runtime::{AccessControl, AuditAction, AuditSink, HandlerError, RequestContext, authorize};

use crate::generated::contracts::lead::LeadRepository;
use crate::generated::types::lead::{CreateLeadInput, Lead, LeadId, LeadQuery, UpdateLeadInput};

pub const LEAD_READ_PERMISSION: &str = "leads:read";
pub const LEAD_WRITE_PERMISSION: &str = "leads:write";

/// Permission-checked operations on [`Lead`].
pub struct LeadHandler<R> {
    repository: R,
    access: Arc<dyn AccessControl>,
    audit: Arc<dyn AuditSink>,
}

impl<R: LeadRepository> LeadHandler<R> {
    pub fn new(repository: R, access: Arc<dyn AccessControl>, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            repository,
            access,
            audit,
        }
    }

    pub async fn get(&self, ctx: &RequestContext, id: LeadId) -> Result<Lead, HandlerError> {
        authorize(ctx, self.access.as_ref(), LEAD_READ_PERMISSION).await?;
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(HandlerError::NotFound)
    }

    pub async fn list(&self, ctx: &RequestContext, query: LeadQuery) -> Result<Vec<Lead>, HandlerError> {
        authorize(ctx, self.access.as_ref(), LEAD_READ_PERMISSION).await?;
        query.validate().map_err(HandlerError::validation)?;
        Ok(self.repository.find_many(&query).await?)
    }

    pub async fn create(&self, ctx: &RequestContext, input: CreateLeadInput) -> Result<Lead, HandlerError> {
        let actor = authorize(ctx, self.access.as_ref(), LEAD_WRITE_PERMISSION).await?;
        input.validate().map_err(HandlerError::validation)?;
        let record = self.repository.create(input).await?;
        self.audit
            .record_audit(
                AuditAction::Create,
                &actor.id,
                "Lead",
                &record.id.to_string(),
                ctx.origin(),
            )
            .await;
        Ok(record)
    }

    pub async fn update(&self, ctx: &RequestContext, input: UpdateLeadInput) -> Result<Lead, HandlerError> {
        let actor = authorize(ctx, self.access.as_ref(), LEAD_WRITE_PERMISSION).await?;
        input.validate().map_err(HandlerError::validation)?;
        let id = input.id;
        let record = self.repository.update(id, input).await?;
        self.audit
            .record_audit(
                AuditAction::Update,
                &actor.id,
                "Lead",
                &record.id.to_string(),
                ctx.origin(),
            )
            .await;
        Ok(record)
    }

    pub async fn delete(&self, ctx: &RequestContext, id: LeadId) -> Result<(), HandlerError> {
        let actor = authorize(ctx, self.access.as_ref(), LEAD_WRITE_PERMISSION).await?;
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(HandlerError::NotFound);
        }
        self.repository.delete(id).await?;
        self.audit
            .record_audit(
                AuditAction::Delete,
                &actor.id,
                "Lead",
                &id.to_string(),
                ctx.origin(),
            )
            .await;
        Ok(())
    }
}
