// @generated by crudforge. Do not edit by hand.
//! Request handler for `tags`.

use std::sync::Arc;

use garde::Validate;
use crudforge_runtime::{AccessControl, HandlerError, RequestContext, authorize};

use crate::generated::contracts::tag::TagRepository;
use crate::generated::types::tag::{CreateTagInput, Tag, TagId, TagQuery, UpdateTagInput};

pub const TAG_READ_PERMISSION: &str = "tags:read";
pub const TAG_WRITE_PERMISSION: &str = "tags:write";

/// Permission-checked operations on [`Tag`].
pub struct TagHandler<R> {
    repository: R,
    access: Arc<dyn AccessControl>,
}

impl<R: TagRepository> TagHandler<R> {
    pub fn new(repository: R, access: Arc<dyn AccessControl>) -> Self {
        Self { repository, access }
    }

    pub async fn get(&self, ctx: &RequestContext, id: TagId) -> Result<Tag, HandlerError> {
        authorize(ctx, self.access.as_ref(), TAG_READ_PERMISSION).await?;
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(HandlerError::NotFound)
    }

    pub async fn list(&self, ctx: &RequestContext, query: TagQuery) -> Result<Vec<Tag>, HandlerError> {
        authorize(ctx, self.access.as_ref(), TAG_READ_PERMISSION).await?;
        query.validate().map_err(HandlerError::validation)?;
        Ok(self.repository.find_many(&query).await?)
    }

    pub async fn create(&self, ctx: &RequestContext, input: CreateTagInput) -> Result<Tag, HandlerError> {
        authorize(ctx, self.access.as_ref(), TAG_WRITE_PERMISSION).await?;
        input.validate().map_err(HandlerError::validation)?;
        let record = self.repository.create(input).await?;
        Ok(record)
    }

    pub async fn update(&self, ctx: &RequestContext, input: UpdateTagInput) -> Result<Tag, HandlerError> {
        authorize(ctx, self.access.as_ref(), TAG_WRITE_PERMISSION).await?;
        input.validate().map_err(HandlerError::validation)?;
        let id = input.slug.clone();
        let record = self.repository.update(id, input).await?;
        Ok(record)
    }

    pub async fn delete(&self, ctx: &RequestContext, id: TagId) -> Result<(), HandlerError> {
        authorize(ctx, self.access.as_ref(), TAG_WRITE_PERMISSION).await?;
        if self.repository.find_by_id(id.clone()).await?.is_none() {
            return Err(HandlerError::NotFound);
        }
        self.repository.delete(id).await?;
        Ok(())
    }
}
