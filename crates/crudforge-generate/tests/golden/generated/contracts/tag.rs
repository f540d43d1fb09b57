// @generated by crudforge. Do not edit by hand.
//! Repository contract for `tags`.

use async_trait::async_trait;
use crudforge_runtime::RepositoryError;

use crate::generated::types::tag::{CreateTagInput, Tag, TagId, TagQuery, UpdateTagInput};

/// Data access for [`Tag`] rows.
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_id(&self, id: TagId) -> Result<Option<Tag>, RepositoryError>;

    async fn find_many(&self, query: &TagQuery) -> Result<Vec<Tag>, RepositoryError>;

    async fn create(&self, input: CreateTagInput) -> Result<Tag, RepositoryError>;

    async fn update(&self, id: TagId, input: UpdateTagInput) -> Result<Tag, RepositoryError>;

    async fn delete(&self, id: TagId) -> Result<(), RepositoryError>;
}
