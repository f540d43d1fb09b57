// @generated by crudforge. Do not edit by hand.
//! Repository contract for `leads`.

use async_trait::async_trait;
use crudforge_runtime::RepositoryError;

use crate::generated::types::lead::{CreateLeadInput, Lead, LeadId, LeadQuery, UpdateLeadInput};

/// Data access for [`Lead`] rows.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn find_by_id(&self, id: LeadId) -> Result<Option<Lead>, RepositoryError>;

    async fn find_many(&self, query: &LeadQuery) -> Result<Vec<Lead>, RepositoryError>;

    async fn create(&self, input: CreateLeadInput) -> Result<Lead, RepositoryError>;

    async fn update(&self, id: LeadId, input: UpdateLeadInput) -> Result<Lead, RepositoryError>;

    async fn delete(&self, id: LeadId) -> Result<(), RepositoryError>;
}
