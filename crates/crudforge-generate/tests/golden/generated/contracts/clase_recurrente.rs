// @generated by crudforge. Do not edit by hand.
//! Repository contract for `clases_recurrentes`.

use async_trait::async_trait;
use crudforge_runtime::RepositoryError;

use crate::generated::types::clase_recurrente::{CreateClaseRecurrenteInput, ClaseRecurrente, ClaseRecurrenteId, ClaseRecurrenteQuery, UpdateClaseRecurrenteInput};

/// Data access for [`ClaseRecurrente`] rows.
#[async_trait]
pub trait ClaseRecurrenteRepository: Send + Sync {
    async fn find_by_id(&self, id: ClaseRecurrenteId) -> Result<Option<ClaseRecurrente>, RepositoryError>;

    async fn find_many(&self, query: &ClaseRecurrenteQuery) -> Result<Vec<ClaseRecurrente>, RepositoryError>;

    async fn create(&self, input: CreateClaseRecurrenteInput) -> Result<ClaseRecurrente, RepositoryError>;

    async fn update(&self, id: ClaseRecurrenteId, input: UpdateClaseRecurrenteInput) -> Result<ClaseRecurrente, RepositoryError>;

    async fn delete(&self, id: ClaseRecurrenteId) -> Result<(), RepositoryError>;
}
