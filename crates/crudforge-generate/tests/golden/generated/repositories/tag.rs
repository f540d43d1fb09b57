// @generated by crudforge. Do not edit by hand.
//! SQLite repository for `tags`.

use async_trait::async_trait;
use crudforge_runtime::{RepositoryError, push_filters};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::generated::contracts::tag::TagRepository;
use crate::generated::types::tag::{TAG_COLUMNS, CreateTagInput, Tag, TagId, TagQuery, UpdateTagInput};

/// [`TagRepository`] backed by a SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteTagRepository {
    pool: SqlitePool,
}

impl SqliteTagRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for SqliteTagRepository {
    async fn find_by_id(&self, id: TagId) -> Result<Option<Tag>, RepositoryError> {
        let row = sqlx::query_as::<_, Tag>(r#"SELECT * FROM "tags" WHERE "slug" = ?"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_many(&self, query: &TagQuery) -> Result<Vec<Tag>, RepositoryError> {
        let mut builder = QueryBuilder::<Sqlite>::new(r#"SELECT * FROM "tags""#);
        push_filters(&mut builder, TAG_COLUMNS, query.filter.as_ref(), false)?;
        builder
            .push(" LIMIT ")
            .push_bind(i64::from(query.limit))
            .push(" OFFSET ")
            .push_bind(i64::from(query.offset));
        let rows = builder.build_query_as::<Tag>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn create(&self, input: CreateTagInput) -> Result<Tag, RepositoryError> {
        let result = sqlx::query(r#"INSERT INTO "tags" ("type", "sitio_url") VALUES (?, ?)"#)
            .bind(input.r#type)
            .bind(input.sitio_url)
            .execute(&self.pool)
            .await?;
        let row = sqlx::query_as::<_, Tag>(r#"SELECT * FROM "tags" WHERE rowid = ?"#)
            .bind(result.last_insert_rowid())
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: TagId, input: UpdateTagInput) -> Result<Tag, RepositoryError> {
        let mut builder = QueryBuilder::<Sqlite>::new(r#"UPDATE "tags" SET "#);
        let mut assignments = builder.separated(", ");
        let mut changed = false;
        if let Some(value) = input.r#type {
            assignments.push(r#""type" = "#).push_bind_unseparated(value);
            changed = true;
        }
        if let Some(value) = input.sitio_url {
            assignments.push(r#""sitio_url" = "#).push_bind_unseparated(value);
            changed = true;
        }
        if !changed {
            return self.find_by_id(id).await?.ok_or(RepositoryError::NotFound);
        }
        builder.push(r#" WHERE "slug" = "#).push_bind(id.clone());
        builder.build().execute(&self.pool).await?;
        self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: TagId) -> Result<(), RepositoryError> {
        sqlx::query(r#"DELETE FROM "tags" WHERE "slug" = ?"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
