// @generated by crudforge. Do not edit by hand.
//! SQLite repository for `clases_recurrentes`.

use async_trait::async_trait;
use crudforge_runtime::{RepositoryError, push_filters};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::generated::contracts::clase_recurrente::ClaseRecurrenteRepository;
use crate::generated::types::clase_recurrente::{CLASE_RECURRENTE_COLUMNS, CreateClaseRecurrenteInput, ClaseRecurrente, ClaseRecurrenteId, ClaseRecurrenteQuery, UpdateClaseRecurrenteInput};

/// [`ClaseRecurrenteRepository`] backed by a SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteClaseRecurrenteRepository {
    pool: SqlitePool,
}

impl SqliteClaseRecurrenteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClaseRecurrenteRepository for SqliteClaseRecurrenteRepository {
    async fn find_by_id(&self, id: ClaseRecurrenteId) -> Result<Option<ClaseRecurrente>, RepositoryError> {
        let row = sqlx::query_as::<_, ClaseRecurrente>(r#"SELECT * FROM "clases_recurrentes" WHERE "id" = ?"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_many(&self, query: &ClaseRecurrenteQuery) -> Result<Vec<ClaseRecurrente>, RepositoryError> {
        let mut builder = QueryBuilder::<Sqlite>::new(r#"SELECT * FROM "clases_recurrentes" WHERE "eliminado_en" IS NULL"#);
        push_filters(&mut builder, CLASE_RECURRENTE_COLUMNS, query.filter.as_ref(), true)?;
        builder
            .push(" LIMIT ")
            .push_bind(i64::from(query.limit))
            .push(" OFFSET ")
            .push_bind(i64::from(query.offset));
        let rows = builder.build_query_as::<ClaseRecurrente>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn create(&self, input: CreateClaseRecurrenteInput) -> Result<ClaseRecurrente, RepositoryError> {
        let result = sqlx::query(r#"INSERT INTO "clases_recurrentes" ("nombre", "creado_en") VALUES (?, ?)"#)
            .bind(input.nombre)
            .bind(chrono::Utc::now())
            .execute(&self.pool)
            .await?;
        let row = sqlx::query_as::<_, ClaseRecurrente>(r#"SELECT * FROM "clases_recurrentes" WHERE rowid = ?"#)
            .bind(result.last_insert_rowid())
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: ClaseRecurrenteId, input: UpdateClaseRecurrenteInput) -> Result<ClaseRecurrente, RepositoryError> {
        let mut builder = QueryBuilder::<Sqlite>::new(r#"UPDATE "clases_recurrentes" SET "#);
        let mut assignments = builder.separated(", ");
        let mut changed = false;
        if let Some(value) = input.nombre {
            assignments.push(r#""nombre" = "#).push_bind_unseparated(value);
            changed = true;
        }
        if let Some(value) = input.capacidad_max {
            assignments.push(r#""capacidad_max" = "#).push_bind_unseparated(value);
            changed = true;
        }
        if let Some(value) = input.eliminado_en {
            assignments.push(r#""eliminado_en" = "#).push_bind_unseparated(value);
            changed = true;
        }
        if !changed {
            return self.find_by_id(id).await?.ok_or(RepositoryError::NotFound);
        }
        assignments.push(r#""actualizado_en" = "#).push_bind_unseparated(chrono::Utc::now());
        builder.push(r#" WHERE "id" = "#).push_bind(id);
        builder.build().execute(&self.pool).await?;
        self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: ClaseRecurrenteId) -> Result<(), RepositoryError> {
        sqlx::query(r#"UPDATE "clases_recurrentes" SET "eliminado_en" = ? WHERE "id" = ?"#)
            .bind(chrono::Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
