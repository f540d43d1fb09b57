use sqlx::SqlitePool;

use crudforge_core::Result;

fn db_error(err: sqlx::Error) -> crudforge_core::Error {
    crudforge_core::Error::Db(err.to_string())
}

pub async fn list_tables(pool: &SqlitePool) -> Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(
        r#"
        select name
        from sqlite_master
        where type = 'table'
        order by name
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(db_error)
}

pub struct RawColumn {
    pub name: String,
    pub declared_type: String,
    pub not_null: bool,
    pub default: Option<String>,
    pub pk: i64,
    /// 0 for ordinary columns, 1 for hidden virtual-table columns, 2/3 for
    /// generated columns.
    pub hidden: i64,
}

pub async fn list_columns(pool: &SqlitePool, table: &str) -> Result<Vec<RawColumn>> {
    let rows = sqlx::query_as::<_, (String, String, bool, Option<String>, i64, i64)>(
        r#"
        select name, type, "notnull", dflt_value, pk, hidden
        from pragma_table_xinfo(?1)
        order by cid
        "#,
    )
    .bind(table)
    .fetch_all(pool)
    .await
    .map_err(db_error)?;

    Ok(rows
        .into_iter()
        .map(|(name, declared_type, not_null, default, pk, hidden)| RawColumn {
            name,
            declared_type,
            not_null,
            default,
            pk,
            hidden,
        })
        .collect())
}

pub async fn table_exists(pool: &SqlitePool, table: &str) -> Result<bool> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        select count(*)
        from sqlite_master
        where type = 'table' and name = ?1
        "#,
    )
    .bind(table)
    .fetch_one(pool)
    .await
    .map_err(db_error)?;
    Ok(count > 0)
}

/// Single-column text listing from one policy table; null rows are dropped.
pub async fn list_names(pool: &SqlitePool, sql: &str) -> Result<Vec<String>> {
    let rows = sqlx::query_scalar::<_, Option<String>>(sql)
        .fetch_all(pool)
        .await
        .map_err(db_error)?;
    Ok(rows.into_iter().flatten().collect())
}

pub struct RawPermission {
    pub table_name: String,
    pub read_perm: Option<String>,
    pub write_perm: Option<String>,
}

pub async fn list_permissions(pool: &SqlitePool) -> Result<Vec<RawPermission>> {
    let rows = sqlx::query_as::<_, (String, Option<String>, Option<String>)>(
        r#"
        select table_name, read_perm, write_perm
        from codegen_entity_permissions
        where table_name is not null
        order by table_name
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(db_error)?;

    Ok(rows
        .into_iter()
        .map(|(table_name, read_perm, write_perm)| RawPermission {
            table_name,
            read_perm,
            write_perm,
        })
        .collect())
}
