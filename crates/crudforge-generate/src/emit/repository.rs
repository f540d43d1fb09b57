use crudforge_core::{EntityDescriptor, rust_ident};

use super::{
    ArtifactKind, EmitContext, EntityNames, Source, reusable_id, sql_ident, sql_literal,
};

pub(super) fn emit(ctx: &EmitContext, entity: &EntityDescriptor) -> String {
    let names = EntityNames::of(entity);
    let mut out = Source::file(&format!(
        "SQLite repository for `{}`.",
        entity.table_name
    ));

    out.line("use async_trait::async_trait;")
        .line("use crudforge_runtime::{RepositoryError, push_filters};")
        .line("use sqlx::{QueryBuilder, Sqlite, SqlitePool};")
        .blank()
        .line(format!(
            "use {}::{};",
            ctx.module_path(ArtifactKind::Contract, entity),
            names.contract
        ))
        .line(format!(
            "use {}::{{{}, {}, {}, {}, {}, {}}};",
            ctx.module_path(ArtifactKind::Types, entity),
            names.columns,
            names.create_input,
            names.entity,
            names.id,
            names.query,
            names.update_input
        ))
        .blank();

    out.line(format!(
        "/// [`{}`] backed by a SQLite pool.",
        names.contract
    ))
    .line("#[derive(Debug, Clone)]")
    .line(format!("pub struct {} {{", names.implementation))
    .line("    pool: SqlitePool,")
    .line("}")
    .blank()
    .line(format!("impl {} {{", names.implementation))
    .line("    pub fn new(pool: SqlitePool) -> Self {")
    .line("        Self { pool }")
    .line("    }")
    .line("}")
    .blank();

    out.line("#[async_trait]").line(format!(
        "impl {} for {} {{",
        names.contract, names.implementation
    ));
    find_by_id(&mut out, entity, &names);
    out.blank();
    find_many(&mut out, entity, &names);
    out.blank();
    create(&mut out, entity, &names);
    out.blank();
    update(&mut out, entity, &names);
    out.blank();
    delete(&mut out, entity, &names);
    out.line("}");

    out.finish()
}

fn table(entity: &EntityDescriptor) -> String {
    sql_ident(&entity.table_name)
}

fn key(entity: &EntityDescriptor) -> String {
    sql_ident(&entity.primary_key_column)
}

fn find_by_id(out: &mut Source, entity: &EntityDescriptor, names: &EntityNames) {
    let sql = format!("SELECT * FROM {} WHERE {} = ?", table(entity), key(entity));
    out.line(format!(
        "    async fn find_by_id(&self, id: {}) -> Result<Option<{}>, RepositoryError> {{",
        names.id, names.entity
    ))
    .line(format!(
        "        let row = sqlx::query_as::<_, {}>({})",
        names.entity,
        sql_literal(&sql)
    ))
    .line("            .bind(id)")
    .line("            .fetch_optional(&self.pool)")
    .line("            .await?;")
    .line("        Ok(row)")
    .line("    }");
}

fn find_many(out: &mut Source, entity: &EntityDescriptor, names: &EntityNames) {
    let (select, has_where) = match &entity.soft_delete_column {
        Some(column) => (
            format!(
                "SELECT * FROM {} WHERE {} IS NULL",
                table(entity),
                sql_ident(column)
            ),
            true,
        ),
        None => (format!("SELECT * FROM {}", table(entity)), false),
    };

    out.line(format!(
        "    async fn find_many(&self, query: &{}) -> Result<Vec<{}>, RepositoryError> {{",
        names.query, names.entity
    ))
    .line(format!(
        "        let mut builder = QueryBuilder::<Sqlite>::new({});",
        sql_literal(&select)
    ))
    .line(format!(
        "        push_filters(&mut builder, {}, query.filter.as_ref(), {has_where})?;",
        names.columns
    ))
    .line("        builder")
    .line("            .push(\" LIMIT \")")
    .line("            .push_bind(i64::from(query.limit))")
    .line("            .push(\" OFFSET \")")
    .line("            .push_bind(i64::from(query.offset));")
    .line(format!(
        "        let rows = builder.build_query_as::<{}>().fetch_all(&self.pool).await?;",
        names.entity
    ))
    .line("        Ok(rows)")
    .line("    }");
}

fn create(out: &mut Source, entity: &EntityDescriptor, names: &EntityNames) {
    let mut columns: Vec<String> = entity
        .insertable_fields()
        .map(|field| sql_ident(field.name()))
        .collect();
    let mut binds: Vec<String> = entity
        .insertable_fields()
        .map(|field| format!("input.{}", rust_ident(field.name())))
        .collect();
    if let Some(created_at) = &entity.created_at_column {
        columns.push(sql_ident(created_at));
        binds.push("chrono::Utc::now()".to_string());
    }

    let insert = if columns.is_empty() {
        format!("INSERT INTO {} DEFAULT VALUES", table(entity))
    } else {
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table(entity),
            columns.join(", "),
            vec!["?"; columns.len()].join(", ")
        )
    };
    let reread = format!("SELECT * FROM {} WHERE rowid = ?", table(entity));
    let input = if entity.insertable_columns.is_empty() {
        "_input"
    } else {
        "input"
    };

    out.line(format!(
        "    async fn create(&self, {input}: {}) -> Result<{}, RepositoryError> {{",
        names.create_input, names.entity
    ))
    .line(format!(
        "        let result = sqlx::query({})",
        sql_literal(&insert)
    ));
    for bind in &binds {
        out.line(format!("            .bind({bind})"));
    }
    out.line("            .execute(&self.pool)")
        .line("            .await?;")
        .line(format!(
            "        let row = sqlx::query_as::<_, {}>({})",
            names.entity,
            sql_literal(&reread)
        ))
        .line("            .bind(result.last_insert_rowid())")
        .line("            .fetch_one(&self.pool)")
        .line("            .await?;")
        .line("        Ok(row)")
        .line("    }");
}

fn update(out: &mut Source, entity: &EntityDescriptor, names: &EntityNames) {
    let updatable: Vec<_> = entity.updatable_fields().collect();

    if updatable.is_empty() {
        out.line(format!(
            "    async fn update(&self, id: {}, _input: {}) -> Result<{}, RepositoryError> {{",
            names.id, names.update_input, names.entity
        ))
        .line("        self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)")
        .line("    }");
        return;
    }

    out.line(format!(
        "    async fn update(&self, id: {}, input: {}) -> Result<{}, RepositoryError> {{",
        names.id, names.update_input, names.entity
    ))
    .line(format!(
        "        let mut builder = QueryBuilder::<Sqlite>::new({});",
        sql_literal(&format!("UPDATE {} SET ", table(entity)))
    ))
    .line("        let mut assignments = builder.separated(\", \");")
    .line("        let mut changed = false;");
    for field in updatable {
        out.line(format!(
            "        if let Some(value) = input.{} {{",
            rust_ident(field.name())
        ))
        .line(format!(
            "            assignments.push({}).push_bind_unseparated(value);",
            sql_literal(&format!("{} = ", sql_ident(field.name())))
        ))
        .line("            changed = true;")
        .line("        }");
    }
    out.line("        if !changed {")
        .line("            return self.find_by_id(id).await?.ok_or(RepositoryError::NotFound);")
        .line("        }");
    if let Some(updated_at) = &entity.updated_at_column {
        out.line(format!(
            "        assignments.push({}).push_bind_unseparated(chrono::Utc::now());",
            sql_literal(&format!("{} = ", sql_ident(updated_at)))
        ));
    }
    out.line(format!(
        "        builder.push({}).push_bind({});",
        sql_literal(&format!(" WHERE {} = ", key(entity))),
        reusable_id(entity)
    ))
    .line("        builder.build().execute(&self.pool).await?;")
    .line("        self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)")
    .line("    }");
}

fn delete(out: &mut Source, entity: &EntityDescriptor, names: &EntityNames) {
    out.line(format!(
        "    async fn delete(&self, id: {}) -> Result<(), RepositoryError> {{",
        names.id
    ));
    match &entity.soft_delete_column {
        Some(column) => {
            let sql = format!(
                "UPDATE {} SET {} = ? WHERE {} = ?",
                table(entity),
                sql_ident(column),
                key(entity)
            );
            out.line(format!("        sqlx::query({})", sql_literal(&sql)))
                .line("            .bind(chrono::Utc::now())")
                .line("            .bind(id)");
        }
        None => {
            let sql = format!("DELETE FROM {} WHERE {} = ?", table(entity), key(entity));
            out.line(format!("        sqlx::query({})", sql_literal(&sql)))
                .line("            .bind(id)");
        }
    }
    out.line("            .execute(&self.pool)")
        .line("            .await?;")
        .line("        Ok(())")
        .line("    }");
}
