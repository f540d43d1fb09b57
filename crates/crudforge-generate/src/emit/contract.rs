use crudforge_core::EntityDescriptor;

use super::{ArtifactKind, EmitContext, EntityNames, Source};

pub(super) fn emit(ctx: &EmitContext, entity: &EntityDescriptor) -> String {
    let names = EntityNames::of(entity);
    let mut out = Source::file(&format!("Repository contract for `{}`.", entity.table_name));

    out.line("use async_trait::async_trait;")
        .line("use crudforge_runtime::RepositoryError;")
        .blank()
        .line(format!(
            "use {}::{{{}, {}, {}, {}, {}}};",
            ctx.module_path(ArtifactKind::Types, entity),
            names.create_input,
            names.entity,
            names.id,
            names.query,
            names.update_input
        ))
        .blank();

    out.line(format!("/// Data access for [`{}`] rows.", names.entity))
        .line("#[async_trait]")
        .line(format!("pub trait {}: Send + Sync {{", names.contract))
        .line(format!(
            "    async fn find_by_id(&self, id: {}) -> Result<Option<{}>, RepositoryError>;",
            names.id, names.entity
        ))
        .blank()
        .line(format!(
            "    async fn find_many(&self, query: &{}) -> Result<Vec<{}>, RepositoryError>;",
            names.query, names.entity
        ))
        .blank()
        .line(format!(
            "    async fn create(&self, input: {}) -> Result<{}, RepositoryError>;",
            names.create_input, names.entity
        ))
        .blank()
        .line(format!(
            "    async fn update(&self, id: {}, input: {}) -> Result<{}, RepositoryError>;",
            names.id, names.update_input, names.entity
        ))
        .blank()
        .line(format!(
            "    async fn delete(&self, id: {}) -> Result<(), RepositoryError>;",
            names.id
        ))
        .line("}");

    out.finish()
}
