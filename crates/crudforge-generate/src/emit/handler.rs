use crudforge_core::{EntityDescriptor, PrimaryKeyType};

use super::{ArtifactKind, EmitContext, EntityNames, Source, reusable_id};

pub(super) fn emit(ctx: &EmitContext, entity: &EntityDescriptor) -> Option<String> {
    let permission = entity.permission.as_ref()?;
    let names = EntityNames::of(entity);
    let audited = entity.audit_enabled;
    let mut out = Source::file(&format!("Request handler for `{}`.", entity.table_name));

    out.line("use std::sync::Arc;").blank().line("use garde::Validate;");
    if audited {
        out.line(
            "use crudforge_runtime::{AccessControl, AuditAction, AuditSink, HandlerError, RequestContext, authorize};",
        );
    } else {
        out.line(
            "use crudforge_runtime::{AccessControl, HandlerError, RequestContext, authorize};",
        );
    }
    out.blank()
        .line(format!(
            "use {}::{};",
            ctx.module_path(ArtifactKind::Contract, entity),
            names.contract
        ))
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

    out.line(format!(
        "pub const {}: &str = {:?};",
        names.read_permission, permission.read
    ))
    .line(format!(
        "pub const {}: &str = {:?};",
        names.write_permission, permission.write
    ))
    .blank();

    out.line(format!(
        "/// Permission-checked operations on [`{}`].",
        names.entity
    ))
    .line(format!("pub struct {}<R> {{", names.handler))
    .line("    repository: R,")
    .line("    access: Arc<dyn AccessControl>,");
    if audited {
        out.line("    audit: Arc<dyn AuditSink>,");
    }
    out.line("}").blank();

    out.line(format!(
        "impl<R: {}> {}<R> {{",
        names.contract, names.handler
    ));
    if audited {
        out.line(
            "    pub fn new(repository: R, access: Arc<dyn AccessControl>, audit: Arc<dyn AuditSink>) -> Self {",
        )
        .line("        Self {")
        .line("            repository,")
        .line("            access,")
        .line("            audit,")
        .line("        }")
        .line("    }");
    } else {
        out.line("    pub fn new(repository: R, access: Arc<dyn AccessControl>) -> Self {")
            .line("        Self { repository, access }")
            .line("    }");
    }
    out.blank();

    get(&mut out, &names);
    out.blank();
    list(&mut out, &names);
    out.blank();
    create(&mut out, &names, audited);
    out.blank();
    update(&mut out, entity, &names, audited);
    out.blank();
    delete(&mut out, entity, &names, audited);
    out.line("}");

    Some(out.finish())
}

fn authorize_line(permission: &str, binding: bool) -> String {
    let call = format!("authorize(ctx, self.access.as_ref(), {permission}).await?;");
    if binding {
        format!("        let actor = {call}")
    } else {
        format!("        {call}")
    }
}

fn audit_call(out: &mut Source, names: &EntityNames, action: &str, record_id: &str) {
    out.line("        self.audit")
        .line("            .record_audit(")
        .line(format!("                AuditAction::{action},"))
        .line("                &actor.id,")
        .line(format!("                {:?},", names.entity))
        .line(format!("                &{record_id},"))
        .line("                ctx.origin(),")
        .line("            )")
        .line("            .await;");
}

fn get(out: &mut Source, names: &EntityNames) {
    out.line(format!(
        "    pub async fn get(&self, ctx: &RequestContext, id: {}) -> Result<{}, HandlerError> {{",
        names.id, names.entity
    ))
    .line(authorize_line(&names.read_permission, false))
    .line("        self.repository")
    .line("            .find_by_id(id)")
    .line("            .await?")
    .line("            .ok_or(HandlerError::NotFound)")
    .line("    }");
}

fn list(out: &mut Source, names: &EntityNames) {
    out.line(format!(
        "    pub async fn list(&self, ctx: &RequestContext, query: {}) -> Result<Vec<{}>, HandlerError> {{",
        names.query, names.entity
    ))
    .line(authorize_line(&names.read_permission, false))
    .line("        query.validate().map_err(HandlerError::validation)?;")
    .line("        Ok(self.repository.find_many(&query).await?)")
    .line("    }");
}

fn create(out: &mut Source, names: &EntityNames, audited: bool) {
    out.line(format!(
        "    pub async fn create(&self, ctx: &RequestContext, input: {}) -> Result<{}, HandlerError> {{",
        names.create_input, names.entity
    ))
    .line(authorize_line(&names.write_permission, audited))
    .line("        input.validate().map_err(HandlerError::validation)?;")
    .line("        let record = self.repository.create(input).await?;");
    if audited {
        let record_id = format!("record.{}.to_string()", names.primary_key);
        audit_call(out, names, "Create", &record_id);
    }
    out.line("        Ok(record)").line("    }");
}

fn update(out: &mut Source, entity: &EntityDescriptor, names: &EntityNames, audited: bool) {
    let key = match entity.primary_key_type {
        PrimaryKeyType::Integer => format!("input.{}", names.primary_key),
        PrimaryKeyType::String => format!("input.{}.clone()", names.primary_key),
    };
    out.line(format!(
        "    pub async fn update(&self, ctx: &RequestContext, input: {}) -> Result<{}, HandlerError> {{",
        names.update_input, names.entity
    ))
    .line(authorize_line(&names.write_permission, audited))
    .line("        input.validate().map_err(HandlerError::validation)?;")
    .line(format!("        let id = {key};"))
    .line("        let record = self.repository.update(id, input).await?;");
    if audited {
        let record_id = format!("record.{}.to_string()", names.primary_key);
        audit_call(out, names, "Update", &record_id);
    }
    out.line("        Ok(record)").line("    }");
}

fn delete(out: &mut Source, entity: &EntityDescriptor, names: &EntityNames, audited: bool) {
    out.line(format!(
        "    pub async fn delete(&self, ctx: &RequestContext, id: {}) -> Result<(), HandlerError> {{",
        names.id
    ))
    .line(authorize_line(&names.write_permission, audited))
    .line(format!(
        "        if self.repository.find_by_id({}).await?.is_none() {{",
        reusable_id(entity)
    ))
    .line("            return Err(HandlerError::NotFound);")
    .line("        }");
    if audited {
        out.line(format!(
            "        self.repository.delete({}).await?;",
            reusable_id(entity)
        ));
        audit_call(out, names, "Delete", "id.to_string()");
    } else {
        out.line("        self.repository.delete(id).await?;");
    }
    out.line("        Ok(())").line("    }");
}
