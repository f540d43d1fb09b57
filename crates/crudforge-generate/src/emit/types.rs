use crudforge_core::{EntityDescriptor, rust_ident};
use crudforge_runtime::{DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};

use super::{EntityNames, Source, garde_rule, id_type, is_primary_key, value_type};

const DERIVES: &str = "#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]";
const ROW_DERIVES: &str =
    "#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]";

pub(super) fn emit(entity: &EntityDescriptor) -> String {
    let names = EntityNames::of(entity);
    let table = &entity.table_name;
    let mut out = Source::file(&format!("Types for the `{table}` table."));

    out.line("use std::collections::BTreeMap;")
        .blank()
        .line("use garde::Validate;")
        .line("use serde::{Deserialize, Serialize};")
        .blank();

    out.line(format!("/// Primary key of [`{}`].", names.entity))
        .line(format!(
            "pub type {} = {};",
            names.id,
            id_type(entity.primary_key_type)
        ))
        .blank();

    let column_list = entity
        .columns
        .iter()
        .map(|field| format!("{:?}", field.name()))
        .collect::<Vec<_>>()
        .join(", ");
    out.line(format!("/// Columns of `{table}` in declaration order."))
        .line(format!("pub const {}: &[&str] = &[{column_list}];", names.columns))
        .blank();

    // Full row.
    out.line(format!("/// One row of `{table}`."))
        .line(ROW_DERIVES)
        .line(format!("pub struct {} {{", names.entity));
    for field in &entity.columns {
        let ident = rust_ident(field.name());
        if is_primary_key(entity, field) {
            out.line("    #[garde(skip)]")
                .line(format!("    pub {ident}: {},", names.id));
        } else {
            out.line(format!("    #[garde({})]", garde_rule(field.rule.kind)))
                .line(format!("    pub {ident}: {},", value_type(field.rule)));
        }
    }
    out.line("}").blank();

    out.line(format!(
        "/// Fields accepted when creating a [`{}`].",
        names.entity
    ))
    .line(DERIVES)
    .line(format!("pub struct {} {{", names.create_input));
    for field in entity.insertable_fields() {
        out.line(format!("    #[garde({})]", garde_rule(field.rule.kind)))
            .line(format!(
                "    pub {}: {},",
                rust_ident(field.name()),
                value_type(field.rule)
            ));
    }
    out.line("}").blank();

    out.line(format!(
        "/// Partial update of a [`{}`]; absent fields are left untouched.",
        names.entity
    ))
    .line(DERIVES)
    .line(format!("pub struct {} {{", names.update_input));
    for field in &entity.columns {
        let ident = rust_ident(field.name());
        if is_primary_key(entity, field) {
            out.line("    #[garde(skip)]")
                .line(format!("    pub {ident}: {},", names.id));
            continue;
        }
        out.line(format!("    #[garde({})]", garde_rule(field.rule.kind)));
        if field.rule.nullable {
            out.line(
                "    #[serde(default, skip_serializing_if = \"Option::is_none\", with = \"crudforge_runtime::double_option\")]",
            );
        } else {
            out.line("    #[serde(default, skip_serializing_if = \"Option::is_none\")]");
        }
        out.line(format!("    pub {ident}: Option<{}>,", value_type(field.rule)));
    }
    out.line("}").blank();

    out.line(format!("/// List query for [`{}`].", names.entity))
        .line(DERIVES)
        .line(format!("pub struct {} {{", names.query))
        .line("    /// Equality filters keyed by column name.")
        .line("    #[garde(skip)]")
        .line("    #[serde(default, rename = \"where\", skip_serializing_if = \"Option::is_none\")]")
        .line("    pub filter: Option<BTreeMap<String, serde_json::Value>>,")
        .line(format!("    #[garde(range(min = {MIN_LIMIT}, max = {MAX_LIMIT}))]"))
        .line("    #[serde(default = \"crudforge_runtime::default_limit\")]")
        .line("    pub limit: u32,")
        .line("    #[garde(skip)]")
        .line("    #[serde(default)]")
        .line("    pub offset: u32,")
        .line("}")
        .blank();

    out.line(format!("impl Default for {} {{", names.query))
        .line("    fn default() -> Self {")
        .line("        Self {")
        .line("            filter: None,")
        .line(format!("            limit: {DEFAULT_LIMIT},"))
        .line("            offset: 0,")
        .line("        }")
        .line("    }")
        .line("}");

    out.finish()
}
