// @generated by crudforge. Do not edit by hand.
//! Types for the `clases_recurrentes` table.

use std::collections::BTreeMap;

use garde::Validate;
use serde::{Deserialize, Serialize};

/// Primary key of [`ClaseRecurrente`].
pub type ClaseRecurrenteId = i64;

/// Columns of `clases_recurrentes` in declaration order.
pub const CLASE_RECURRENTE_COLUMNS: &[&str] = &["id", "nombre", "capacidad_max", "creado_en", "actualizado_en", "eliminado_en"];

/// One row of `clases_recurrentes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
pub struct ClaseRecurrente {
    #[garde(skip)]
    pub id: ClaseRecurrenteId,
    #[garde(skip)]
    pub nombre: String,
    #[garde(skip)]
    pub capacidad_max: i64,
    #[garde(skip)]
    pub creado_en: chrono::DateTime<chrono::Utc>,
    #[garde(skip)]
    pub actualizado_en: Option<chrono::DateTime<chrono::Utc>>,
    #[garde(skip)]
    pub eliminado_en: Option<chrono::DateTime<chrono::Utc>>,
}

/// Fields accepted when creating a [`ClaseRecurrente`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateClaseRecurrenteInput {
    #[garde(skip)]
    pub nombre: String,
}

/// Partial update of a [`ClaseRecurrente`]; absent fields are left untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UpdateClaseRecurrenteInput {
    #[garde(skip)]
    pub id: ClaseRecurrenteId,
    #[garde(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[garde(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacidad_max: Option<i64>,
    #[garde(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creado_en: Option<chrono::DateTime<chrono::Utc>>,
    #[garde(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crudforge_runtime::double_option")]
    pub actualizado_en: Option<Option<chrono::DateTime<chrono::Utc>>>,
    #[garde(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crudforge_runtime::double_option")]
    pub eliminado_en: Option<Option<chrono::DateTime<chrono::Utc>>>,
}

/// List query for [`ClaseRecurrente`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ClaseRecurrenteQuery {
    /// Equality filters keyed by column name.
    #[garde(skip)]
    #[serde(default, rename = "where", skip_serializing_if = "Option::is_none")]
    pub filter: Option<BTreeMap<String, serde_json::Value>>,
    #[garde(range(min = 1, max = 100))]
    #[serde(default = "crudforge_runtime::default_limit")]
    pub limit: u32,
    #[garde(skip)]
    #[serde(default)]
    pub offset: u32,
}

impl Default for ClaseRecurrenteQuery {
    fn default() -> Self {
        Self {
            filter: None,
            limit: 20,
            offset: 0,
        }
    }
}
