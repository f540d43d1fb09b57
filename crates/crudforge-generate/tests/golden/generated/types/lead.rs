// @generated by crudforge. Do not edit by hand.
//! Types for the `leads` table.

use std::collections::BTreeMap;

use garde::Validate;
use serde::{Deserialize, Serialize};

/// Primary key of [`Lead`].
pub type LeadId = i64;

/// Columns of `leads` in declaration order.
pub const LEAD_COLUMNS: &[&str] = &["id", "nombre", "email", "estado_id"];

/// One row of `leads`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
pub struct Lead {
    #[garde(skip)]
    pub id: LeadId,
    #[garde(skip)]
    pub nombre: String,
    #[garde(email)]
    pub email: Option<String>,
    #[garde(skip)]
    pub estado_id: i64,
}

/// Fields accepted when creating a [`Lead`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateLeadInput {
    #[garde(skip)]
    pub nombre: String,
    #[garde(email)]
    pub email: Option<String>,
    #[garde(skip)]
    pub estado_id: i64,
}

/// Partial update of a [`Lead`]; absent fields are left untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UpdateLeadInput {
    #[garde(skip)]
    pub id: LeadId,
    #[garde(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[garde(email)]
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crudforge_runtime::double_option")]
    pub email: Option<Option<String>>,
    #[garde(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado_id: Option<i64>,
}

/// List query for [`Lead`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LeadQuery {
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

impl Default for LeadQuery {
    fn default() -> Self {
        Self {
            filter: None,
            limit: 20,
            offset: 0,
        }
    }
}
