// @generated by crudforge. Do not edit by hand.
//! Types for the `tags` table.

use std::collections::BTreeMap;

use garde::Validate;
use serde::{Deserialize, Serialize};

/// Primary key of [`Tag`].
pub type TagId = String;

/// Columns of `tags` in declaration order.
pub const TAG_COLUMNS: &[&str] = &["slug", "type", "sitio_url"];

/// One row of `tags`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
pub struct Tag {
    #[garde(skip)]
    pub slug: TagId,
    #[garde(skip)]
    pub r#type: String,
    #[garde(url)]
    pub sitio_url: Option<String>,
}

/// Fields accepted when creating a [`Tag`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateTagInput {
    #[garde(skip)]
    pub r#type: String,
    #[garde(url)]
    pub sitio_url: Option<String>,
}

/// Partial update of a [`Tag`]; absent fields are left untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UpdateTagInput {
    #[garde(skip)]
    pub slug: TagId,
    #[garde(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[garde(url)]
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crudforge_runtime::double_option")]
    pub sitio_url: Option<Option<String>>,
}

/// List query for [`Tag`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TagQuery {
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

impl Default for TagQuery {
    fn default() -> Self {
        Self {
            filter: None,
            limit: 20,
            offset: 0,
        }
    }
}
