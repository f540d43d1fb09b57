use serde::{Deserialize, Serialize};

/// Column-name conventions shared by the classifier, the descriptor builder
/// and the emitters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Conventions {
    /// Column stamped with the insertion time by generated `create`.
    pub created_at: String,
    /// Column stamped with the modification time by generated `update`.
    pub updated_at: String,
    /// Nullable timestamp marking a row as deleted.
    pub soft_delete: String,
    /// Exact column name validated as an email address.
    pub email: String,
    /// Substring marking a column validated as a URL.
    pub url_token: String,
    /// Substring marking a column validated as a password.
    pub password_token: String,
    pub password_min_length: u32,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            created_at: "creado_en".to_string(),
            updated_at: "actualizado_en".to_string(),
            soft_delete: "eliminado_en".to_string(),
            email: "email".to_string(),
            url_token: "url".to_string(),
            password_token: "password".to_string(),
            password_min_length: 8,
        }
    }
}

impl Conventions {
    /// Columns maintained by generated code rather than by callers.
    pub fn is_auto_maintained(&self, column: &str) -> bool {
        column == self.created_at || column == self.updated_at || column == self.soft_delete
    }
}
