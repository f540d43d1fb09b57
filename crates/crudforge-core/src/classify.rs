use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::conventions::Conventions;
use crate::schema::ColumnDescriptor;

/// Semantic shape inferred for one column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    DateTime,
    Email,
    Url,
    Password { min_length: u32 },
    Integer,
    Text,
    Boolean,
    Bytes,
    Number,
}

/// Classifier output: the rule plus whether the value may be null.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationRule {
    pub kind: RuleKind,
    pub nullable: bool,
}

const INTEGER_TOKENS: &[&str] = &["int"];
const TEXT_TOKENS: &[&str] = &["text", "char", "clob"];
const BOOLEAN_TOKENS: &[&str] = &["bool"];
const BYTES_TOKENS: &[&str] = &["blob", "binary"];
const NUMBER_TOKENS: &[&str] = &["real", "float", "double", "numeric", "decimal"];

/// Integer-family test on a declared SQL type, shared with primary-key typing.
pub fn is_integer_type(declared_type: &str) -> bool {
    type_includes(&declared_type.to_lowercase(), INTEGER_TOKENS)
}

fn type_includes(base_type: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| base_type.contains(token))
}

/// Name conventions first, declared type family second.
#[derive(Debug, Clone, Copy)]
pub struct FieldClassifier<'a> {
    timestamp_fields: &'a BTreeSet<String>,
    conventions: &'a Conventions,
}

impl<'a> FieldClassifier<'a> {
    pub fn new(timestamp_fields: &'a BTreeSet<String>, conventions: &'a Conventions) -> Self {
        Self {
            timestamp_fields,
            conventions,
        }
    }

    pub fn classify(&self, column: &ColumnDescriptor) -> ValidationRule {
        ValidationRule {
            kind: self.kind_of(column),
            nullable: column.nullable,
        }
    }

    fn kind_of(&self, column: &ColumnDescriptor) -> RuleKind {
        let name = column.name.as_str();
        if self.timestamp_fields.contains(name) {
            return RuleKind::DateTime;
        }
        if name == self.conventions.email {
            return RuleKind::Email;
        }
        if name.contains(self.conventions.url_token.as_str()) {
            return RuleKind::Url;
        }
        if name.contains(self.conventions.password_token.as_str()) {
            return RuleKind::Password {
                min_length: self.conventions.password_min_length,
            };
        }

        let base_type = column.declared_type.trim().to_lowercase();
        if type_includes(&base_type, INTEGER_TOKENS) {
            RuleKind::Integer
        } else if base_type.is_empty() || type_includes(&base_type, TEXT_TOKENS) {
            RuleKind::Text
        } else if type_includes(&base_type, BOOLEAN_TOKENS) {
            RuleKind::Boolean
        } else if type_includes(&base_type, BYTES_TOKENS) {
            RuleKind::Bytes
        } else if type_includes(&base_type, NUMBER_TOKENS) {
            RuleKind::Number
        } else {
            RuleKind::Text
        }
    }
}
