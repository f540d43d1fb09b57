/// Words reserved by Rust that may still be spelled as raw identifiers.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Names that cannot appear as identifiers even in raw form.
const NON_RAW_KEYWORDS: &[&str] = &["_", "crate", "self", "Self", "super"];

/// Type names emitted files use unqualified, either directly or through the
/// derive and `async_trait` expansions. An entity with one of these names
/// would shadow it in its own modules and break the whole generated tree.
const RESERVED_TYPE_NAMES: &[&str] = &[
    // prelude
    "AsMut", "AsRef", "Box", "Clone", "Copy", "Debug", "Default", "Drop", "Eq", "Extend", "Fn",
    "FnMut", "FnOnce", "From", "FromIterator", "Hash", "Into", "IntoIterator", "Iterator",
    "None", "Ok", "Option", "Ord", "PartialEq", "PartialOrd", "Result", "Send", "Sized", "Some",
    "String", "Sync", "ToOwned", "ToString", "TryFrom", "TryInto", "Unpin", "Vec",
    // imported by emitted modules
    "AccessControl", "Arc", "AuditAction", "AuditSink", "BTreeMap", "Deserialize",
    "HandlerError", "QueryBuilder", "RepositoryError", "RequestContext", "Serialize", "Sqlite",
    "SqlitePool", "Validate",
];

/// Letters, digits and underscores, not starting with a digit.
pub fn is_valid_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Valid identifier that can also be spelled in generated Rust.
pub fn is_emittable_identifier(value: &str) -> bool {
    is_valid_identifier(value) && !NON_RAW_KEYWORDS.contains(&value)
}

/// Entity name that would collide with a name the emitted code relies on.
pub fn is_reserved_type_name(value: &str) -> bool {
    RESERVED_TYPE_NAMES.contains(&value)
}

/// Spell `name` as a Rust identifier, escaping keywords as raw identifiers.
pub fn rust_ident(name: &str) -> String {
    if RUST_KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

/// snake_case module name for a PascalCase entity name.
pub fn module_name(entity_name: &str) -> String {
    let mut out = String::with_capacity(entity_name.len() + 4);
    let mut prev_lower_or_digit = false;
    for ch in entity_name.chars() {
        if ch.is_ascii_uppercase() {
            if prev_lower_or_digit {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower_or_digit = false;
        } else {
            out.push(ch);
            prev_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}

/// SCREAMING_SNAKE_CASE prefix for constants derived from an entity name.
pub fn constant_prefix(entity_name: &str) -> String {
    module_name(entity_name).to_ascii_uppercase()
}
