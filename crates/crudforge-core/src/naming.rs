use std::collections::BTreeMap;

/// Maps table names to entity names.
///
/// The override table is consulted first; everything else goes through a
/// suffix-stripping singularization followed by PascalCase joining. The
/// heuristic knows nothing about real plurals (`status` becomes `Statu`),
/// so irregular names belong in the override table.
#[derive(Debug, Clone, Default)]
pub struct NameResolver {
    overrides: BTreeMap<String, String>,
}

impl NameResolver {
    pub fn new(overrides: BTreeMap<String, String>) -> Self {
        Self { overrides }
    }

    pub fn overrides(&self) -> &BTreeMap<String, String> {
        &self.overrides
    }

    pub fn resolve(&self, table_name: &str) -> String {
        if let Some(entity) = self.overrides.get(table_name) {
            return entity.clone();
        }
        pascal_case(strip_plural_suffix(table_name))
    }
}

fn strip_plural_suffix(name: &str) -> &str {
    if let Some(stripped) = name.strip_suffix("es") {
        stripped
    } else if let Some(stripped) = name.strip_suffix('s') {
        stripped
    } else {
        name
    }
}

fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in name.chars() {
        if ch == '_' || ch == '-' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn pascal_case(name: &str) -> String {
    split_words(name)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
