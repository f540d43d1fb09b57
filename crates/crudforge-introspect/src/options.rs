/// Options that control how introspection behaves.
#[derive(Debug, Clone, Default)]
pub struct IntrospectOptions {
    /// Keep engine-internal tables such as `sqlite_sequence`.
    pub include_system_tables: bool,
    /// Restrict introspection to these tables when set.
    pub tables: Option<Vec<String>>,
}
