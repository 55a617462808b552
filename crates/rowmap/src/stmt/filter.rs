use rowmap_core::stmt::Value;

/// A raw SQL predicate and its positional arguments.
///
/// The fragment is appended verbatim after the generated statement, so it
/// must use the placeholder syntax of the target database. For PostgreSQL the
/// numbering continues after the record's own columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    sql: String,
    params: Vec<Value>,
}

impl Filter {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: vec![],
        }
    }

    /// Appends a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    /// Returns `true` if the fragment opens with the `where` keyword.
    ///
    /// Leading whitespace is skipped and the keyword is matched without
    /// regard to ASCII case. The next character must not continue an
    /// identifier, so `where(id = ?)` qualifies and `whereabouts` does not.
    pub fn is_where(&self) -> bool {
        let sql = self.sql.trim_start().as_bytes();

        sql.len() > 5
            && sql[..5].eq_ignore_ascii_case(b"where")
            && !is_ident_continue(sql[5])
    }
}

fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || !byte.is_ascii()
}
