use heck::ToSnakeCase;

/// Convention translating Rust identifiers into SQL identifiers.
///
/// The same convention names tables after record types, names columns after
/// fields, and normalizes result column names when routing them back to
/// fields. It must be deterministic; collisions over one record's fields are
/// rejected when the table is described.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Naming {
    /// `FullName` and `fullName` become `full_name`
    #[default]
    SnakeCase,

    /// Identifiers are used unchanged
    Verbatim,
}

impl Naming {
    pub fn apply(&self, ident: &str) -> String {
        match self {
            Self::SnakeCase => ident.to_snake_case(),
            Self::Verbatim => ident.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case() {
        let naming = Naming::SnakeCase;
        assert_eq!(naming.apply("Person"), "person");
        assert_eq!(naming.apply("FullName"), "full_name");
        assert_eq!(naming.apply("ID"), "id");
        assert_eq!(naming.apply("UserID"), "user_id");
        assert_eq!(naming.apply("full_name"), "full_name");
    }

    #[test]
    fn snake_case_is_idempotent() {
        let naming = Naming::SnakeCase;
        for ident in ["OrderLine", "createdAt", "HTTPRequest"] {
            let once = naming.apply(ident);
            assert_eq!(naming.apply(&once), once);
        }
    }

    #[test]
    fn verbatim() {
        assert_eq!(Naming::Verbatim.apply("FullName"), "FullName");
    }
}
