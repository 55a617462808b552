use super::{Flavor, Formatter, ToSql};

/// The next positional parameter.
pub(super) struct Placeholder;

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use std::fmt::Write;

        f.placeholders += 1;

        match f.serializer.flavor {
            Flavor::Sqlite | Flavor::Mysql => f.dst.push('?'),
            Flavor::Postgresql => write!(f.dst, "${}", f.placeholders).unwrap(),
        }
    }
}
