use super::Serializer;

/// Placeholder syntax. This is the only dialect difference rowmap renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// `?`
    #[default]
    Sqlite,

    /// `?`
    Mysql,

    /// `$1`, `$2`, ...
    Postgresql,
}

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer::new(Flavor::Sqlite)
    }
}
