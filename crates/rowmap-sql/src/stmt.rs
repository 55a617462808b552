/// A statement template over one table.
///
/// Templates carry placeholders in place of values and never a predicate;
/// the caller appends a predicate fragment and its arguments.
#[derive(Debug, Clone, Copy)]
pub enum Statement<'a> {
    /// `INSERT INTO t (c1,c2) VALUES (?,?)`
    Insert(&'a Table<'a>),

    /// `UPDATE t SET c1=?,c2=?`
    Update(&'a Table<'a>),

    /// `SELECT c1,c2 FROM t`
    Select(&'a Table<'a>),
}

/// Table name and ordered column names to render against.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    pub name: &'a str,
    pub columns: &'a [&'a str],
}

impl<'a> Table<'a> {
    pub fn new(name: &'a str, columns: &'a [&'a str]) -> Self {
        Self { name, columns }
    }
}
