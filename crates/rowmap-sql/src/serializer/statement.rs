use super::{Comma, Formatter, Placeholder, ToSql};
use crate::stmt::{Statement, Table};

impl ToSql for &Statement<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match *self {
            Statement::Insert(table) => insert(table, f),
            Statement::Update(table) => update(table, f),
            Statement::Select(table) => select(table, f),
        }
    }
}

fn insert(table: &Table<'_>, f: &mut Formatter<'_>) {
    let columns = Comma(table.columns);
    let values = Comma(table.columns.iter().map(|_| Placeholder));

    fmt!(f, "INSERT INTO ", table.name, " (", columns, ") VALUES (", values, ")");
}

fn update(table: &Table<'_>, f: &mut Formatter<'_>) {
    let assignments = Comma(table.columns.iter().map(|column| Assignment(column)));

    fmt!(f, "UPDATE ", table.name, " SET ", assignments);
}

fn select(table: &Table<'_>, f: &mut Formatter<'_>) {
    let columns = Comma(table.columns);

    fmt!(f, "SELECT ", columns, " FROM ", table.name);
}

/// `column=?`
struct Assignment<'a>(&'a str);

impl ToSql for Assignment<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0, "=", Placeholder);
    }
}
