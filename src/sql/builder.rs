//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from resource constants.

use serde_json::Value;

/// Primary key column shared by every resource table; storage-assigned.
pub const PK: &str = "id";

/// Quote identifier for PostgreSQL (safe: only from compile-time constants).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// SELECT list: the primary key followed by the declared columns.
fn select_column_list(columns: &[&str]) -> String {
    std::iter::once(PK)
        .chain(columns.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Full-table scan, ordered by primary key. No filters, no limit.
pub fn select_all(table: &str, columns: &[&str]) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(columns),
        quoted(table),
        quoted(PK)
    );
    q
}

/// Point lookup by primary key.
pub fn select_by_id(table: &str, columns: &[&str], id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(Value::Number(id.into()));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = $1",
        select_column_list(columns),
        quoted(table),
        quoted(PK)
    );
    q
}

/// INSERT: one placeholder per declared column; the primary key is left to
/// the storage default.
pub fn insert(table: &str, columns: &[&str], values: Vec<Value>) -> QueryBuf {
    debug_assert_eq!(columns.len(), values.len());
    let mut q = QueryBuf::new();
    let mut placeholders = Vec::with_capacity(values.len());
    for v in values {
        let n = q.push_param(v);
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(table),
        columns.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", "),
        placeholders.join(", ")
    );
    q
}

/// UPDATE by id: full overwrite, SET every declared column. The id is the
/// last parameter.
pub fn update_by_id(table: &str, columns: &[&str], values: Vec<Value>, id: i64) -> QueryBuf {
    debug_assert_eq!(columns.len(), values.len());
    let mut q = QueryBuf::new();
    let mut sets = Vec::with_capacity(values.len());
    for (col, v) in columns.iter().zip(values) {
        let n = q.push_param(v);
        sets.push(format!("{} = ${}", quoted(col), n));
    }
    let id_param = q.push_param(Value::Number(id.into()));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        quoted(table),
        sets.join(", "),
        quoted(PK),
        id_param
    );
    q
}

/// DELETE by id.
pub fn delete_by_id(table: &str, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(Value::Number(id.into()));
    q.sql = format!("DELETE FROM {} WHERE {} = $1", quoted(table), quoted(PK));
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn select_all_lists_pk_and_columns() {
        let q = select_all("users", &["username", "password", "email"]);
        assert_eq!(
            q.sql,
            "SELECT \"id\", \"username\", \"password\", \"email\" FROM \"users\" ORDER BY \"id\""
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn select_by_id_binds_one_param() {
        let q = select_by_id("customers", &["name", "email", "address"], 7);
        assert_eq!(
            q.sql,
            "SELECT \"id\", \"name\", \"email\", \"address\" FROM \"customers\" WHERE \"id\" = $1"
        );
        assert_eq!(q.params, vec![json!(7)]);
    }

    #[test]
    fn insert_numbers_placeholders_in_column_order() {
        let q = insert(
            "users",
            &["username", "password", "email"],
            vec![json!("alice"), json!("digest"), json!("a@x.com")],
        );
        assert_eq!(
            q.sql,
            "INSERT INTO \"users\" (\"username\", \"password\", \"email\") VALUES ($1, $2, $3)"
        );
        assert_eq!(q.params, vec![json!("alice"), json!("digest"), json!("a@x.com")]);
    }

    #[test]
    fn update_sets_every_column_with_id_last() {
        let q = update_by_id(
            "customers",
            &["name", "email", "address"],
            vec![json!("bob"), json!("b@x.com"), json!("main st")],
            3,
        );
        assert_eq!(
            q.sql,
            "UPDATE \"customers\" SET \"name\" = $1, \"email\" = $2, \"address\" = $3 WHERE \"id\" = $4"
        );
        assert_eq!(q.params[3], json!(3));
    }

    #[test]
    fn delete_targets_only_the_given_table() {
        let q = delete_by_id("customers", 9);
        assert_eq!(q.sql, "DELETE FROM \"customers\" WHERE \"id\" = $1");
        assert_eq!(q.params, vec![json!(9)]);
    }
}
