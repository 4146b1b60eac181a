//! SQL composition for collection queries
//!
//! This module turns a typed `FilterSpec` into SQL text plus bound values.
//! It provides:
//! - `SqlCollection` trait mapping a collection onto a table
//! - `Conditions` for building `WHERE` clauses with `?` placeholders
//! - `SelectBuilder` for columns and include joins
//! - `find_many_statement` / `count_statement` producing `SqlStatement`s
//!
//! Placeholders use `?`, which both SQLite and MySQL accept. Values are never
//! interpolated into SQL text.

use crate::pagination::{Collection, FindMany};

/// A value bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Int(i64),
    Text(String),
    Bool(bool),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(i64::from(value))
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

/// A complete SQL statement with its bound values, in placeholder order
#[derive(Debug, Clone, PartialEq)]
pub struct SqlStatement {
    pub sql: String,
    pub binds: Vec<SqlValue>,
}

/// `WHERE` clause builder
///
/// Clauses are joined with `AND`.
#[derive(Debug, Default)]
pub struct Conditions {
    clauses: Vec<String>,
    binds: Vec<SqlValue>,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw clause; `binds` must match its placeholders in order
    pub fn push(&mut self, clause: impl Into<String>, binds: impl IntoIterator<Item = SqlValue>) {
        self.clauses.push(clause.into());
        self.binds.extend(binds);
    }

    /// `column = ?`
    pub fn eq(&mut self, column: &str, value: impl Into<SqlValue>) {
        self.push(format!("{} = ?", column), [value.into()]);
    }

    /// `column >= ?`
    pub fn at_least(&mut self, column: &str, value: impl Into<SqlValue>) {
        self.push(format!("{} >= ?", column), [value.into()]);
    }

    /// Case-insensitive substring match over any of `columns`
    ///
    /// Only ASCII letters are folded, matching SQLite's `LOWER()`.
    pub fn contains_any(&mut self, columns: &[&str], needle: &str) {
        if columns.is_empty() {
            return;
        }
        let pattern = format!("%{}%", escape_like(&needle.to_ascii_lowercase()));
        let clause = columns
            .iter()
            .map(|column| format!("LOWER({}) LIKE ? ESCAPE '!'", column))
            .collect::<Vec<_>>()
            .join(" OR ");
        self.push(
            format!("({})", clause),
            columns.iter().map(|_| SqlValue::Text(pattern.clone())),
        );
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// ` WHERE a AND b`, or an empty string when there are no clauses
    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }

    pub fn binds(&self) -> &[SqlValue] {
        &self.binds
    }
}

/// Escape LIKE wildcards using `!` as the escape character
fn escape_like(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '!' | '%' | '_') {
            escaped.push('!');
        }
        escaped.push(c);
    }
    escaped
}

/// Column list and joins for a `SELECT`
#[derive(Debug)]
pub struct SelectBuilder {
    table: &'static str,
    columns: Vec<String>,
    joins: Vec<String>,
}

impl SelectBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            joins: Vec::new(),
        }
    }

    /// Add base-table columns, qualified with the table name
    pub fn columns(&mut self, columns: &[&str]) {
        for column in columns {
            self.columns.push(format!("{}.{}", self.table, column));
        }
    }

    /// Add a raw column expression, e.g. `author.email AS author_email`
    pub fn column(&mut self, expr: impl Into<String>) {
        self.columns.push(expr.into());
    }

    /// Add a `LEFT JOIN`; `clause` is everything after the keywords
    pub fn left_join(&mut self, clause: impl Into<String>) {
        self.joins.push(format!(" LEFT JOIN {}", clause.into()));
    }
}

/// Mapping of a collection onto a SQL table
///
/// `filter` may only reference the base table (use `EXISTS` for related
/// tables), so counting never needs the include joins. `select` may only add
/// many-to-one joins or scalar sub-selects, so includes never change how many
/// rows a query returns.
pub trait SqlCollection: Collection {
    /// Base table name
    const TABLE: &'static str;

    /// Add columns and include joins
    fn select(include: Self::Include, select: &mut SelectBuilder);

    /// Add `WHERE` conditions for `filter`
    fn filter(filter: &Self::Filter, conditions: &mut Conditions);

    /// Column expression to order by for `field`
    fn sort_column(field: Self::SortField) -> &'static str;
}

/// Build the page fetch statement for `query`
///
/// Ordering always ends with `<table>.id ASC` so that offset pages are
/// stable when sort keys collide.
pub fn find_many_statement<C: SqlCollection>(query: FindMany<'_, C>) -> SqlStatement {
    let mut select = SelectBuilder::new(C::TABLE);
    C::select(query.include(), &mut select);

    let mut conditions = Conditions::new();
    C::filter(query.filter(), &mut conditions);

    let mut order_by: Vec<String> = query
        .order_by()
        .iter()
        .map(|clause| format!("{} {}", C::sort_column(clause.field), clause.direction.as_sql()))
        .collect();
    order_by.push(format!("{}.id ASC", C::TABLE));

    let sql = format!(
        "SELECT {} FROM {}{}{} ORDER BY {} LIMIT ? OFFSET ?",
        select.columns.join(", "),
        C::TABLE,
        select.joins.concat(),
        conditions.where_clause(),
        order_by.join(", ")
    );

    let mut binds = conditions.binds;
    binds.push(SqlValue::Int(i64::from(query.take)));
    binds.push(SqlValue::Int(i64::try_from(query.skip).unwrap_or(i64::MAX)));

    SqlStatement { sql, binds }
}

/// Build the count statement for `filter`
pub fn count_statement<C: SqlCollection>(filter: &C::Filter) -> SqlStatement {
    let mut conditions = Conditions::new();
    C::filter(filter, &mut conditions);

    SqlStatement {
        sql: format!("SELECT COUNT(*) FROM {}{}", C::TABLE, conditions.where_clause()),
        binds: conditions.binds,
    }
}
