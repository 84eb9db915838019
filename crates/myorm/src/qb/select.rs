//! SELECT statement description and rendering

use crate::value::Value;

use super::filter::Filter;

/// Join flavor for [`Query::join`]. `Other` falls back to a plain `JOIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
    SelfJoin,
    Other,
}

impl JoinType {
    fn keyword(self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
            JoinType::Right => "RIGHT JOIN",
            JoinType::Full => "FULL JOIN",
            JoinType::SelfJoin => "SELF JOIN",
            JoinType::Other => "JOIN",
        }
    }
}

/// A single `<keyword> <table> ON <condition>` clause. Both strings are
/// trusted schema-author input.
#[derive(Debug, Clone)]
pub struct Join {
    pub kind: JoinType,
    pub table: String,
    pub on: String,
}

impl Join {
    pub fn new(kind: JoinType, table: impl Into<String>, on: impl Into<String>) -> Self {
        Self {
            kind,
            table: table.into(),
            on: on.into(),
        }
    }
}

/// How [`crate::Db::select`] shapes its result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnType {
    /// Every row, empty when nothing matched.
    #[default]
    All,
    /// Result-set row count.
    Count,
    /// First row only.
    Single,
}

/// Description of a SELECT statement.
///
/// Builder methods move `self`, so a query reads as one chain:
///
/// ```
/// use myorm::{Query, ReturnType};
///
/// let query = Query::new()
///     .columns("id, name")
///     .eq("status", "active")
///     .like("name", "jo")
///     .order_by("id DESC")
///     .limit(10)
///     .return_type(ReturnType::All);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub(crate) columns: Option<String>,
    pub(crate) join: Option<Join>,
    pub(crate) filter: Filter,
    pub(crate) like: Vec<(String, String)>,
    pub(crate) like_or: Vec<(String, String)>,
    pub(crate) order_by: Option<String>,
    pub(crate) start: Option<u64>,
    pub(crate) limit: Option<u64>,
    pub(crate) return_type: ReturnType,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projection list; defaults to `*`.
    pub fn columns(mut self, columns: impl Into<String>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    pub fn join(mut self, join: Join) -> Self {
        self.join = Some(join);
        self
    }

    /// Add a `column = ?` condition to the WHERE clause.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter = self.filter.eq(column, value);
        self
    }

    /// Add `column LIKE ?` to the AND-joined LIKE group. The bound value is
    /// wrapped as `%needle%`.
    pub fn like(mut self, column: impl Into<String>, needle: impl Into<String>) -> Self {
        self.like.push((column.into(), needle.into()));
        self
    }

    /// Add `column LIKE ?` to the OR-joined LIKE group. The bound value is
    /// wrapped as `%needle%`.
    pub fn like_or(mut self, column: impl Into<String>, needle: impl Into<String>) -> Self {
        self.like_or.push((column.into(), needle.into()));
        self
    }

    /// Raw `ORDER BY` expression, e.g. `"id DESC"`.
    pub fn order_by(mut self, expr: impl Into<String>) -> Self {
        self.order_by = Some(expr.into());
        self
    }

    /// Row offset; only honored together with [`Query::limit`].
    pub fn start(mut self, start: u64) -> Self {
        self.start = Some(start);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn return_type(mut self, return_type: ReturnType) -> Self {
        self.return_type = return_type;
        self
    }
}

/// Render `query` against `table`.
///
/// Clause order: projection, FROM, join, WHERE (equality pairs, then the
/// AND-joined LIKE group, then the OR-joined LIKE group, each glued with
/// ` AND ` onto whatever precedes it), ORDER BY, LIMIT. `LIMIT ?, ?` binds
/// `[start, limit]`; a start without a limit is ignored.
pub fn build_select(table: &str, query: &Query) -> (String, Vec<Value>) {
    let mut params = Vec::new();
    let mut sql = String::from("SELECT ");
    sql.push_str(query.columns.as_deref().unwrap_or("*"));
    sql.push_str(" FROM ");
    sql.push_str(table);

    if let Some(join) = &query.join {
        sql.push(' ');
        sql.push_str(join.kind.keyword());
        sql.push(' ');
        sql.push_str(&join.table);
        sql.push_str(" ON ");
        sql.push_str(&join.on);
    }

    let mut has_where = false;
    if !query.filter.is_empty() {
        sql.push_str(" WHERE ");
        let rendered = query.filter.render(&mut params);
        sql.push_str(&rendered);
        has_where = true;
    }

    push_like_group(&mut sql, &mut params, &query.like, " AND ", &mut has_where);
    push_like_group(&mut sql, &mut params, &query.like_or, " OR ", &mut has_where);

    if let Some(order) = &query.order_by {
        sql.push_str(" ORDER BY ");
        sql.push_str(order);
    }

    match (query.start, query.limit) {
        (Some(start), Some(limit)) => {
            sql.push_str(" LIMIT ?, ?");
            params.push(Value::from(start));
            params.push(Value::from(limit));
        }
        (None, Some(limit)) => {
            sql.push_str(" LIMIT ?");
            params.push(Value::from(limit));
        }
        _ => {}
    }

    (sql, params)
}

fn push_like_group(
    sql: &mut String,
    params: &mut Vec<Value>,
    group: &[(String, String)],
    joiner: &str,
    has_where: &mut bool,
) {
    if group.is_empty() {
        return;
    }
    sql.push_str(if *has_where { " AND (" } else { " WHERE (" });
    for (i, (column, needle)) in group.iter().enumerate() {
        if i > 0 {
            sql.push_str(joiner);
        }
        sql.push_str(column);
        sql.push_str(" LIKE ?");
        params.push(Value::Text(format!("%{needle}%")));
    }
    sql.push(')');
    *has_where = true;
}
