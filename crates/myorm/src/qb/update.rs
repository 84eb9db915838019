//! UPDATE statement rendering

use crate::error::{DbError, DbResult};
use crate::value::{Value, current_timestamp};

use super::assign::Assignments;
use super::filter::Filter;

/// Render `UPDATE <table> SET c = ?, ... [WHERE ...]`.
///
/// A `modified` assignment holding the current local time is appended when
/// the payload does not set one. Every SET value travels as a bound
/// parameter; bound values go SET first, then the filter's.
pub fn build_update(
    table: &str,
    data: &Assignments,
    filter: &Filter,
) -> DbResult<(String, Vec<Value>)> {
    if data.is_empty() {
        return Err(DbError::EmptyPayload("update"));
    }

    let mut entries = data.entries().to_vec();
    if !data.contains("modified") {
        entries.push(("modified".to_string(), Value::Text(current_timestamp())));
    }

    let mut sql = format!("UPDATE {table} SET ");
    let mut params = Vec::with_capacity(entries.len());
    for (i, (column, value)) in entries.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push_str(column);
        sql.push_str(" = ?");
        params.push(value.clone());
    }

    if !filter.is_empty() {
        sql.push_str(" WHERE ");
        let rendered = filter.render(&mut params);
        sql.push_str(&rendered);
    }

    Ok((sql, params))
}
