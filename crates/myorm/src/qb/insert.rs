//! INSERT statement rendering

use crate::error::{DbError, DbResult};
use crate::value::Value;

use super::assign::Assignments;

/// Render `INSERT INTO <table> (columns) VALUES (?, ...)`.
///
/// The column list and the bound values share one iteration, so they stay
/// positionally aligned. An empty payload fails with
/// [`DbError::EmptyPayload`] before any SQL exists.
pub fn build_insert(table: &str, data: &Assignments) -> DbResult<(String, Vec<Value>)> {
    if data.is_empty() {
        return Err(DbError::EmptyPayload("insert"));
    }

    let entries = data.entries();
    let mut columns = String::new();
    let mut placeholders = String::new();
    let mut params = Vec::with_capacity(entries.len());
    for (i, (column, value)) in entries.iter().enumerate() {
        if i > 0 {
            columns.push_str(", ");
            placeholders.push_str(", ");
        }
        columns.push_str(column);
        placeholders.push('?');
        params.push(value.clone());
    }

    let sql = format!("INSERT INTO {table} ({columns}) VALUES ({placeholders})");
    Ok((sql, params))
}
