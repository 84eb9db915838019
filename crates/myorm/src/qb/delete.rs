//! DELETE statement rendering

use crate::value::Value;

use super::filter::Filter;

/// Render `DELETE FROM <table> [WHERE ...]`.
///
/// An empty filter deletes every row in the table; whether that is intended
/// is the caller's call to make.
pub fn build_delete(table: &str, filter: &Filter) -> (String, Vec<Value>) {
    let mut sql = format!("DELETE FROM {table}");
    let mut params = Vec::new();
    if !filter.is_empty() {
        sql.push_str(" WHERE ");
        let rendered = filter.render(&mut params);
        sql.push_str(&rendered);
    }
    (sql, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtered_delete() {
        let filter = Filter::new().eq("id", 7).eq("status", "inactive");
        let (sql, params) = build_delete("users", &filter);
        assert_eq!(sql, "DELETE FROM users WHERE id = ? AND status = ?");
        assert_eq!(
            params,
            vec![Value::Int(7), Value::Text("inactive".to_string())]
        );
    }

    #[test]
    fn test_empty_filter_deletes_all() {
        let (sql, params) = build_delete("users", &Filter::new());
        assert_eq!(sql, "DELETE FROM users");
        assert!(params.is_empty());
    }
}
