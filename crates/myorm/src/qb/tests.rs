//! Integration tests for the qb module.

use crate::qb::{
    Assignments, Filter, Join, JoinType, Query, build_delete, build_insert, build_select,
    build_update,
};
use crate::value::Value;

fn placeholders(sql: &str) -> usize {
    sql.matches('?').count()
}

#[test]
fn test_select_full_shape() {
    let query = Query::new()
        .columns("users.id, users.name, accounts.balance")
        .join(Join::new(
            JoinType::Left,
            "accounts",
            "accounts.user_id = users.id",
        ))
        .eq("users.status", "active")
        .like("users.name", "jo")
        .like_or("users.email", "jo")
        .like_or("users.phone", "555")
        .order_by("users.id DESC")
        .start(20)
        .limit(10);

    let (sql, params) = build_select("users", &query);
    assert_eq!(
        sql,
        "SELECT users.id, users.name, accounts.balance FROM users \
         LEFT JOIN accounts ON accounts.user_id = users.id \
         WHERE users.status = ? AND (users.name LIKE ?) \
         AND (users.email LIKE ? OR users.phone LIKE ?) \
         ORDER BY users.id DESC LIMIT ?, ?"
    );
    assert_eq!(
        params,
        vec![
            Value::Text("active".to_string()),
            Value::Text("%jo%".to_string()),
            Value::Text("%jo%".to_string()),
            Value::Text("%555%".to_string()),
            Value::UInt(20),
            Value::UInt(10),
        ]
    );
}

#[test]
fn test_placeholders_match_params_across_operations() {
    let (sql, params) = build_select(
        "users",
        &Query::new().eq("a", 1).like("b", "x").start(0).limit(5),
    );
    assert_eq!(placeholders(&sql), params.len());

    let (sql, params) =
        build_insert("users", &Assignments::new().set("a", 1).set("b", 2)).unwrap();
    assert_eq!(placeholders(&sql), params.len());

    let (sql, params) = build_update(
        "users",
        &Assignments::new().set("a", 1),
        &Filter::new().eq("id", 7),
    )
    .unwrap();
    assert_eq!(placeholders(&sql), params.len());

    let (sql, params) = build_delete("users", &Filter::new().eq("id", 7));
    assert_eq!(placeholders(&sql), params.len());
}

#[test]
fn test_values_never_land_in_sql_text() {
    let needle = "jo'; DROP TABLE users; --";
    let (sql, params) = build_select("users", &Query::new().like("name", needle));
    assert!(!sql.contains(needle));
    assert_eq!(params, vec![Value::Text(format!("%{needle}%"))]);

    let (sql, params) = build_update(
        "users",
        &Assignments::new().set("name", needle),
        &Filter::new().eq("id", 1),
    )
    .unwrap();
    assert!(!sql.contains(needle));
    assert_eq!(params[0], Value::Text(needle.to_string()));
}
