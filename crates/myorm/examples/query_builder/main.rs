//! Example demonstrating every statement shape, no server needed.
//!
//! Run with:
//!   cargo run --example query_builder -p myorm

use myorm::{
    Assignments, Filter, Join, JoinType, Query, ReturnType, build_delete, build_insert,
    build_select, build_update,
};

fn main() -> myorm::DbResult<()> {
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
        .start(0)
        .limit(20)
        .return_type(ReturnType::All);
    let (sql, params) = build_select("users", &query);
    println!("select:  {sql}");
    println!("  binds: {params:?}");

    let data = Assignments::new()
        .set("name", "jo")
        .set("email", "jo@example.com")
        .set("active", true);
    let (sql, params) = build_insert("users", &data)?;
    println!("insert:  {sql}");
    println!("  binds: {params:?}");

    // `modified` is appended automatically when the payload leaves it out.
    let data = Assignments::new().set("email", "jo@example.net");
    let filter = Filter::new().eq("id", 7);
    let (sql, params) = build_update("users", &data, &filter)?;
    println!("update:  {sql}");
    println!("  binds: {params:?}");

    let filter = Filter::new().eq("status", "inactive");
    let (sql, params) = build_delete("users", &filter);
    println!("delete:  {sql}");
    println!("  binds: {params:?}");

    Ok(())
}
