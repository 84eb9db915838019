//! End-to-end bootstrap + CRUD against a live MySQL/MariaDB server.
//!
//! Run with:
//!   DB_HOST=localhost DB_USER=root DB_PASSWORD=root DB_NAME=accounts \
//!   DB_SCHEMA_DIR=./sql cargo run --example crud -p myorm
//!
//! The schema directory needs a script that creates the table used below,
//! e.g. `sql/users.sql`:
//!
//!   CREATE TABLE IF NOT EXISTS users (
//!       id INT AUTO_INCREMENT PRIMARY KEY,
//!       name VARCHAR(100) NOT NULL,
//!       email VARCHAR(100) NOT NULL,
//!       modified DATETIME
//!   );

use std::sync::Arc;

use myorm::{
    Assignments, DbConfig, Fetched, Filter, Query, ReturnType, RowExt, TracingReporter, bootstrap,
};

#[tokio::main]
async fn main() -> myorm::DbResult<()> {
    dotenvy::dotenv().ok();

    let config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            println!("{err}");
            println!("set DB_USER and DB_NAME (plus DB_HOST / DB_PASSWORD as needed)");
            return Ok(());
        }
    };

    let reporter = Arc::new(TracingReporter::new(config.mode));
    let mut db = bootstrap::init(&config, reporter).await?;
    println!("bootstrap done: database {} is ready", config.database);

    let id = db
        .insert(
            "users",
            &Assignments::new()
                .set("name", "jo")
                .set("email", "jo@example.com"),
        )
        .await?;
    println!("inserted user {id}");

    if let Fetched::Rows(rows) = db.select("users", &Query::new().like("name", "jo")).await? {
        for row in &rows {
            println!(
                "  found: {} <{}>",
                row.str_of("name").unwrap_or("?"),
                row.str_of("email").unwrap_or("?")
            );
        }
    }

    let touched = db
        .update(
            "users",
            &Assignments::new().set("email", "jo@example.net"),
            &Filter::new().eq("id", id),
        )
        .await?;
    println!("updated {touched} row(s)");

    if let Fetched::One(Some(row)) = db
        .select(
            "users",
            &Query::new()
                .eq("id", id)
                .return_type(ReturnType::Single),
        )
        .await?
    {
        println!("  email is now {}", row.str_of("email").unwrap_or("?"));
    }

    if let Fetched::Count(count) = db
        .select("users", &Query::new().return_type(ReturnType::Count))
        .await?
    {
        println!("{count} user(s) total");
    }

    let removed = db.delete("users", &Filter::new().eq("id", id)).await?;
    println!("deleted {removed} row(s)");

    db.close().await
}
