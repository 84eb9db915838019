//! Server bootstrap: connect, create and select the database, apply the
//! schema scripts.
//!
//! Scripts are plain `*.sql` files of `;`-separated statements. They run on
//! every bootstrap; idempotence (`CREATE TABLE IF NOT EXISTS ...`) is the
//! script author's responsibility. A file named exactly `alters.sql` is
//! always applied after every other script, so column additions see the
//! tables they alter.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use mysql_async::prelude::Queryable;
use mysql_async::{Conn, OptsBuilder};

use crate::config::DbConfig;
use crate::db::Db;
use crate::error::{DbError, DbResult};
use crate::report::ErrorReporter;

/// A schema script scheduled for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFile {
    pub path: PathBuf,
    pub deferred: bool,
}

/// Connect with no database selected; [`ensure_database`] picks one.
pub async fn connect(config: &DbConfig) -> DbResult<Conn> {
    tracing::debug!(host = %config.host, port = config.port, "connecting");
    let opts = OptsBuilder::default()
        .ip_or_hostname(config.host.clone())
        .tcp_port(config.port)
        .user(Some(config.user.clone()))
        .pass(Some(config.password.clone()));
    Conn::new(opts).await.map_err(DbError::connection)
}

/// Issue `CREATE DATABASE IF NOT EXISTS <name> CHARACTER SET utf8 COLLATE
/// utf8_unicode_ci`, then switch the session to it.
///
/// Both statements must succeed; either one failing is a
/// [`DbError::Schema`] naming the database.
///
/// `name` comes from configuration and is interpolated as an identifier; it
/// must not carry untrusted input.
pub async fn ensure_database(conn: &mut Conn, name: &str) -> DbResult<()> {
    let create =
        format!("CREATE DATABASE IF NOT EXISTS {name} CHARACTER SET utf8 COLLATE utf8_unicode_ci");
    conn.query_drop(create)
        .await
        .map_err(|e| provisioning_error(name, e))?;
    conn.query_drop(format!("USE {name}"))
        .await
        .map_err(|e| provisioning_error(name, e))?;
    tracing::info!(database = name, "database ready");
    Ok(())
}

/// A provisioning failure is a schema error naming the database.
fn provisioning_error(name: &str, err: mysql_async::Error) -> DbError {
    DbError::schema(format!("database `{name}`"), err.to_string())
}

/// List the scripts under `dir` in execution order: every non-deferred
/// `.sql` file sorted by name, then `alters.sql`.
///
/// Non-sql entries and subdirectories are ignored. Zero scripts is a valid
/// state, not an error.
pub fn scan_scripts(dir: &Path) -> DbResult<Vec<ScriptFile>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        DbError::schema(dir.display(), format!("cannot read script directory: {e}"))
    })?;

    let mut scripts = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            DbError::schema(dir.display(), format!("cannot read directory entry: {e}"))
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("sql") {
            continue;
        }
        let deferred = path.file_name().and_then(|name| name.to_str()) == Some("alters.sql");
        scripts.push(ScriptFile { path, deferred });
    }

    scripts.sort_by(|a, b| (a.deferred, &a.path).cmp(&(b.deferred, &b.path)));
    Ok(scripts)
}

/// Split a script into statements: `;`-separated, trimmed, with empty
/// fragments (trailing `;`, blank lines) dropped.
///
/// The split is textual; a literal `;` inside a string constant is not
/// handled.
pub fn split_statements(script: &str) -> Vec<&str> {
    script
        .split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
        .collect()
}

/// Apply every script under `dir` in order.
///
/// The first failing read or statement aborts the whole run with
/// [`DbError::Schema`]; statements already executed stay applied (DDL is
/// not transactional in MySQL).
pub async fn apply_scripts(conn: &mut Conn, dir: &Path) -> DbResult<()> {
    for script in scan_scripts(dir)? {
        let contents = fs::read_to_string(&script.path).map_err(|e| {
            DbError::schema(script.path.display(), format!("cannot read script: {e}"))
        })?;
        let statements = split_statements(&contents);
        tracing::info!(
            script = %script.path.display(),
            statements = statements.len(),
            "applying schema script"
        );
        for statement in statements {
            tracing::debug!(statement, "running schema statement");
            conn.query_drop(statement)
                .await
                .map_err(|e| DbError::schema(script.path.display(), e.to_string()))?;
        }
    }
    Ok(())
}

/// Full bootstrap: connect, create and select the database, apply the
/// scripts, hand back a ready [`Db`].
///
/// Failures go to `reporter.fatal` and are returned to the caller.
pub async fn init(config: &DbConfig, reporter: Arc<dyn ErrorReporter>) -> DbResult<Db> {
    match init_conn(config).await {
        Ok(conn) => Ok(Db::new(conn, reporter)),
        Err(err) => {
            reporter.fatal(&err);
            Err(err)
        }
    }
}

async fn init_conn(config: &DbConfig) -> DbResult<Conn> {
    let mut conn = connect(config).await?;
    ensure_database(&mut conn, &config.database).await?;
    apply_scripts(&mut conn, &config.schema_dir).await?;
    Ok(conn)
}
