//! Query execution on a single owned connection

use std::sync::Arc;

use mysql_async::prelude::Queryable;
use mysql_async::{Conn, Params};

use crate::error::{DbError, DbResult};
use crate::qb::{self, Assignments, Filter, Query, ReturnType};
use crate::report::ErrorReporter;
use crate::row::{self, Row};
use crate::value::Value;

/// Shaped output of [`Db::select`], matching the query's [`ReturnType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    /// Every row; empty when nothing matched.
    Rows(Vec<Row>),
    /// First row, if any.
    One(Option<Row>),
    /// Result-set row count.
    Count(u64),
}

/// One owned connection plus the reporter shared with bootstrap.
///
/// The protocol is strictly request/response, so every operation takes
/// `&mut self`. Statements are always prepared first; a rejected statement
/// surfaces as [`DbError::Prepare`], a failed one as [`DbError::Execute`].
pub struct Db {
    conn: Conn,
    reporter: Arc<dyn ErrorReporter>,
}

impl Db {
    /// Wrap an already-established connection.
    pub fn new(conn: Conn, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self { conn, reporter }
    }

    /// Run a SELECT described by `query` and shape the result per its
    /// return type.
    pub async fn select(&mut self, table: &str, query: &Query) -> DbResult<Fetched> {
        let (sql, params) = qb::build_select(table, query);
        let rows = self.fetch(&sql, params).await?;
        Ok(match query.return_type {
            ReturnType::All => Fetched::Rows(rows),
            ReturnType::Single => Fetched::One(rows.into_iter().next()),
            ReturnType::Count => Fetched::Count(rows.len() as u64),
        })
    }

    /// Insert one row, returning `last_insert_id` (0 when the table has no
    /// auto-increment key).
    pub async fn insert(&mut self, table: &str, data: &Assignments) -> DbResult<u64> {
        let (sql, params) = qb::build_insert(table, data).map_err(|e| self.report(e))?;
        self.execute(&sql, params).await?;
        Ok(self.conn.last_insert_id().unwrap_or(0))
    }

    /// Update matching rows, returning the affected-row count. A `modified`
    /// timestamp is appended when `data` does not set one.
    pub async fn update(
        &mut self,
        table: &str,
        data: &Assignments,
        filter: &Filter,
    ) -> DbResult<u64> {
        let (sql, params) = qb::build_update(table, data, filter).map_err(|e| self.report(e))?;
        self.execute(&sql, params).await?;
        Ok(self.conn.affected_rows())
    }

    /// Delete matching rows (all rows when `filter` is empty), returning
    /// the affected-row count.
    pub async fn delete(&mut self, table: &str, filter: &Filter) -> DbResult<u64> {
        let (sql, params) = qb::build_delete(table, filter);
        self.execute(&sql, params).await?;
        Ok(self.conn.affected_rows())
    }

    /// Clean disconnect (COM_QUIT). Consuming `self` makes a second
    /// teardown unrepresentable. A failed teardown surfaces as
    /// [`DbError::Execute`]; `Connection` is only raised while connecting.
    pub async fn close(self) -> DbResult<()> {
        self.conn.disconnect().await.map_err(DbError::Execute)
    }

    async fn fetch(&mut self, sql: &str, params: Vec<Value>) -> DbResult<Vec<Row>> {
        tracing::debug!(sql, bound = params.len(), "select");
        let stmt = match self.conn.prep(sql).await {
            Ok(stmt) => stmt,
            Err(e) => return Err(self.report(DbError::Prepare(e))),
        };
        let rows: Vec<mysql_async::Row> = match self.conn.exec(&stmt, to_params(params)).await {
            Ok(rows) => rows,
            Err(e) => return Err(self.report(DbError::Execute(e))),
        };
        Ok(rows.into_iter().map(row::from_wire).collect())
    }

    async fn execute(&mut self, sql: &str, params: Vec<Value>) -> DbResult<()> {
        tracing::debug!(sql, bound = params.len(), "execute");
        let stmt = match self.conn.prep(sql).await {
            Ok(stmt) => stmt,
            Err(e) => return Err(self.report(DbError::Prepare(e))),
        };
        match self.conn.exec_drop(&stmt, to_params(params)).await {
            Ok(()) => Ok(()),
            Err(e) => Err(self.report(DbError::Execute(e))),
        }
    }

    fn report(&self, err: DbError) -> DbError {
        self.reporter.failure(&err);
        err
    }
}

fn to_params(values: Vec<Value>) -> Params {
    if values.is_empty() {
        Params::Empty
    } else {
        Params::Positional(values.into_iter().map(Into::into).collect())
    }
}
