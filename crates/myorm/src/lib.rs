//! # myorm
//!
//! A minimal async data-access layer for MySQL/MariaDB.
//!
//! ## Features
//!
//! - **Schema bootstrap**: create-if-missing database, then apply every
//!   `*.sql` script in a directory (`alters.sql` always runs last)
//! - **Typed statement descriptions**: [`Query`], [`Filter`] and
//!   [`Assignments`] instead of stringly-typed option maps
//! - **Parameterized everything**: runtime values only ever travel as `?`
//!   placeholders, including UPDATE SET values
//! - **Shaped results**: all rows, first row, or row count via
//!   [`ReturnType`]
//! - **Injected error reporting**: one [`ErrorReporter`] shared by
//!   bootstrap and executor, with development and production render modes
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use myorm::{Assignments, DbConfig, Fetched, Filter, Query, TracingReporter, bootstrap};
//!
//! # async fn run() -> myorm::DbResult<()> {
//! let config = DbConfig::from_env()?;
//! let reporter = Arc::new(TracingReporter::new(config.mode));
//! let mut db = bootstrap::init(&config, reporter).await?;
//!
//! let id = db
//!     .insert("users", &Assignments::new().set("name", "jo"))
//!     .await?;
//!
//! if let Fetched::Rows(rows) = db.select("users", &Query::new().like("name", "jo")).await? {
//!     println!("{} rows", rows.len());
//! }
//!
//! db.update("users", &Assignments::new().set("name", "joanna"), &Filter::new().eq("id", id))
//!     .await?;
//! db.delete("users", &Filter::new().eq("id", id)).await?;
//! db.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod config;
pub mod db;
pub mod error;
pub mod qb;
pub mod report;
pub mod row;
pub mod value;

pub use config::{DbConfig, ReportMode};
pub use db::{Db, Fetched};
pub use error::{DbError, DbResult};
pub use report::{ErrorReport, ErrorReporter, NoopReporter, TracingReporter};
pub use row::{Row, RowExt};
pub use value::Value;

// Re-export qb module for easy access
pub use qb::{
    Assignments, Filter, Join, JoinType, Query, ReturnType, build_delete, build_insert,
    build_select, build_update,
};
