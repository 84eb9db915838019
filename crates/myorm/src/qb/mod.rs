//! Statement builders
//!
//! Each operation is described with plain data and rendered to SQL text
//! with `?` placeholders plus the values to bind, in placeholder order.
//! Table and column names are trusted identifiers supplied by the
//! application; nothing here escapes them. Runtime values always travel as
//! parameters, never as SQL text.

mod assign;
mod delete;
mod filter;
mod insert;
mod select;
mod update;

pub use assign::Assignments;
pub use delete::build_delete;
pub use filter::Filter;
pub use insert::build_insert;
pub use select::{Join, JoinType, Query, ReturnType, build_select};
pub use update::build_update;

#[cfg(test)]
mod tests;
