//! Result rows keyed by column name

use std::collections::HashMap;

use crate::value::Value;

/// A result row, one entry per selected column.
pub type Row = HashMap<String, Value>;

/// Typed accessors over [`Row`].
///
/// Each accessor returns `None` when the column is missing or holds a
/// different type; `int_of`/`uint_of` convert across signedness when the
/// value fits.
pub trait RowExt {
    fn str_of(&self, column: &str) -> Option<&str>;
    fn int_of(&self, column: &str) -> Option<i64>;
    fn uint_of(&self, column: &str) -> Option<u64>;
    fn double_of(&self, column: &str) -> Option<f64>;
    fn is_null(&self, column: &str) -> bool;
}

impl RowExt for Row {
    fn str_of(&self, column: &str) -> Option<&str> {
        match self.get(column) {
            Some(Value::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    fn int_of(&self, column: &str) -> Option<i64> {
        match self.get(column) {
            Some(Value::Int(n)) => Some(*n),
            Some(Value::UInt(n)) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    fn uint_of(&self, column: &str) -> Option<u64> {
        match self.get(column) {
            Some(Value::UInt(n)) => Some(*n),
            Some(Value::Int(n)) => u64::try_from(*n).ok(),
            _ => None,
        }
    }

    fn double_of(&self, column: &str) -> Option<f64> {
        match self.get(column) {
            Some(Value::Double(d)) => Some(*d),
            Some(Value::Int(n)) => Some(*n as f64),
            Some(Value::UInt(n)) => Some(*n as f64),
            _ => None,
        }
    }

    fn is_null(&self, column: &str) -> bool {
        matches!(self.get(column), Some(Value::Null))
    }
}

/// Convert a driver row into the map shape handed back to callers.
pub(crate) fn from_wire(mut row: mysql_async::Row) -> Row {
    let columns = row.columns();
    let mut out = Row::with_capacity(columns.len());
    for (i, column) in columns.iter().enumerate() {
        let wire = row
            .take::<mysql_async::Value, _>(i)
            .unwrap_or(mysql_async::Value::NULL);
        out.insert(column.name_str().into_owned(), Value::from(wire));
    }
    out
}
