//! Equality conditions for WHERE clauses

use crate::value::Value;

/// Ordered equality conditions, rendered as `col = ?` joined with ` AND `.
///
/// Insertion order is preserved so the emitted placeholders and the bound
/// values always line up.
///
/// ```
/// use myorm::Filter;
///
/// let filter = Filter::new().eq("status", "active").eq("age", 33);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pairs: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `column = value` condition.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.pairs.push((column.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render the conditions, appending their values to `params`.
    pub(crate) fn render(&self, params: &mut Vec<Value>) -> String {
        let mut sql = String::new();
        for (i, (column, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                sql.push_str(" AND ");
            }
            sql.push_str(column);
            sql.push_str(" = ?");
            params.push(value.clone());
        }
        sql
    }
}
