//! Column assignments for INSERT and UPDATE payloads

use serde::Serialize;

use crate::error::DbResult;
use crate::value::Value;

/// Ordered column assignments.
///
/// Order is preserved: the rendered column list and the bound values stay
/// positionally aligned.
///
/// ```
/// use myorm::Assignments;
///
/// let data = Assignments::new().set("name", "jo").set("age", 33);
/// assert!(data.contains("name"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Assignments {
    entries: Vec<(String, Value)>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to `column`.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((column.into(), value.into()));
        self
    }

    /// Serialize `value` to JSON text and assign it to `column`.
    pub fn set_json<T: Serialize>(self, column: impl Into<String>, value: &T) -> DbResult<Self> {
        let text = serde_json::to_string(value)?;
        Ok(self.set(column, text))
    }

    pub fn contains(&self, column: &str) -> bool {
        self.entries.iter().any(|(c, _)| c == column)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_preserves_order() {
        let data = Assignments::new().set("name", "jo").set("age", 33);
        let columns: Vec<_> = data.entries().iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(columns, ["name", "age"]);
        assert!(data.contains("age"));
        assert!(!data.contains("email"));
    }

    #[test]
    fn test_set_json_lands_as_text() {
        let meta = serde_json::json!({ "tags": ["a", "b"] });
        let data = Assignments::new().set_json("meta", &meta).unwrap();
        match &data.entries()[0].1 {
            Value::Text(text) => assert_eq!(text, r#"{"tags":["a","b"]}"#),
            other => panic!("expected text assignment, got {other:?}"),
        }
    }
}
