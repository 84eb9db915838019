//! Bound values and their type inference

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// A value bound to a `?` placeholder, or read back from a result row.
///
/// Inference from Rust types is centralized in the `From` impls below, so
/// every call site gets the same mapping: integers stay integers, floats
/// widen to `Double`, strings become `Text`, raw bytes stay `Bytes`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    UInt(u64),
    Double(f64),
    Text(String),
    Bytes(Vec<u8>),
}

macro_rules! value_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(i64::from(v))
            }
        }
    )*};
}

macro_rules! value_from_uint {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::UInt(u64::from(v))
            }
        }
    )*};
}

value_from_int!(i8, i16, i32, i64);
value_from_uint!(u8, u16, u32, u64);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Double(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Text(v.format(DATETIME_FORMAT).to_string())
    }
}

impl From<DateTime<Local>> for Value {
    fn from(v: DateTime<Local>) -> Self {
        Value::Text(v.format(DATETIME_FORMAT).to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Text(v.format("%Y-%m-%d").to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<Value> for mysql_async::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => mysql_async::Value::NULL,
            Value::Int(n) => mysql_async::Value::Int(n),
            Value::UInt(n) => mysql_async::Value::UInt(n),
            Value::Double(d) => mysql_async::Value::Double(d),
            Value::Text(s) => mysql_async::Value::Bytes(s.into_bytes()),
            Value::Bytes(b) => mysql_async::Value::Bytes(b),
        }
    }
}

impl From<mysql_async::Value> for Value {
    fn from(v: mysql_async::Value) -> Self {
        use mysql_async::Value as Wire;
        match v {
            Wire::NULL => Value::Null,
            Wire::Int(n) => Value::Int(n),
            Wire::UInt(n) => Value::UInt(n),
            Wire::Float(f) => Value::Double(f64::from(f)),
            Wire::Double(d) => Value::Double(d),
            // Column text arrives as bytes on the wire; non-UTF-8 columns
            // (BLOB and friends) stay binary.
            Wire::Bytes(b) => match String::from_utf8(b) {
                Ok(s) => Value::Text(s),
                Err(e) => Value::Bytes(e.into_bytes()),
            },
            Wire::Date(y, mo, d, h, mi, s, micro) => {
                let mut text = format!("{y:04}-{mo:02}-{d:02} {h:02}:{mi:02}:{s:02}");
                if micro > 0 {
                    text.push_str(&format!(".{micro:06}"));
                }
                Value::Text(text)
            }
            Wire::Time(negative, days, h, mi, s, micro) => {
                let hours = u32::from(h) + days * 24;
                let sign = if negative { "-" } else { "" };
                let mut text = format!("{sign}{hours:02}:{mi:02}:{s:02}");
                if micro > 0 {
                    text.push_str(&format!(".{micro:06}"));
                }
                Value::Text(text)
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Double(d) => write!(f, "{d}"),
            Value::Text(s) => write!(f, "'{s}'"),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock time in the `YYYY-MM-DD HH:MM:SS` shape MySQL accepts
/// for DATETIME columns.
pub(crate) fn current_timestamp() -> String {
    Local::now().format(DATETIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference_from_primitives() {
        assert_eq!(Value::from(7i32), Value::Int(7));
        assert_eq!(Value::from(-2i64), Value::Int(-2));
        assert_eq!(Value::from(7u64), Value::UInt(7));
        assert_eq!(Value::from(1.5f32), Value::Double(1.5));
        assert_eq!(Value::from(true), Value::Int(1));
        assert_eq!(Value::from("jo"), Value::Text("jo".to_string()));
        assert_eq!(
            Value::from("jo".to_string()),
            Value::Text("jo".to_string())
        );
        assert_eq!(Value::from(vec![1u8, 2]), Value::Bytes(vec![1, 2]));
    }

    #[test]
    fn test_inference_from_options() {
        assert_eq!(Value::from(Option::<i32>::None), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
    }

    #[test]
    fn test_inference_from_chrono() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(17, 5, 0)
            .unwrap();
        assert_eq!(Value::from(dt), Value::Text("2024-03-09 17:05:00".to_string()));
    }

    #[test]
    fn test_to_wire() {
        use mysql_async::Value as Wire;
        assert_eq!(Wire::from(Value::Null), Wire::NULL);
        assert_eq!(Wire::from(Value::Int(-5)), Wire::Int(-5));
        assert_eq!(
            Wire::from(Value::Text("a".to_string())),
            Wire::Bytes(b"a".to_vec())
        );
    }

    #[test]
    fn test_from_wire() {
        use mysql_async::Value as Wire;
        assert_eq!(Value::from(Wire::NULL), Value::Null);
        assert_eq!(Value::from(Wire::Float(2.0)), Value::Double(2.0));
        assert_eq!(
            Value::from(Wire::Bytes(b"text".to_vec())),
            Value::Text("text".to_string())
        );
        assert_eq!(
            Value::from(Wire::Bytes(vec![0xff, 0xfe])),
            Value::Bytes(vec![0xff, 0xfe])
        );
        assert_eq!(
            Value::from(Wire::Date(2024, 3, 9, 17, 5, 0, 0)),
            Value::Text("2024-03-09 17:05:00".to_string())
        );
        assert_eq!(
            Value::from(Wire::Time(true, 1, 2, 30, 0, 0)),
            Value::Text("-26:30:00".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Text("jo".to_string()).to_string(), "'jo'");
        assert_eq!(Value::Bytes(vec![0, 1]).to_string(), "<2 bytes>");
    }

    #[test]
    fn test_current_timestamp_shape() {
        let ts = current_timestamp();
        assert_eq!(ts.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&ts, DATETIME_FORMAT).is_ok());
    }
}
