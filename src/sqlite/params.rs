use std::fmt::Write;

use rusqlite::ToSql;
use rusqlite::types::Value;

use crate::params::NamedParams;
use crate::types::RowValues;

/// Convert a single facade value to a rusqlite `Value`.
///
/// Timestamps are stored as text in `YYYY-MM-DD HH:MM:SS[.fff]` form, JSON as
/// its serialized text, booleans as 0/1 integers.
#[must_use]
pub fn row_value_to_sqlite_value(value: &RowValues) -> Value {
    match value {
        RowValues::Int(i) => Value::Integer(*i),
        RowValues::Float(f) => Value::Real(*f),
        RowValues::Text(s) => Value::Text(s.clone()),
        RowValues::Bool(b) => Value::Integer(i64::from(*b)),
        RowValues::Timestamp(dt) => {
            let mut buf = String::with_capacity(32);
            // Infallible for String
            let _ = write!(buf, "{}", dt.format("%F %T%.f"));
            Value::Text(buf)
        }
        RowValues::Null => Value::Null,
        RowValues::JSON(jval) => Value::Text(jval.to_string()),
        RowValues::Blob(bytes) => Value::Blob(bytes.clone()),
    }
}

/// Named parameters converted to rusqlite's bind representation.
///
/// Placeholder names gain the `:` prefix rusqlite expects.
pub struct SqliteParams {
    entries: Vec<(String, Value)>,
}

impl SqliteParams {
    #[must_use]
    pub fn convert(params: &NamedParams) -> Self {
        let entries = params
            .iter()
            .map(|(name, value)| (format!(":{name}"), row_value_to_sqlite_value(value)))
            .collect();
        Self { entries }
    }

    /// Borrowed `(name, value)` pairs in the shape `rusqlite` binds by name.
    #[must_use]
    pub fn as_bind_refs(&self) -> Vec<(&str, &dyn ToSql)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value as &dyn ToSql))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn scalar_conversions() {
        assert_eq!(
            row_value_to_sqlite_value(&RowValues::Int(7)),
            Value::Integer(7)
        );
        assert_eq!(
            row_value_to_sqlite_value(&RowValues::Bool(true)),
            Value::Integer(1)
        );
        assert_eq!(row_value_to_sqlite_value(&RowValues::Null), Value::Null);
        assert_eq!(
            row_value_to_sqlite_value(&RowValues::Text("x".into())),
            Value::Text("x".into())
        );
    }

    #[test]
    fn timestamp_formats_as_text() {
        let dt = NaiveDateTime::parse_from_str("2024-01-01 08:00:01", "%Y-%m-%d %H:%M:%S").unwrap();
        let Value::Text(s) = row_value_to_sqlite_value(&RowValues::Timestamp(dt)) else {
            panic!("expected text");
        };
        assert!(s.starts_with("2024-01-01 08:00:01"));
    }

    #[test]
    fn bind_names_gain_colon_prefix() {
        let params = NamedParams::single("id", RowValues::Int(1));
        let converted = SqliteParams::convert(&params);
        let refs = converted.as_bind_refs();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].0, ":id");
    }
}
