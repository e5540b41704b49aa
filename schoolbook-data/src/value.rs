use std::collections::HashMap;

/// A value bound to a statement parameter or read back from a mapped column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Text(String),
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&String> for SqlValue {
    fn from(value: &String) -> Self {
        SqlValue::Text(value.clone())
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Integer(i64::from(value))
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SqlValue::Null)
    }
}

/// Anything that can supply values for `#{name}` placeholders.
///
/// Entities implement this to expose their fields by name; ad-hoc argument
/// lists use [`Params`].
pub trait ParameterSource {
    fn parameter(&self, name: &str) -> Option<SqlValue>;
}

/// Named parameter bindings for statements whose input is not an entity.
///
/// ```ignore
/// let params = Params::new().with_value("sno", "777").with_value("name", "zyx");
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Params {
    values: HashMap<String, SqlValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named value.
    pub fn with_value(mut self, name: &str, value: impl Into<SqlValue>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }
}

impl ParameterSource for Params {
    fn parameter(&self, name: &str) -> Option<SqlValue> {
        self.values.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_none_becomes_null() {
        let value: SqlValue = Option::<i32>::None.into();
        assert_eq!(value, SqlValue::Null);
        let value: SqlValue = Some(4).into();
        assert_eq!(value, SqlValue::Integer(4));
    }

    #[test]
    fn params_lookup() {
        let params = Params::new().with_value("sno", "777");
        assert_eq!(params.parameter("sno"), Some(SqlValue::Text("777".into())));
        assert_eq!(params.parameter("name"), None);
    }
}
