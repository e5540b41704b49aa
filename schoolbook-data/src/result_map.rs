use std::collections::HashMap;

use crate::error::DataError;
use crate::value::SqlValue;

/// The declared type a column is read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Text,
    Integer,
}

/// One `column -> property` correspondence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultMapping {
    pub property: &'static str,
    pub column: &'static str,
    pub value_type: ValueType,
}

impl ResultMapping {
    pub const fn new(property: &'static str, column: &'static str, value_type: ValueType) -> Self {
        Self {
            property,
            column,
            value_type,
        }
    }
}

/// Explicit result mapping for a select statement.
///
/// # Example
///
/// ```ignore
/// const TEACHER: ResultMap = ResultMap::new("teacher", &[
///     ResultMapping::new("id", "id", ValueType::Integer),
///     ResultMapping::new("to_class", "toClass", ValueType::Text),
/// ]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultMap {
    pub id: &'static str,
    pub mappings: &'static [ResultMapping],
}

impl ResultMap {
    pub const fn new(id: &'static str, mappings: &'static [ResultMapping]) -> Self {
        Self { id, mappings }
    }
}

/// A row read through a [`ResultMap`], keyed by property name.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedRow {
    result_map: &'static str,
    values: HashMap<&'static str, SqlValue>,
}

impl MappedRow {
    pub fn new(result_map: &'static str) -> Self {
        Self {
            result_map,
            values: HashMap::new(),
        }
    }

    pub fn insert(&mut self, property: &'static str, value: SqlValue) {
        self.values.insert(property, value);
    }

    /// Read a non-null text property.
    pub fn text(&self, property: &str) -> Result<String, DataError> {
        self.optional_text(property)?.ok_or_else(|| {
            DataError::mapping(self.result_map, format!("property '{property}' is NULL"))
        })
    }

    pub fn optional_text(&self, property: &str) -> Result<Option<String>, DataError> {
        match self.require(property)? {
            SqlValue::Null => Ok(None),
            SqlValue::Text(s) => Ok(Some(s.clone())),
            SqlValue::Integer(_) => Err(DataError::mapping(
                self.result_map,
                format!("property '{property}' is not text"),
            )),
        }
    }

    pub fn optional_integer(&self, property: &str) -> Result<Option<i64>, DataError> {
        match self.require(property)? {
            SqlValue::Null => Ok(None),
            SqlValue::Integer(i) => Ok(Some(*i)),
            SqlValue::Text(_) => Err(DataError::mapping(
                self.result_map,
                format!("property '{property}' is not an integer"),
            )),
        }
    }

    /// Read an integer property that must fit in an `i32`.
    pub fn optional_int32(&self, property: &str) -> Result<Option<i32>, DataError> {
        self.optional_integer(property)?
            .map(|value| {
                i32::try_from(value).map_err(|_| {
                    DataError::mapping(
                        self.result_map,
                        format!("property '{property}' value {value} is out of range for i32"),
                    )
                })
            })
            .transpose()
    }

    fn require(&self, property: &str) -> Result<&SqlValue, DataError> {
        self.values.get(property).ok_or_else(|| {
            DataError::mapping(self.result_map, format!("property '{property}' is not mapped"))
        })
    }
}

/// Build an entity from a [`MappedRow`].
pub trait FromMappedRow: Sized {
    fn from_mapped_row(row: &MappedRow) -> Result<Self, DataError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> MappedRow {
        let mut row = MappedRow::new("teacher");
        row.insert("id", SqlValue::Integer(3));
        row.insert("name", SqlValue::Text("tang".into()));
        row.insert("age", SqlValue::Null);
        row.insert("big", SqlValue::Integer(i64::MAX));
        row
    }

    #[test]
    fn reads_typed_properties() {
        let row = row();
        assert_eq!(row.optional_int32("id").unwrap(), Some(3));
        assert_eq!(row.text("name").unwrap(), "tang");
        assert_eq!(row.optional_int32("age").unwrap(), None);
    }

    #[test]
    fn null_in_required_property_is_an_error() {
        let err = row().text("age").unwrap_err();
        assert!(matches!(err, DataError::Mapping { result_map: "teacher", .. }));
    }

    #[test]
    fn unmapped_and_mistyped_properties_are_errors() {
        let row = row();
        assert!(row.text("toClass").is_err());
        assert!(row.optional_integer("name").is_err());
        assert!(row.optional_int32("big").is_err());
    }
}
