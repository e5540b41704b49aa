use schoolbook_data::prelude::*;
use serde::{Deserialize, Serialize};

/// A row of the `teacher` table.
///
/// `id` is assigned by the store on insert, so it is `None` on a record that
/// has not been saved yet. The other columns are nullable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub to_class: Option<String>,
}

impl Teacher {
    pub fn new(name: impl Into<String>, age: i32, to_class: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            age: Some(age),
            to_class: Some(to_class.into()),
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

impl ParameterSource for Teacher {
    fn parameter(&self, name: &str) -> Option<SqlValue> {
        match name {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_deref().into()),
            "age" => Some(self.age.into()),
            "toClass" => Some(self.to_class.as_deref().into()),
            _ => None,
        }
    }
}

impl FromMappedRow for Teacher {
    fn from_mapped_row(row: &MappedRow) -> Result<Self, DataError> {
        Ok(Teacher {
            id: row.optional_int32("id")?,
            name: row.optional_text("name")?,
            age: row.optional_int32("age")?,
            to_class: row.optional_text("to_class")?,
        })
    }
}
