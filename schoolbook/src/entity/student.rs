use schoolbook_data::prelude::*;
use serde::{Deserialize, Serialize};

/// A row of the `student` table, keyed by `sno`.
///
/// Only `sno` is required; `name` and `sex` may be NULL in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub sno: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
}

impl Student {
    pub fn new(sno: impl Into<String>, name: impl Into<String>, sex: impl Into<String>) -> Self {
        Self {
            sno: sno.into(),
            name: Some(name.into()),
            sex: Some(sex.into()),
        }
    }
}

impl ParameterSource for Student {
    fn parameter(&self, name: &str) -> Option<SqlValue> {
        match name {
            "sno" => Some(self.sno.as_str().into()),
            "name" => Some(self.name.as_deref().into()),
            "sex" => Some(self.sex.as_deref().into()),
            _ => None,
        }
    }
}

impl FromMappedRow for Student {
    fn from_mapped_row(row: &MappedRow) -> Result<Self, DataError> {
        Ok(Student {
            sno: row.text("sno")?,
            name: row.optional_text("name")?,
            sex: row.optional_text("sex")?,
        })
    }
}
