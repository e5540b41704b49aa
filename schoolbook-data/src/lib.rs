pub mod error;
pub mod result_map;
pub mod statement;
pub mod value;

pub use error::DataError;
pub use result_map::{FromMappedRow, MappedRow, ResultMap, ResultMapping, ValueType};
pub use statement::{BoundStatement, Dialect, Statement, StatementKind};
pub use value::{ParameterSource, Params, SqlValue};

pub mod prelude {
    //! Re-exports of the types every mapper needs.
    pub use crate::{
        DataError, FromMappedRow, MappedRow, ParameterSource, Params, ResultMap, ResultMapping,
        SqlValue, Statement, ValueType,
    };
}
