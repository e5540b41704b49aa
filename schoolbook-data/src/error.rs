/// Errors that can occur in the data layer.
#[derive(Debug)]
pub enum DataError {
    /// The store rejected the statement (connectivity, constraint, syntax).
    Database(Box<dyn std::error::Error + Send + Sync>),
    /// A single-row select matched more than one row.
    TooManyRows {
        statement: &'static str,
        found: usize,
    },
    /// A `#{name}` placeholder had no value in the parameter source.
    MissingParameter {
        statement: &'static str,
        name: String,
    },
    /// The statement template itself is malformed.
    Template {
        statement: &'static str,
        message: String,
    },
    /// A row could not be shaped through its result map.
    Mapping {
        result_map: &'static str,
        message: String,
    },
}

impl DataError {
    /// Construct a `Database` variant from any error type.
    ///
    /// Used by backend crates (e.g. `schoolbook-data-sqlx`) to wrap
    /// driver-specific errors without losing the source.
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DataError::Database(Box::new(err))
    }

    pub fn mapping(result_map: &'static str, message: impl Into<String>) -> Self {
        DataError::Mapping {
            result_map,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Database(err) => write!(f, "Database error: {err}"),
            DataError::TooManyRows { statement, found } => {
                write!(f, "Statement '{statement}' expected at most one row, found {found}")
            }
            DataError::MissingParameter { statement, name } => {
                write!(f, "Statement '{statement}' has no value for parameter '{name}'")
            }
            DataError::Template { statement, message } => {
                write!(f, "Invalid template for statement '{statement}': {message}")
            }
            DataError::Mapping {
                result_map,
                message,
            } => write!(f, "Result map '{result_map}': {message}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Database(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
