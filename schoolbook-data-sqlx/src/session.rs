//! Statement execution against SQLite.
//!
//! Every function runs on a borrowed connection: one checked out with
//! [`acquire`] for auto-commit calls, or `tx.as_mut()` inside a
//! [`Tx`](crate::Tx) boundary.

use schoolbook_data::{
    BoundStatement, DataError, Dialect, FromMappedRow, MappedRow, ParameterSource, ResultMap,
    SqlValue, Statement, StatementKind, ValueType,
};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteArguments, SqliteConnection, SqliteRow};
use sqlx::{Row, Sqlite};

use crate::error::SqlxErrorExt;
use crate::tx::HasPool;

/// Placeholder dialect used when rendering templates for this backend.
pub const DIALECT: Dialect = Dialect::Sqlite;

/// Check a connection out of the pool held by `state`.
pub async fn acquire<S>(state: &S) -> Result<PoolConnection<Sqlite>, DataError>
where
    S: HasPool<Sqlite> + ?Sized,
{
    state
        .pool()
        .acquire()
        .await
        .map_err(SqlxErrorExt::into_data_error)
}

/// Run an insert, update or delete statement and return the affected row count.
pub async fn execute<P>(
    conn: &mut SqliteConnection,
    statement: &Statement,
    params: &P,
) -> Result<u64, DataError>
where
    P: ParameterSource + ?Sized,
{
    let bound = statement.bind(DIALECT, params)?;
    if bound.kind == StatementKind::Select {
        return Err(wrong_kind(&bound, "a select must be run through select_one"));
    }
    tracing::debug!(
        statement = bound.id,
        kind = ?bound.kind,
        sql = %bound.sql,
        "executing statement"
    );

    let result = build_query(&bound)
        .execute(&mut *conn)
        .await
        .map_err(SqlxErrorExt::into_data_error)?;

    let affected = result.rows_affected();
    tracing::debug!(statement = bound.id, affected, "statement executed");
    Ok(affected)
}

/// Run a select expected to match at most one row.
///
/// Zero rows yield `Ok(None)`. More than one row is rejected with
/// [`DataError::TooManyRows`].
pub async fn select_one<P, T>(
    conn: &mut SqliteConnection,
    statement: &Statement,
    result_map: &ResultMap,
    params: &P,
) -> Result<Option<T>, DataError>
where
    P: ParameterSource + ?Sized,
    T: FromMappedRow,
{
    let bound = statement.bind(DIALECT, params)?;
    if bound.kind != StatementKind::Select {
        return Err(wrong_kind(&bound, "only a select can return rows"));
    }
    tracing::debug!(statement = bound.id, sql = %bound.sql, "executing query");

    let rows = build_query(&bound)
        .fetch_all(&mut *conn)
        .await
        .map_err(SqlxErrorExt::into_data_error)?;

    match rows.as_slice() {
        [] => Ok(None),
        [row] => {
            let mapped = map_row(row, result_map)?;
            T::from_mapped_row(&mapped).map(Some)
        }
        _ => Err(DataError::TooManyRows {
            statement: bound.id,
            found: rows.len(),
        }),
    }
}

/// Read every declared column of `row` with its declared type.
pub fn map_row(row: &SqliteRow, result_map: &ResultMap) -> Result<MappedRow, DataError> {
    let mut mapped = MappedRow::new(result_map.id);
    for mapping in result_map.mappings {
        let value = match mapping.value_type {
            ValueType::Text => row
                .try_get::<Option<String>, _>(mapping.column)
                .map(SqlValue::from),
            ValueType::Integer => row
                .try_get::<Option<i64>, _>(mapping.column)
                .map(SqlValue::from),
        }
        .map_err(|e| {
            DataError::mapping(result_map.id, format!("column '{}': {e}", mapping.column))
        })?;
        mapped.insert(mapping.property, value);
    }
    Ok(mapped)
}

fn wrong_kind(bound: &BoundStatement, message: &str) -> DataError {
    DataError::Template {
        statement: bound.id,
        message: format!("{:?} statement: {message}", bound.kind),
    }
}

fn build_query(bound: &BoundStatement) -> sqlx::query::Query<'_, Sqlite, SqliteArguments<'_>> {
    bound
        .values
        .iter()
        .fold(sqlx::query(&bound.sql), |query, value| match value {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Integer(i) => query.bind(*i),
            SqlValue::Text(s) => query.bind(s.as_str()),
        })
}
