//! # schoolbook-data-sqlx: SQLx backend for schoolbook mappers
//!
//! This crate executes the [`Statement`](schoolbook_data::Statement) and
//! [`ResultMap`](schoolbook_data::ResultMap) constants declared by mappers
//! against SQLite through [SQLx](https://github.com/launchbadge/sqlx).
//!
//! # What's in this crate
//!
//! | Item | Description |
//! |------|-------------|
//! | [`acquire`] | Check a connection out of a pool or anything implementing `HasPool` |
//! | [`execute`] | Bind and run an insert/update/delete, returning the affected row count |
//! | [`select_one`] | Bind and run a select expected to return at most one row |
//! | [`Tx`] | Transaction wrapper implementing `ManagedResource` (commit or rollback) |
//! | [`HasPool`] | Trait for components that contain a database pool |
//! | [`SqlxErrorExt`] | Extension trait to convert `sqlx::Error` → `DataError` |
//!
//! # Error bridging
//!
//! Due to Rust's orphan rules, `From<sqlx::Error> for DataError` can't be
//! implemented here. Use the [`SqlxErrorExt`] trait instead:
//!
//! ```ignore
//! use schoolbook_data_sqlx::SqlxErrorExt;
//!
//! sqlx::query("DELETE FROM student")
//!     .execute(&pool)
//!     .await
//!     .map_err(|e| e.into_data_error())?;
//! ```

pub mod error;
pub mod session;
pub mod tx;

pub use error::SqlxErrorExt;
pub use session::{acquire, execute, map_row, select_one, DIALECT};
pub use tx::{HasPool, Tx};
