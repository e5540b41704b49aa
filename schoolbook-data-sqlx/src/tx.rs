//! Transaction wrapper with acquire/release lifecycle.
//!
//! Provides [`Tx`], [`HasPool`], and a blanket [`ManagedResource`]
//! implementation so a service can open a transactional boundary around a
//! mapper call:
//!
//! ```ignore
//! let mut tx = Tx::begin(&self.pool).await?;
//! let result = self.mapper.query_student_by_sno(tx.as_mut(), sno).await;
//! tx.finish(result.is_ok()).await?;
//! result
//! ```

use schoolbook_core::managed::ManagedResource;
use schoolbook_data::DataError;
use sqlx::{Database, Pool, Transaction};
use std::ops::{Deref, DerefMut};

use crate::error::SqlxErrorExt;

/// Trait for components that hold a database pool.
///
/// Implemented for `Pool<DB>` itself, so a bare pool is a valid state.
pub trait HasPool<DB: Database> {
    fn pool(&self) -> &Pool<DB>;
}

impl<DB: Database> HasPool<DB> for Pool<DB> {
    fn pool(&self) -> &Pool<DB> {
        self
    }
}

/// A wrapper around SQLx [`Transaction`].
///
/// - Acquired (begun) before the guarded call
/// - Committed by `release(true)`
/// - Rolled back on drop, including `release(false)`
pub struct Tx<'a, DB: Database>(pub Transaction<'a, DB>);

impl<'a, DB: Database> Deref for Tx<'a, DB> {
    type Target = Transaction<'a, DB>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, DB: Database> DerefMut for Tx<'a, DB> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a, DB: Database> Tx<'a, DB> {
    /// Unwraps the `Tx` into the inner `Transaction`.
    pub fn into_inner(self) -> Transaction<'a, DB> {
        self.0
    }

    /// Returns a mutable reference to the underlying connection.
    pub fn as_mut(&mut self) -> &mut <DB as Database>::Connection {
        &mut *self.0
    }
}

impl<DB: Database> Tx<'static, DB> {
    /// Begin a transaction from anything holding a pool.
    pub async fn begin<S>(state: &S) -> Result<Self, DataError>
    where
        S: HasPool<DB> + Send + Sync,
    {
        <Self as ManagedResource<S>>::acquire(state).await
    }

    /// Commit when `success` is true, roll back otherwise.
    pub async fn finish(self, success: bool) -> Result<(), DataError> {
        <Self as ManagedResource<Pool<DB>>>::release(self, success).await
    }
}

impl<S, DB> ManagedResource<S> for Tx<'static, DB>
where
    DB: Database,
    S: HasPool<DB> + Send + Sync,
{
    type Error = DataError;

    async fn acquire(state: &S) -> Result<Self, Self::Error> {
        let tx = state
            .pool()
            .begin()
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
        tracing::trace!("transaction started");
        Ok(Tx(tx))
    }

    async fn release(self, success: bool) -> Result<(), Self::Error> {
        if success {
            self.into_inner()
                .commit()
                .await
                .map_err(SqlxErrorExt::into_data_error)?;
            tracing::trace!("transaction committed");
        } else {
            // Dropping the transaction rolls it back.
            tracing::debug!("transaction rolled back");
        }
        Ok(())
    }
}
