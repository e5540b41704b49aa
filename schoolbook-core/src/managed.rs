//! Generic managed resource lifecycle support.
//!
//! A [`ManagedResource`] is acquired before a guarded call and released
//! after it, with the outcome of the call:
//!
//! 1. `acquire()` obtains the resource from some state (e.g. a pool)
//! 2. the caller uses it through `&mut`
//! 3. `release(success)` finalizes it, where `success` is `true` when the
//!    guarded call returned `Ok`
//!
//! Database transactions are the main implementor: commit on success,
//! rollback otherwise.

use std::future::Future;

/// A resource with managed lifecycle (acquire/release).
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `ManagedResource<{S}>`",
    label = "this type cannot be used as a managed resource",
    note = "implement `ManagedResource<S>` with `acquire()` and `release()` methods for your type"
)]
pub trait ManagedResource<S>: Sized {
    /// Error type returned by acquire/release operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Acquires the resource from the given state.
    fn acquire(state: &S) -> impl Future<Output = Result<Self, Self::Error>> + Send;

    /// Releases the resource after the guarded call completes.
    ///
    /// - `success: true`: the call returned `Ok`
    /// - `success: false`: the call returned `Err`
    fn release(self, success: bool) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
