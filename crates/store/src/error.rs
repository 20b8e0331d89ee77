//! Caller-facing cart store errors.
//!
//! Only snapshot operations can fail; every other mutation is unconditional.
//! Malformed persisted state is never an error here - the store recovers by
//! substituting empty state and logging a warning.

use thiserror::Error;

/// Errors returned by [`crate::CartStore`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Snapshot save or checkout attempted with no items in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Snapshot apply attempted with nothing saved.
    #[error("no saved cart snapshot")]
    NoSnapshot,
}
