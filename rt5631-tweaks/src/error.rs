//! Driver error type.

use core::fmt::Debug;

use thiserror_no_std::Error;

/// Errors returned by the RT5631 power, EQ and capture-gain operations.
///
/// `E` is the error of the underlying [`RegisterBus`](crate::codec::RegisterBus).
/// A bus failure aborts the handler that hit it; no transaction is retried.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error<E: Debug> {
    /// A primary register read or write failed.
    #[error("register bus transaction failed: {0:?}")]
    Bus(E),
    /// EQ mode index outside the preset table.
    #[error("EQ mode {0} is out of range")]
    InvalidMode(usize),
}

/// Result alias used throughout the driver.
pub type Result<T, E> = core::result::Result<T, Error<E>>;
