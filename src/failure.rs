//! The Failure and Result types of this library.
//!
//! Constructing a set may fail, if the requested capacity cannot hold a single
//! bucket. The cause of the error is then represented as a `Failure`.
//!
//! All faillible constructors come in two versions:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and panics in case of error.
//!
//! Inserting a value already present, or discarding a value absent, is not a failure: both are reported as a plain
//! `false` by the respective methods.

use thiserror::Error;

use super::root::result;

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Error, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Failure {
    /// The requested capacity is 0, whereas at least 1 bucket is required to hash into.
    #[error("capacity must be at least 1 bucket")]
    ZeroCapacity,
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;

#[cold]
#[inline(never)]
pub(crate) fn panic_from_failure(failure: Failure) -> ! {
    panic!("{}", failure);
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn failure_display() {
        assert_eq!("capacity must be at least 1 bucket", format!("{}", Failure::ZeroCapacity));
    }

    #[test]
    #[should_panic(expected = "capacity must be at least 1 bucket")]
    fn failure_panic() {
        panic_from_failure(Failure::ZeroCapacity);
    }
}
