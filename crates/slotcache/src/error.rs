//! Error types for slotcache

use std::fmt;

/// Result type alias for slotcache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction
///
/// Construction is the only fallible operation: a miss on `get` is a
/// plain `None`, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Requested capacity was zero
    ZeroCapacity,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroCapacity => write!(f, "cache capacity must be greater than 0"),
        }
    }
}

impl std::error::Error for Error {}
