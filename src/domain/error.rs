//! Error types for the Bookrack plugin.
//!
//! This module defines the centralized error type [`BookrackError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Bookrack plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin execution,
/// from catalog loading to I/O failures and configuration issues. Only `Load` and
/// `Parse` failures for the status map and the library index are fatal to
/// initialization; a failing individual book resource is logged and dropped.
#[derive(Debug, Error)]
pub enum BookrackError {
    /// A catalog resource could not be fetched.
    ///
    /// Carries the resource description and the transport-level reason
    /// (e.g. a non-2xx HTTP status).
    #[error("failed to load {resource}: {reason}")]
    Load {
        /// Human-readable resource description (e.g. "library index").
        resource: String,
        /// What went wrong at the transport level.
        reason: String,
    },

    /// A fetched payload could not be parsed.
    #[error("failed to parse {resource}: {reason}")]
    Parse {
        /// Human-readable resource description.
        resource: String,
        /// Underlying deserialization error text.
        reason: String,
    },

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (trace file output).
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Bookrack operations.
///
/// This is a type alias for `std::result::Result<T, BookrackError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, BookrackError>;
