//! Error types for the pomolog engine.
//!
//! This module defines the centralized error type [`PomologError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! # Error Philosophy
//!
//! There are no fatal errors in this engine. [`PomologError::Validation`] and
//! [`PomologError::Precondition`] are recoverable, user-visible, and are guaranteed
//! to leave all engine state unchanged. Corrupt persisted state is never surfaced
//! as an error at all: the storage layer absorbs it into a deterministic default.
//! Spurious or redundant transition requests (a completion signal while idle, a
//! stop while already stopped) are absorbed as no-ops, not errors.

use thiserror::Error;

/// The main error type for pomolog engine operations.
///
/// This enum consolidates all error conditions that can occur while driving the
/// engine, from rejected user input to storage and configuration failures. I/O
/// errors convert automatically via `#[from]`.
///
/// # Examples
///
/// ```
/// use pomolog::domain::PomologError;
///
/// fn confirm_empty() -> Result<(), PomologError> {
///     Err(PomologError::Validation(
///         "pick a category or type a new one".to_string(),
///     ))
/// }
/// ```
#[derive(Debug, Error)]
pub enum PomologError {
    /// User input was rejected.
    ///
    /// Occurs when a category confirmation arrives with an empty (after trimming)
    /// name. The string is the message to present to the user. No state changes.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An operation was requested before its precondition was met.
    ///
    /// Occurs when the timer is started before any category has been confirmed.
    /// The string is the message to present to the user. No state changes.
    #[error("Precondition error: {0}")]
    Precondition(String),

    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the storage backend fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the configuration file exists but cannot be parsed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for pomolog operations.
///
/// This is a type alias for `std::result::Result<T, PomologError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, PomologError>;
