//! Storage backend abstraction.
//!
//! This module defines the [`Store`] trait that abstracts over different
//! key-value persistence backends. This allows seamless switching between
//! storage implementations without changing engine logic.
//!
//! # Design Philosophy
//!
//! The trait deliberately mirrors the minimal local-store contract the engine
//! was designed against: one string value per named slot, read whole, written
//! whole. There is no partial update, no enumeration, no transaction — the
//! persisted document is replaced atomically from the caller's point of view.

use crate::domain::error::Result;

/// Abstraction over key-value storage backends.
///
/// Implementations store opaque string values under string keys. The engine
/// uses a single fixed, versioned slot key so future schema changes can
/// key-bump rather than migrate in place.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): one file per key with
///   atomic writes (default)
/// - [`MemoryStore`](crate::storage::MemoryStore): in-memory map for tests and
///   hosts without a filesystem
pub trait Store: Send {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails. Callers loading the
    /// persisted document treat read failures like an absent slot.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the value stored under `key` as one unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails. Persistence is
    /// best-effort; the engine logs write failures and continues.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}
