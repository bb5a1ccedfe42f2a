//! Storage layer for the persisted category list and work log.
//!
//! This module provides the key-value storage abstraction the engine persists
//! through, the JSON document model written into the single versioned slot,
//! and two backends: an atomic file store for normal use and a volatile map
//! for tests and embedders.
//!
//! # Modules
//!
//! - `backend`: [`Store`] trait abstraction for backend implementations
//! - `json`: file-per-key storage implementation with atomic writes
//! - `memory`: in-memory storage implementation
//! - `models`: the persisted document, slot key, and load/save operations

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::Store;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use models::{load_persisted, save_persisted, PersistedState, STORAGE_KEY};
