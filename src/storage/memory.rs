//! In-memory storage backend.
//!
//! A `HashMap`-backed [`Store`] for tests and for embedding hosts that bring
//! their own persistence (or none at all). Contents vanish when the store is
//! dropped.

use crate::domain::error::Result;
use crate::storage::backend::Store;
use std::collections::HashMap;

/// Volatile key-value store.
///
/// # Examples
///
/// ```
/// use pomolog::storage::{MemoryStore, Store};
///
/// let mut store = MemoryStore::new();
/// store.set_item("slot", "value")?;
/// assert_eq!(store.get_item("slot")?.as_deref(), Some("value"));
/// # Ok::<(), pomolog::domain::PomologError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_as_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("missing").unwrap(), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut store = MemoryStore::new();
        store.set_item("k", "a").unwrap();
        store.set_item("k", "b").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("b"));
    }
}
