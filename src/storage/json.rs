//! File-based storage backend.
//!
//! This module provides a simple, human-readable storage implementation that
//! keeps one file per slot key under a data directory. It uses atomic file
//! writes (write-to-temp + rename) to prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads the whole slot into memory
//! - **Write**: O(n) - rewrites the whole slot
//! - **Best for**: single small document, infrequent writes
//!
//! Exactly the shape this engine needs: the persisted document is a few
//! kilobytes rewritten after each user-visible mutation.

use crate::domain::error::{PomologError, Result};
use crate::storage::backend::Store;
use std::path::{Path, PathBuf};

/// File-per-key storage backend.
///
/// Each slot key `k` is stored as `<dir>/k.json`. Writes go to a temporary
/// file first and are renamed into place, so a crash mid-write never leaves a
/// torn slot — the reader sees either the old document or the new one.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It's designed to be used from the
/// single event-processing context that owns the engine state.
#[derive(Debug)]
pub struct JsonFileStore {
    /// Directory holding one file per slot key.
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates or opens a file store rooted at `dir`.
    ///
    /// The directory (and its parents) are created if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pomolog::storage::JsonFileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFileStore::new(PathBuf::from("/tmp/pomolog"))?;
    /// # Ok::<(), pomolog::domain::PomologError>(())
    /// ```
    pub fn new(dir: PathBuf) -> Result<Self> {
        tracing::debug!(dir = ?dir, "initializing file store");
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Returns the file path backing `key`.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        // Slot keys are fixed constants, but refuse anything that could
        // escape the data directory.
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(PomologError::Storage(format!("invalid slot key: {key}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    /// Returns the directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Store for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let _span = tracing::debug_span!("file_get_item", key = %key).entered();

        let path = self.path_for(key)?;
        if !path.exists() {
            tracing::debug!("slot file absent");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)?;
        tracing::debug!(bytes = contents.len(), "slot read");
        Ok(Some(contents))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let _span =
            tracing::debug_span!("file_set_item", key = %key, bytes = value.len()).entered();

        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, value)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &path)?;

        tracing::debug!("slot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_slot_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.get_item("pomodoro-log-v1").unwrap(), None);
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().to_path_buf()).unwrap();

        store.set_item("pomodoro-log-v1", r#"{"categories":[],"logs":[]}"#).unwrap();
        assert_eq!(
            store.get_item("pomodoro-log-v1").unwrap().as_deref(),
            Some(r#"{"categories":[],"logs":[]}"#)
        );
    }

    #[test]
    fn overwrite_replaces_the_whole_slot() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().to_path_buf()).unwrap();

        store.set_item("k", "first").unwrap();
        store.set_item("k", "second").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn no_temporary_file_is_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().to_path_buf()).unwrap();

        store.set_item("k", "value").unwrap();
        assert!(dir.path().join("k.json").exists());
        assert!(!dir.path().join("k.tmp").exists());
    }

    #[test]
    fn path_escaping_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().to_path_buf()).unwrap();
        assert!(store.set_item("../escape", "v").is_err());
        assert!(store.get_item("a/b").is_err());
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deeply").join("nested");
        let store = JsonFileStore::new(nested.clone()).unwrap();
        assert!(nested.exists());
        assert_eq!(store.dir(), nested.as_path());
    }
}
