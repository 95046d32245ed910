//! # In-Memory Store

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{errors::WVResult, types::WVHashMap, vocab::io::KeyValueStore};

/// In-memory [`KeyValueStore`].
///
/// Clones share the same entries; a clone handed to a second
/// tokenizer sees everything the first one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<WVHashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a key, returning its old value.
    pub fn remove(
        &self,
        key: &str,
    ) -> Option<String> {
        self.entries.write().remove(key)
    }

    /// The number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Is the store empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(
        &self,
        key: &str,
    ) -> WVResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> WVResult<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_all(
        &self,
        entries: &[(&str, String)],
    ) -> WVResult<()> {
        let mut guard = self.entries.write();
        for (key, value) in entries {
            guard.insert(key.to_string(), value.clone());
        }
        Ok(())
    }
}
