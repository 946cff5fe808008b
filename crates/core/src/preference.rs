//! Persistent preference storage

use crate::Result;
use std::collections::HashMap;

/// Key-value store that survives page reloads
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` if nothing is stored.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Store kept in memory, lost when dropped
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a single entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryPreferenceStore::new();
        assert_eq!(store.load("theme").unwrap(), None);

        store.save("theme", "light").unwrap();
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("light"));

        store.save("theme", "dark").unwrap();
        assert_eq!(store.get("theme"), Some("dark"));
    }

    #[test]
    fn test_with_entry() {
        let store = MemoryPreferenceStore::with_entry("theme", "light");
        assert_eq!(store.get("theme"), Some("light"));
        assert_eq!(store.get("volume"), None);
    }
}
