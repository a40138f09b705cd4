//! In-memory settings table
//!
//! Stands in for the process environment when an accessor must not touch
//! global state, e.g. several independently configured accessors in one
//! process, or tests running in parallel.

use std::collections::HashMap;

use clientconfig_domain::Result;
use parking_lot::RwLock;

use crate::ports::SettingsTable;

/// Settings table backed by a locked `HashMap`.
#[derive(Debug, Default)]
pub struct InMemorySettings {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: RwLock::new(entries) }
    }

    /// Copy of all entries.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl SettingsTable for InMemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
