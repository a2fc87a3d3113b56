// crates/geoexplorer-core/src/cache.rs

use crate::model::CountryRecord;
use crate::traits::CountryCache;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Process-lifetime cache backed by a `HashMap`.
///
/// Concurrent inserts for the same key are last-write-wins; the values are
/// the same record either way.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Arc<CountryRecord>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let map = self.entries.read().unwrap_or_else(|p| p.into_inner());
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl CountryCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Arc<CountryRecord>> {
        let map = self.entries.read().unwrap_or_else(|p| p.into_inner());
        map.get(key).cloned()
    }

    fn insert(&self, key: String, record: Arc<CountryRecord>) {
        let mut map = self.entries.write().unwrap_or_else(|p| p.into_inner());
        map.insert(key, record);
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|p| p.into_inner()).len()
    }
}
