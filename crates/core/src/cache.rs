//! Bounded, shared cache of disease information.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use lru::LruCache;

use crate::sections::SectionedInfo;

/// Least-recently-used map from disease label to its sectioned info.
///
/// Keys are the classifier's labels, compared case-sensitively. Entries live
/// for the process lifetime unless evicted by capacity.
#[derive(Debug)]
pub struct DiseaseInfoCache {
    entries: Mutex<LruCache<String, SectionedInfo>>,
}

impl DiseaseInfoCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Returns a copy of the cached entry, marking it most recently used.
    pub fn get(&self, disease_name: &str) -> Option<SectionedInfo> {
        self.lock().get(disease_name).cloned()
    }

    pub fn insert(&self, disease_name: &str, info: SectionedInfo) {
        self.lock().put(disease_name.to_string(), info);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // The cache only holds derived data, so a panic mid-update cannot leave it
    // in a state worth refusing to read.
    fn lock(&self) -> MutexGuard<'_, LruCache<String, SectionedInfo>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(description: &str) -> SectionedInfo {
        SectionedInfo {
            description: description.into(),
            ..SectionedInfo::default()
        }
    }

    fn cache(capacity: usize) -> DiseaseInfoCache {
        DiseaseInfoCache::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn test_insert_then_get() {
        let cache = cache(2);
        assert!(cache.get("Eczema").is_none());
        cache.insert("Eczema", info("itchy"));
        assert_eq!(cache.get("Eczema").unwrap().description, "itchy");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let cache = cache(2);
        cache.insert("Eczema", info("itchy"));
        assert!(cache.get("eczema").is_none());
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let cache = cache(2);
        cache.insert("Acne", info("a"));
        cache.insert("Eczema", info("e"));
        // Touch Acne so Eczema becomes the eviction candidate.
        assert!(cache.get("Acne").is_some());
        cache.insert("Psoriasis", info("p"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("Acne").is_some());
        assert!(cache.get("Eczema").is_none());
        assert!(cache.get("Psoriasis").is_some());
    }

    #[test]
    fn test_concurrent_inserts_stay_within_capacity() {
        let cache = std::sync::Arc::new(cache(8));
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    let name = format!("disease-{i}");
                    cache.insert(&name, info(&name));
                    cache.get(&name);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 8);
    }
}
