//! Description cache
//!
//! Pure descriptions are kept per class name for the lifetime of a
//! session. Entries flagged `cached` (their package carries the
//! `.wbp-cache-descriptions` marker) survive [`DescriptionCache::invalidate_session`].
//! Contextual descriptions never enter the map.

use crate::features::description::domain::ComponentDescription;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

#[derive(Debug, Default)]
pub struct DescriptionCache {
    store: DashMap<String, Arc<ComponentDescription>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl DescriptionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, class_name: &str) -> Option<Arc<ComponentDescription>> {
        match self.store.get(class_name) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(class = class_name, "description cache hit");
                Some(Arc::clone(entry.value()))
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Stores a pure description; contextual ones are ignored.
    ///
    /// Returns the entry that ends up in the map, which is the existing
    /// one if another resolution of the same class won the race.
    pub fn insert(&self, description: Arc<ComponentDescription>) -> Arc<ComponentDescription> {
        if !description.key.is_pure() {
            return description;
        }
        let entry = self
            .store
            .entry(description.key.component_class().to_string())
            .or_insert(description);
        Arc::clone(entry.value())
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.store.contains_key(class_name)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    /// Ends a session: drops every entry not marked `cached`.
    pub fn invalidate_session(&self) {
        let before = self.store.len();
        self.store.retain(|_, description| description.cached);
        debug!(
            dropped = before - self.store.len(),
            kept = self.store.len(),
            "description session invalidated"
        );
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.store.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::description::domain::ComponentDescriptionKey;
    use crate::shared::models::ClassInfo;

    fn description(name: &str, cached: bool) -> Arc<ComponentDescription> {
        let mut description =
            ComponentDescription::new(ComponentDescriptionKey::new(name), Arc::new(ClassInfo::new(name)));
        description.cached = cached;
        Arc::new(description)
    }

    #[test]
    fn test_insert_and_get() {
        let cache = DescriptionCache::new();
        assert!(cache.get("a.Button").is_none());

        let stored = cache.insert(description("a.Button", false));
        let again = cache.get("a.Button").unwrap();
        assert!(Arc::ptr_eq(&stored, &again));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_first_insert_wins() {
        let cache = DescriptionCache::new();
        let first = cache.insert(description("a.Button", false));
        let second = cache.insert(description("a.Button", false));
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_contextual_not_stored() {
        let cache = DescriptionCache::new();
        let host = ComponentDescriptionKey::new("a.Factory");
        let key = ComponentDescriptionKey::contextual("a.Button", &host, "create__");
        let contextual = Arc::new(ComponentDescription::new(key, Arc::new(ClassInfo::new("a.Button"))));
        cache.insert(contextual);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalidate_session_keeps_cached() {
        let cache = DescriptionCache::new();
        cache.insert(description("a.Button", true));
        cache.insert(description("b.Panel", false));
        cache.invalidate_session();

        assert!(cache.contains("a.Button"));
        assert!(!cache.contains("b.Panel"));
        assert_eq!(cache.len(), 1);
    }
}
