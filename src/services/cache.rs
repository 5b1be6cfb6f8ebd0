use lru::LruCache;
use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;

use crate::core::search::SearchHit;

/// Bounded memo of fuzzy search results keyed by query text
///
/// Lives inside one session, so plain interior mutability is enough. A
/// capacity of zero disables caching.
pub struct SearchCache {
    entries: Option<RefCell<LruCache<String, Rc<[SearchHit]>>>>,
}

impl SearchCache {
    pub fn new(capacity: usize) -> Self {
        let entries = NonZeroUsize::new(capacity).map(|cap| RefCell::new(LruCache::new(cap)));
        Self { entries }
    }

    pub fn get(&self, query: &str) -> Option<Rc<[SearchHit]>> {
        let entries = self.entries.as_ref()?;
        let hit = entries.borrow_mut().get(query).cloned();
        if hit.is_some() {
            tracing::trace!("Search cache hit: {:?}", query);
        }
        hit
    }

    pub fn put(&self, query: &str, hits: Rc<[SearchHit]>) {
        if let Some(entries) = &self.entries {
            if let Some((evicted, _)) = entries.borrow_mut().push(query.to_string(), hits) {
                if evicted != query {
                    tracing::trace!("Search cache evicted: {:?}", evicted);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |e| e.borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
