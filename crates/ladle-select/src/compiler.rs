//! Memoized selector compilation.

use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use ladle_dom::{DomTree, NodeId};

use tracing::{debug, trace};

use crate::cache::LruCache;
use crate::parser::parse_selector_list;
use crate::selector::SelectorList;

/// Capacity of the process-wide selector cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

static GLOBAL: LazyLock<SelectorCompiler> =
    LazyLock::new(|| SelectorCompiler::new(DEFAULT_CACHE_CAPACITY));

/// Counters reported by [`SelectorCompiler::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to compile.
    pub misses: u64,
    /// Selectors currently cached.
    pub entries: usize,
    /// Maximum number of cached selectors.
    pub capacity: usize,
}

struct CacheState {
    entries: LruCache<String, Arc<SelectorList>>,
    hits: u64,
    misses: u64,
}

/// Selector compiler with its own bounded cache, keyed by the exact
/// selector string.
///
/// The lock is only held around lookups and inserts, never while parsing,
/// so compiling from inside a match is safe. Matching through
/// [`matches`](Self::matches) compiles `:not()`, `:is()` and `:has()`
/// arguments through this same compiler.
pub struct SelectorCompiler {
    state: Mutex<CacheState>,
}

impl SelectorCompiler {
    /// Create a compiler caching up to `capacity` selectors (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: LruCache::new(capacity),
                hits: 0,
                misses: 0,
            }),
        }
    }

    /// Compile `selector`, reusing a cached result when there is one.
    #[must_use]
    pub fn compile(&self, selector: &str) -> Arc<SelectorList> {
        {
            let mut state = self.lock();
            if let Some(list) = state.entries.get(selector).cloned() {
                state.hits += 1;
                trace!(selector, "selector cache hit");
                return list;
            }
            state.misses += 1;
        }

        trace!(selector, "selector cache miss");
        let list = Arc::new(parse_selector_list(selector));

        let mut state = self.lock();
        if let Some((evicted, _)) = state.entries.insert(selector.to_string(), Arc::clone(&list)) {
            debug!(selector = %evicted, "evicted selector from cache");
        }
        list
    }

    /// Whether `node` matches `selector`, with every compile going through
    /// this compiler.
    #[must_use]
    pub fn matches(&self, tree: &DomTree, node: NodeId, selector: &str) -> bool {
        self.compile(selector).matches_with(tree, node, self)
    }

    /// Whether `selector` is currently cached. Does not touch recency.
    #[must_use]
    pub fn contains(&self, selector: &str) -> bool {
        self.lock().entries.contains_key(selector)
    }

    /// Drop every cached selector and reset the counters.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.hits = 0;
        state.misses = 0;
    }

    /// Current cache counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            entries: state.entries.len(),
            capacity: state.entries.capacity(),
        }
    }

    /// Maximum number of cached selectors.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock().entries.capacity()
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SelectorCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

/// The process-wide compiler used by the free functions.
#[must_use]
pub fn global() -> &'static SelectorCompiler {
    &GLOBAL
}

/// Compile through the process-wide cache.
#[must_use]
pub fn compile(selector: &str) -> Arc<SelectorList> {
    GLOBAL.compile(selector)
}

/// Empty the process-wide cache.
pub fn clear_cache() {
    GLOBAL.clear();
}

/// Counters of the process-wide cache.
#[must_use]
pub fn cache_stats() -> CacheStats {
    GLOBAL.stats()
}
