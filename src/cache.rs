// src/cache.rs
//! Session-scoped memoization of computed metrics.
//!
//! One cache lives for one comparison session and is explicitly owned by
//! whoever drives the engine, never held as ambient global state, so tests
//! can construct a fresh cache each time.

use std::collections::HashMap;

use serde::Serialize;

use crate::metrics::Metrics;

/// Joins the two key halves. Names are assumed not to contain this
/// sequence; a dataset or format name that does can collide with another
/// key (e.g. `("a::b", "c")` vs `("a", "b::c")`). The limitation is
/// documented rather than escaped away.
const KEY_SEPARATOR: &str = "::";

/// Observability snapshot of one cache's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub requests: u64,
    pub hits: u64,
}

/// Memoization table keyed by `(dataset, format)`.
#[derive(Debug, Default)]
pub struct MetricsCache {
    entries: HashMap<String, Metrics>,
    requests: u64,
    hits: u64,
}

impl MetricsCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a stored metrics entry. Every call bumps `requests`;
    /// a present entry additionally bumps `hits`.
    pub fn get(&mut self, dataset: &str, format: &str) -> Option<Metrics> {
        self.requests += 1;
        let found = self.entries.get(&Self::key(dataset, format)).copied();
        if found.is_some() {
            self.hits += 1;
        }
        found
    }

    /// Inserts or overwrites. Counters are untouched.
    pub fn set(&mut self, dataset: &str, format: &str, metrics: Metrics) {
        self.entries.insert(Self::key(dataset, format), metrics);
    }

    /// Number of distinct stored keys.
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.size(),
            requests: self.requests,
            hits: self.hits,
        }
    }

    fn key(dataset: &str, format: &str) -> String {
        format!("{dataset}{KEY_SEPARATOR}{format}")
    }
}
