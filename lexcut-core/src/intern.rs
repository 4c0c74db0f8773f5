//! Per-sentence string pool
//!
//! Every token string stored in a sentence is interned here, so equal
//! alternatives share one allocation and downstream code may compare with
//! `Arc::ptr_eq`. Pointers are stable for the lifetime of the pool.

use std::collections::HashSet;
use std::sync::Arc;

/// Interning pool owned by a single sentence.
#[derive(Debug, Default)]
pub struct StringPool {
    set: HashSet<Arc<str>>,
}

impl StringPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `s`, returning the shared copy.
    pub fn intern(&mut self, s: &str) -> Arc<str> {
        if let Some(existing) = self.set.get(s) {
            return Arc::clone(existing);
        }
        let shared: Arc<str> = Arc::from(s);
        self.set.insert(Arc::clone(&shared));
        shared
    }

    /// Number of distinct strings held.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
