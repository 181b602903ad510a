use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::models::{CheckRequest, CheckResponse};

/// Recently answered checks, keyed by the full canonical JSON of the request.
///
/// A KKT check on an unchanged problem always gives the same report, so an
/// identical request can be answered without calling GLPK again. The whole
/// request text is the key, so a hit is always the same request.
pub struct ReportCache {
    inner: Option<Mutex<LruCache<String, CheckResponse>>>,
}

impl ReportCache {
    /// Capacity `0` gives a cache that never stores anything
    pub fn new(capacity: usize) -> Self {
        ReportCache {
            inner: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    /// Canonical JSON of `req`; `None` when it cannot be serialized, in
    /// which case the request is not cached
    pub fn key(req: &CheckRequest) -> Option<String> {
        // objective is a HashMap: serde_json::Value sorts object keys
        serde_json::to_value(req).ok().map(|v| v.to_string())
    }

    pub fn get(&self, key: &str) -> Option<CheckResponse> {
        self.inner.as_ref()?.lock().get(key).cloned()
    }

    pub fn put(&self, key: String, response: CheckResponse) {
        if let Some(inner) = &self.inner {
            inner.lock().put(key, response);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, |inner| inner.lock().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
