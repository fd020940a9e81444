//! Date pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::ast::DatePattern;
use crate::error::PatternError;

/// Global cache for parsed date patterns.
static CACHE: Mutex<Option<LruCache<String, DatePattern>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => unreachable!(),
};

/// Get or parse a date pattern, using the cache.
pub fn get_or_parse(pattern: &str) -> Result<DatePattern, PatternError> {
    // A poisoned lock still holds a usable cache.
    let mut cache_guard = CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(parsed) = cache.get(pattern) {
        tracing::trace!(pattern, "date pattern cache hit");
        return Ok(parsed.clone());
    }

    tracing::trace!(pattern, "date pattern cache miss");
    let parsed = DatePattern::parse(pattern)?;
    cache.put(pattern.to_string(), parsed.clone());
    Ok(parsed)
}
