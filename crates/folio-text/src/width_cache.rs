#![forbid(unsafe_code)]

//! Glyph-run width memo.
//!
//! Every edit re-measures the whole document, but a document is built from
//! a small alphabet, so nearly every lookup after the first page is a hit.
//! Entries are keyed by an FxHash of (font family, font size bits, text)
//! and evicted least-recently-used.
//!
//! # Example
//! ```
//! use folio_text::{Font, WidthCache};
//!
//! let mono = Font::new("mono", 20.0);
//! let mut memo = WidthCache::new(64);
//!
//! assert_eq!(memo.width_or_insert(&mono, "w", |_, _| 12.0), 12.0);
//! assert_eq!(memo.width_or_insert(&mono, "w", |_, _| 99.0), 12.0);
//! assert_eq!(memo.stats().hits, 1);
//! ```

use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxHasher;

use crate::font::Font;

/// Entries kept by [`WidthCache::default`].
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Lookup counters plus current occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to measure.
    pub misses: u64,
    /// Widths currently cached.
    pub size: usize,
    /// Most widths the cache will hold.
    pub capacity: usize,
}

impl CacheStats {
    /// Fraction of lookups served from the cache; 0 before any lookup.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }
}

/// LRU map from (font, text) to a measured width in pixels.
#[derive(Debug)]
pub struct WidthCache {
    widths: LruCache<u64, f32>,
    hits: u64,
    misses: u64,
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl WidthCache {
    /// A cache holding at most `capacity` widths (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            widths: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Cached width of `text` in `font`, measuring with `measure` on a miss.
    pub fn width_or_insert<F>(&mut self, font: &Font, text: &str, measure: F) -> f32
    where
        F: FnOnce(&Font, &str) -> f32,
    {
        let key = key(font, text);
        if let Some(&width) = self.widths.get(&key) {
            self.hits += 1;
            return width;
        }
        self.misses += 1;
        let width = measure(font, text);
        self.widths.put(key, width);
        width
    }

    /// Cached width without touching recency or counters.
    #[must_use]
    pub fn peek(&self, font: &Font, text: &str) -> Option<f32> {
        self.widths.peek(&key(font, text)).copied()
    }

    /// Drop every entry; counters are kept.
    pub fn clear(&mut self) {
        self.widths.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.widths.len(),
            capacity: self.widths.cap().get(),
        }
    }
}

fn key(font: &Font, text: &str) -> u64 {
    let mut h = FxHasher::default();
    font.hash(&mut h);
    text.hash(&mut h);
    h.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_byte(_: &Font, text: &str) -> f32 {
        text.len() as f32 * 7.0
    }

    #[test]
    fn miss_then_hit() {
        let mono = Font::new("mono", 20.0);
        let mut memo = WidthCache::new(8);
        assert!(memo.is_empty());

        assert_eq!(memo.width_or_insert(&mono, "abc", per_byte), 21.0);
        assert_eq!(memo.width_or_insert(&mono, "abc", |_, _| 0.0), 21.0);

        let stats = memo.stats();
        assert_eq!((stats.hits, stats.misses, stats.size), (1, 1, 1));
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn size_and_family_separate_entries() {
        let mut memo = WidthCache::new(8);
        let fonts = [
            Font::new("mono", 20.0),
            Font::new("mono", 21.0),
            Font::new("serif", 20.0),
        ];
        for (i, font) in fonts.iter().enumerate() {
            memo.width_or_insert(font, "x", |_, _| i as f32);
        }
        assert_eq!(memo.len(), 3);
        for (i, font) in fonts.iter().enumerate() {
            assert_eq!(memo.peek(font, "x"), Some(i as f32));
        }
    }

    #[test]
    fn least_recent_entry_is_evicted() {
        let mono = Font::new("mono", 20.0);
        let mut memo = WidthCache::new(2);
        memo.width_or_insert(&mono, "a", per_byte);
        memo.width_or_insert(&mono, "b", per_byte);
        // touching "a" makes "b" the eviction candidate; peeking would not
        memo.width_or_insert(&mono, "a", per_byte);
        let _ = memo.peek(&mono, "b");
        memo.width_or_insert(&mono, "c", per_byte);

        assert!(memo.peek(&mono, "a").is_some());
        assert_eq!(memo.peek(&mono, "b"), None);
        assert_eq!(memo.stats().capacity, 2);
    }

    #[test]
    fn zero_capacity_still_caches_one() {
        let mono = Font::new("mono", 20.0);
        let mut memo = WidthCache::new(0);
        memo.width_or_insert(&mono, "a", per_byte);
        assert_eq!(memo.stats().capacity, 1);
        assert_eq!(memo.peek(&mono, "a"), Some(7.0));
    }

    #[test]
    fn clear_keeps_counters() {
        let mono = Font::new("mono", 20.0);
        let mut memo = WidthCache::default();
        memo.width_or_insert(&mono, "a", per_byte);
        memo.clear();
        assert!(memo.is_empty());
        assert_eq!(memo.stats().misses, 1);
        assert_eq!(memo.stats().capacity, DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn empty_stats_have_zero_hit_rate() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }
}
