//! Caller-owned memoization of parsed reference ranges.

use std::collections::HashMap;

use labref_model::{RangeDescriptor, RangeStatus};
use tracing::{debug, trace};

use crate::classify::classify;
use crate::numeric::Measurement;
use crate::parser::parse_range;

/// Parsed descriptors keyed by the raw reference text.
///
/// Parsing is pure, so a report that repeats the same reference string on
/// many rows can keep one of these for its lifetime. Unparseable text is
/// cached too.
#[derive(Debug, Default)]
pub struct RangeCache {
    entries: HashMap<String, Option<RangeDescriptor>>,
    hits: u64,
    misses: u64,
}

impl RangeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached descriptor for `text`, parsing it on first use.
    pub fn get_or_parse(&mut self, text: &str) -> Option<&RangeDescriptor> {
        if self.entries.contains_key(text) {
            self.hits += 1;
            trace!(hits = self.hits, "reference range cache hit");
        } else {
            self.misses += 1;
            let parsed = parse_range(text);
            debug!(
                structured = parsed.is_some(),
                cached = self.entries.len() + 1,
                "reference range cached"
            );
            self.entries.insert(text.to_string(), parsed);
        }
        self.entries.get(text).and_then(Option::as_ref)
    }

    /// Classify `value` against the cached descriptor for `reference`.
    pub fn classify<V>(&mut self, value: &V, reference: &str) -> RangeStatus
    where
        V: Measurement + ?Sized,
    {
        let descriptor = self.get_or_parse(reference);
        classify(value, descriptor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_once() {
        let mut cache = RangeCache::new();
        assert!(cache.get_or_parse("13 - 17").is_some());
        assert!(cache.get_or_parse("13 - 17").is_some());
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_caches_unparseable_text() {
        let mut cache = RangeCache::new();
        assert!(cache.get_or_parse("Negative").is_none());
        assert!(cache.get_or_parse("Negative").is_none());
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn test_classify_matches_uncached() {
        let mut cache = RangeCache::new();
        for value in ["12", "13", "15", "17", "18", "Trace"] {
            assert_eq!(
                cache.classify(value, "13 - 17 g/dL"),
                classify(value, parse_range("13 - 17 g/dL").as_ref())
            );
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cache = RangeCache::new();
        cache.get_or_parse("< 40");
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 0);
    }
}
