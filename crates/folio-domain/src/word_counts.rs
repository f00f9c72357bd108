//! Stem-frequency mapping with explicit zero defaults

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A frequency mapping from stem to occurrence count.
///
/// The mapping starts empty and reads missing keys as zero, so callers never
/// have to distinguish "absent" from "counted zero times". Insertion order is
/// irrelevant; the map serializes as a plain JSON object with no ordering
/// guarantee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordCounts {
    counts: HashMap<String, u32>,
}

impl WordCounts {
    /// Create an empty frequency mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the count for a stem, zero if the stem was never counted
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_domain::WordCounts;
    ///
    /// let mut counts = WordCounts::new();
    /// counts.increment("run");
    /// assert_eq!(counts.get("run"), 1);
    /// assert_eq!(counts.get("walk"), 0);
    /// ```
    pub fn get(&self, stem: &str) -> u32 {
        self.counts.get(stem).copied().unwrap_or(0)
    }

    /// Record one more occurrence of a stem
    pub fn increment(&mut self, stem: &str) {
        if let Some(count) = self.counts.get_mut(stem) {
            *count += 1;
        } else {
            self.counts.insert(stem.to_string(), 1);
        }
    }

    /// Sum of all occurrence counts
    ///
    /// This is the quantity the paragraph retention threshold is checked
    /// against.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Whether nothing has been counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(String, u32)> for WordCounts {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
