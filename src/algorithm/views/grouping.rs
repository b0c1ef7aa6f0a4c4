//! Insertion-ordered grouping and small aggregate helpers

use std::hash::Hash;

use itertools::Itertools;
use rustc_hash::FxHashMap;

/// Groups keyed by label, kept in the order labels were first seen
#[derive(Debug, Clone)]
pub struct OrderedGroups<K, V> {
    index: FxHashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> Default for OrderedGroups<K, V> {
    fn default() -> Self {
        Self {
            index: FxHashMap::default(),
            entries: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Clone, V: Default> OrderedGroups<K, V> {
    /// Create an empty grouping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulator for `key`, created on first sight
    pub fn entry(&mut self, key: K) -> &mut V {
        let next = self.entries.len();
        let idx = *self.index.entry(key.clone()).or_insert(next);
        if idx == next {
            self.entries.push((key, V::default()));
        }
        &mut self.entries[idx].1
    }

    /// Number of groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no group has been created
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Groups in first-seen order
    #[must_use]
    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

/// Running sum and count of present values
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    /// Add a value; missing values are skipped
    pub fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    /// Sum of present values, zero when there are none
    #[must_use]
    pub const fn sum(&self) -> f64 {
        self.sum
    }

    /// Number of present values
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Mean of present values, `None` when there are none
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Count distinct present identifiers
pub fn distinct_count<'a, I>(ids: I) -> usize
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    ids.into_iter().flatten().unique().count()
}

/// Most frequent present value; ties go to the value seen first
pub fn first_mode<'a, I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts: OrderedGroups<&'a str, usize> = OrderedGroups::new();
    for value in values.into_iter().flatten() {
        *counts.entry(value) += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts.into_entries() {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value.to_string())
}
