//! Frequency-counting helpers shared by the reducers.
//!
//! Mode tie-breaking is deliberately deterministic: ordered numeric keys
//! resolve ties to the smallest key, string-like keys resolve ties to the
//! first-encountered key in dataset order.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Most frequent key and its count; ties resolve to the smallest key.
pub fn mode_min_key<K, I>(keys: I) -> Option<(K, usize)>
where
    K: Ord + Copy,
    I: IntoIterator<Item = K>,
{
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }

    // Ascending key iteration, strict improvement only: on a count tie the
    // smallest key wins.
    let mut best: Option<(K, usize)> = None;
    for (key, count) in counts {
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((key, count)),
        }
    }
    best
}

/// Most frequent key and its count; ties resolve to the key encountered
/// first in iteration order.
pub fn mode_first_seen<K, I>(keys: I) -> Option<(K, usize)>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let mut best: Option<(K, usize, usize)> = None;
    for (key, count, first) in frequency_table(keys) {
        let better = match &best {
            None => true,
            Some((_, best_count, best_first)) => {
                count > *best_count || (count == *best_count && first < *best_first)
            }
        };
        if better {
            best = Some((key, count, first));
        }
    }
    best.map(|(key, count, _)| (key, count))
}

/// Frequency table in descending count order; ties keep the order the
/// keys were first encountered in.
pub fn counts_desc<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let mut table = frequency_table(keys);
    table.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    table.into_iter().map(|(key, count, _)| (key, count)).collect()
}

/// (key, count, index of first occurrence) for every distinct key.
fn frequency_table<K, I>(keys: I) -> Vec<(K, usize, usize)>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let mut counts: HashMap<K, (usize, usize)> = HashMap::new();
    for (index, key) in keys.into_iter().enumerate() {
        counts.entry(key).or_insert((0, index)).0 += 1;
    }
    counts
        .into_iter()
        .map(|(key, (count, first))| (key, count, first))
        .collect()
}
