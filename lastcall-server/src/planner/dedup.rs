//! Collapsing key/value pairs that share a value.
//!
//! Several probes can land on the same scheduled run. Keyed by departure
//! and valued by arrival, each arrival should appear once, paired with the
//! latest departure that still makes it.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Keep only the largest key for each distinct value.
///
/// Pairs are sorted ascending by key (stable), then folded into a map from
/// value to key. A stored key is replaced only when the incoming key is
/// greater or equal, so among equal keys the later-sorted pair wins.
/// The result is sorted ascending by value, each value appearing once.
///
/// # Examples
///
/// ```
/// use lastcall_server::planner::largest_key_each_value;
///
/// let pairs = vec![(1, 'A'), (5, 'A'), (3, 'B')];
/// assert_eq!(largest_key_each_value(pairs), vec![(5, 'A'), (3, 'B')]);
/// ```
pub fn largest_key_each_value<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Vec<(K, V)>
where
    K: Ord,
    V: Ord,
{
    let mut pairs: Vec<(K, V)> = pairs.into_iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let mut by_value: BTreeMap<V, K> = BTreeMap::new();
    for (key, value) in pairs {
        match by_value.entry(value) {
            Entry::Vacant(slot) => {
                slot.insert(key);
            }
            Entry::Occupied(mut slot) => {
                if key >= *slot.get() {
                    slot.insert(key);
                }
            }
        }
    }

    by_value.into_iter().map(|(value, key)| (key, value)).collect()
}
