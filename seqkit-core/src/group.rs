use std::hash::Hash;
use std::ops::Index;

use ahash::{HashMap, HashMapExt};

use crate::Sequence;

/// Elements of a sequence grouped by a derived key.
///
/// Each bucket holds its elements in the order they appeared in the source.
/// Buckets are kept in the order their key was first seen. A bucket is
/// never empty.
#[derive(Debug, Clone)]
pub struct Grouped<K, T> {
    positions: HashMap<K, usize>,
    buckets: Vec<(K, Sequence<T>)>,
}

/// Group the elements of a sequence by the key `key` derives from them.
pub fn group_by<T, K>(sequence: &Sequence<T>, mut key: impl FnMut(&T) -> K) -> Grouped<K, T>
where
    T: Clone,
    K: Eq + Hash + Clone,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut buckets: Vec<(K, Vec<T>)> = Vec::new();
    for item in sequence {
        let k = key(item);
        match positions.get(&k) {
            Some(&position) => buckets[position].1.push(item.clone()),
            None => {
                positions.insert(k.clone(), buckets.len());
                buckets.push((k, vec![item.clone()]));
            }
        }
    }
    Grouped {
        positions,
        buckets: buckets
            .into_iter()
            .map(|(k, items)| (k, items.into()))
            .collect(),
    }
}

impl<K, T> Grouped<K, T>
where
    K: Eq + Hash,
{
    /// The number of distinct keys
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The bucket for a key, if any element had that key
    pub fn get(&self, key: &K) -> Option<&Sequence<T>> {
        self.positions
            .get(key)
            .map(|&position| &self.buckets[position].1)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// The keys, in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.buckets.iter().map(|(k, _)| k)
    }

    /// The keys with their buckets, in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Sequence<T>)> {
        self.buckets.iter().map(|(k, bucket)| (k, bucket))
    }

    /// Turn into a plain hash map, dropping the key order.
    pub fn into_map(self) -> HashMap<K, Sequence<T>> {
        self.buckets.into_iter().collect()
    }
}

impl<K, T> Index<&K> for Grouped<K, T>
where
    K: Eq + Hash,
{
    type Output = Sequence<T>;

    fn index(&self, key: &K) -> &Self::Output {
        self.get(key).expect("key not present in grouping")
    }
}

impl<K, T> IntoIterator for Grouped<K, T> {
    type Item = (K, Sequence<T>);
    type IntoIter = std::vec::IntoIter<(K, Sequence<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}
