use std::cmp::Ordering;
use std::hash::Hash;

use ahash::{HashSet, HashSetExt};

use crate::error;

use super::core::Sequence;

// turn a strict less-than predicate into an ordering; elements where neither
// is less than the other are equal
fn less_to_ordering<T>(
    less: &mut impl FnMut(&T, &T) -> bool,
    a: &T,
    b: &T,
) -> Ordering {
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl<T> Sequence<T> {
    /// Apply `f` to each element, producing a sequence of the same length.
    ///
    /// The element type stays the same; see [`Sequence::map_into`] or
    /// [`crate::convert`] to produce another type.
    pub fn map(&self, f: impl FnMut(&T) -> T) -> Self {
        self.items.iter().map(f).collect()
    }

    /// Apply `f` to each element, producing a sequence of another type.
    pub fn map_into<U>(&self, f: impl FnMut(&T) -> U) -> Sequence<U> {
        self.items.iter().map(f).collect()
    }
}

impl<T: Clone> Sequence<T> {
    /// This sequence followed by each of `others`, in order.
    pub fn chain<'a>(&self, others: impl IntoIterator<Item = &'a Sequence<T>>) -> Self
    where
        T: 'a,
    {
        let others = others.into_iter().collect::<Vec<_>>();
        let size = self.len() + others.iter().map(|other| other.len()).sum::<usize>();
        let mut items = Vec::with_capacity(size);
        items.extend_from_slice(&self.items);
        for other in others {
            items.extend_from_slice(&other.items);
        }
        items.into()
    }

    /// Repeat the elements until exactly `size` elements are produced.
    ///
    /// Cycling an empty sequence gives an empty sequence, whatever the size.
    pub fn cycle(&self, size: usize) -> Self {
        if self.is_empty() {
            return Self::default();
        }
        self.items.iter().cycle().take(size).cloned().collect()
    }

    /// The elements for which the predicate holds, in their original order.
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        self.items
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect()
    }

    /// The first `n` elements.
    ///
    /// Fails if `n` is larger than the length of the sequence.
    pub fn take(&self, n: usize) -> error::Result<Self> {
        if n > self.len() {
            return Err(error::Error::OutOfBounds {
                index: n,
                len: self.len(),
            });
        }
        Ok(self.items[..n].into())
    }

    /// The longest prefix for which the predicate holds for every element.
    pub fn take_until(&self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        self.items
            .iter()
            .take_while(|item| predicate(*item))
            .cloned()
            .collect()
    }

    /// Drop elements whose key was seen before; the first occurrence wins.
    pub fn unique<K>(&self, mut key: impl FnMut(&T) -> K) -> Self
    where
        K: Eq + Hash,
    {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .filter(|item| seen.insert(key(*item)))
            .cloned()
            .collect()
    }

    /// Drop elements equal to one seen before.
    pub fn dedup(&self) -> Self
    where
        T: Eq + Hash,
    {
        self.unique(|item| item.clone())
    }

    /// Sort by a strict less-than predicate.
    ///
    /// The sort is stable. `less` has to be a strict weak order; a predicate
    /// like `<=` that holds both ways for equal elements makes the order of
    /// those elements unspecified.
    pub fn sort(&self, mut less: impl FnMut(&T, &T) -> bool) -> Self {
        let mut items = self.items.clone();
        items.sort_by(|a, b| less_to_ordering(&mut less, a, b));
        items.into()
    }

    /// Sort by a key extracted from each element. The sort is stable.
    pub fn sort_by_key<K: Ord>(&self, key: impl FnMut(&T) -> K) -> Self {
        let mut items = self.items.clone();
        items.sort_by_key(key);
        items.into()
    }

    /// The elements in reverse order.
    pub fn reverse(&self) -> Self {
        self.items.iter().rev().cloned().collect()
    }

    /// Split into `self[..index]` and `self[index..]`.
    ///
    /// Fails if `index` is larger than the length of the sequence.
    pub fn split_at(&self, index: usize) -> error::Result<(Self, Self)> {
        if index > self.len() {
            return Err(error::Error::OutOfBounds {
                index,
                len: self.len(),
            });
        }
        let (head, tail) = self.items.split_at(index);
        Ok((head.into(), tail.into()))
    }
}
