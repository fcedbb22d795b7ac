/// An ordered, 0-indexed list of elements of type `T`.
///
/// Duplicates are allowed and order is significant: two sequences are equal
/// when they hold equal elements at equal positions.
///
/// Every operation that produces a sequence allocates fresh storage for it,
/// so a sequence never shares storage with the one it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence<T> {
    pub(super) items: Vec<T>,
}

impl<T> Sequence<T> {
    /// The number of elements in the sequence
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the sequence is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the element at the index, if it exists
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate over the elements in order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Hand over the elements as a `Vec`, for use by code that doesn't
    /// work with sequences.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Call `f` with the first element.
    ///
    /// Returns `false` without calling `f` if the sequence is empty.
    pub fn first(&self, f: impl FnOnce(&T)) -> bool {
        match self.items.first() {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    /// Call `f` with the last element.
    ///
    /// Returns `false` without calling `f` if the sequence is empty.
    pub fn last(&self, f: impl FnOnce(&T)) -> bool {
        match self.items.last() {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    /// The index of the last element matching the predicate.
    ///
    /// Every element is visited, and a later match replaces an earlier one.
    /// Use [`Sequence::position`] for the first match.
    pub fn index(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        let mut found = None;
        for (index, item) in self.items.iter().enumerate() {
            if predicate(item) {
                found = Some(index);
            }
        }
        found
    }

    /// The index of the first element matching the predicate.
    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(predicate)
    }

    /// Call `f` for each element in order, then return the sequence itself
    /// so a chain can continue.
    pub fn each(&self, mut f: impl FnMut(&T)) -> &Self {
        self.enumerate(|_, item| f(item))
    }

    /// Call `f` with each index and element in order, then return the
    /// sequence itself.
    pub fn enumerate(&self, mut f: impl FnMut(usize, &T)) -> &Self {
        for (index, item) in self.items.iter().enumerate() {
            f(index, item);
        }
        self
    }

    /// Run `f` on the whole sequence and return the sequence itself. This
    /// puts an observation step into a chain without breaking it.
    pub fn sub(&self, f: impl FnOnce(&Self)) -> &Self {
        f(self);
        self
    }
}

impl<T: Clone> Sequence<T> {
    /// A copy of this sequence with its own storage.
    ///
    /// This is the same as `clone`.
    pub fn copy(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.items
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}
