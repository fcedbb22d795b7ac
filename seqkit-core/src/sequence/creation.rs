use super::core::Sequence;

/// Create a [`Sequence`] from a list of elements, like `vec!`.
///
/// ```
/// use seqkit_core::{seq, Sequence};
///
/// let s = seq![1, 2, 3];
/// assert_eq!(s.len(), 3);
/// let empty: Sequence<i32> = seq![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::default()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Sequence::from(vec![$($item),+])
    };
}

impl<T> Sequence<T> {
    /// Create a sequence holding the given elements in order.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: items.into(),
        }
    }
}

// borrowed input is always copied
impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
