use super::core::Sequence;

impl<T: Clone> Sequence<T> {
    /// Split into consecutive chunks of `size` elements. The last chunk may
    /// be shorter.
    ///
    /// A size of 0 gives a single chunk holding the whole sequence.
    pub fn batch(&self, size: usize) -> Sequence<Sequence<T>> {
        if size == 0 {
            return Sequence::from(vec![self.copy()]);
        }
        self.items
            .chunks(size)
            .map(Sequence::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::seq;

    use super::*;

    #[test]
    fn test_batch() {
        assert_eq!(
            seq![1, 2, 3, 4, 5].batch(2),
            seq![seq![1, 2], seq![3, 4], seq![5]]
        );
    }

    #[test]
    fn test_batch_exact() {
        assert_eq!(seq![1, 2, 3, 4].batch(2), seq![seq![1, 2], seq![3, 4]]);
    }

    #[test]
    fn test_batch_zero_is_one_chunk() {
        assert_eq!(seq![1, 2, 3].batch(0), seq![seq![1, 2, 3]]);
    }

    #[test]
    fn test_batch_larger_than_sequence() {
        assert_eq!(seq![1, 2].batch(5), seq![seq![1, 2]]);
    }

    #[test]
    fn test_batch_empty() {
        let empty: Sequence<i32> = seq![];
        assert!(empty.batch(3).is_empty());
    }
}
