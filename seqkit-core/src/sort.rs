/// Turn a less-than predicate into one that sorts the other way around.
///
/// The arguments are swapped, so a strict order stays strict: equal
/// elements remain equal. Compare [`negate`].
pub fn sort_backward<T>(mut less: impl FnMut(&T, &T) -> bool) -> impl FnMut(&T, &T) -> bool {
    move |a: &T, b: &T| less(b, a)
}

/// The logical negation of a less-than predicate.
///
/// Negating `<` gives `>=`, which is not a strict order: with equal
/// elements present the resulting order is unspecified. Only use this on
/// sequences without equal elements; prefer [`sort_backward`].
pub fn negate<T>(mut less: impl FnMut(&T, &T) -> bool) -> impl FnMut(&T, &T) -> bool {
    move |a: &T, b: &T| !less(a, b)
}

#[cfg(test)]
mod tests {
    use crate::seq;

    use super::*;

    #[test]
    fn test_sort_backward_of_greater() {
        let s = seq![3, 2, 1, 4].sort(sort_backward(|i: &i32, j: &i32| i > j));
        assert_eq!(s, seq![1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_backward_of_less() {
        let s = seq![3, 2, 1, 4].sort(sort_backward(|i: &i32, j: &i32| i < j));
        assert_eq!(s, seq![4, 3, 2, 1]);
    }

    #[test]
    fn test_sort_backward_keeps_equal_elements_stable() {
        let s = seq![(1, 'a'), (2, 'b'), (1, 'c')]
            .sort(sort_backward(|x: &(i32, char), y: &(i32, char)| x.0 < y.0));
        assert_eq!(s, seq![(2, 'b'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn test_negate_without_duplicates() {
        let s = seq![3, 2, 1, 4].sort(negate(|i: &i32, j: &i32| i > j));
        assert_eq!(s, seq![1, 2, 3, 4]);
    }
}
