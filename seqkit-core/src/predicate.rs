//! Compose predicates over elements.
//!
//! A [`Predicate`] is a boxed boolean function of one element. The
//! combinators [`all`], [`any`] and [`none`] fold a list of predicates into
//! one, and [`not`] negates a predicate. A predicate can be handed to
//! [`Sequence::filter`](crate::Sequence::filter) directly.
//!
//! ```
//! use seqkit_core::{seq, predicate::{any, predicate}};
//!
//! let small_or_even = any([predicate(|i: &i32| *i < 2), predicate(|i: &i32| i % 2 == 0)]);
//! assert_eq!(seq![1, 2, 3, 4].filter(small_or_even), seq![1, 2, 4]);
//! ```

/// A boolean function of one element.
pub type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Box a closure into a [`Predicate`].
pub fn predicate<'a, T>(f: impl Fn(&T) -> bool + 'a) -> Predicate<'a, T> {
    Box::new(f)
}

/// Holds when every predicate holds. With no predicates it always holds.
pub fn all<'a, T: 'a>(predicates: impl IntoIterator<Item = Predicate<'a, T>>) -> Predicate<'a, T> {
    let predicates = predicates.into_iter().collect::<Vec<_>>();
    Box::new(move |item: &T| predicates.iter().all(|p| p(item)))
}

/// Holds when at least one predicate holds. With no predicates it never
/// holds.
pub fn any<'a, T: 'a>(predicates: impl IntoIterator<Item = Predicate<'a, T>>) -> Predicate<'a, T> {
    let predicates = predicates.into_iter().collect::<Vec<_>>();
    Box::new(move |item: &T| predicates.iter().any(|p| p(item)))
}

/// Holds when no predicate holds. With no predicates it always holds.
pub fn none<'a, T: 'a>(predicates: impl IntoIterator<Item = Predicate<'a, T>>) -> Predicate<'a, T> {
    let predicates = predicates.into_iter().collect::<Vec<_>>();
    Box::new(move |item: &T| !predicates.iter().any(|p| p(item)))
}

pub fn not<'a, T: 'a>(p: Predicate<'a, T>) -> Predicate<'a, T> {
    Box::new(move |item: &T| !p(item))
}

#[cfg(test)]
mod tests {
    use crate::seq;

    use super::*;

    fn yes<'a>() -> Predicate<'a, i32> {
        predicate(|_| true)
    }

    fn no<'a>() -> Predicate<'a, i32> {
        predicate(|_| false)
    }

    #[test]
    fn test_any() {
        assert!(!any([no()])(&1));
        assert!(any([no(), yes()])(&1));
        assert!(any([yes()])(&1));
    }

    #[test]
    fn test_any_empty() {
        assert!(!any(Vec::<Predicate<i32>>::new())(&1));
    }

    #[test]
    fn test_all() {
        assert!(!all([no()])(&1));
        assert!(!all([no(), yes()])(&1));
        assert!(all([yes()])(&1));
        assert!(all([yes(), yes()])(&1));
    }

    #[test]
    fn test_all_empty() {
        assert!(all(Vec::<Predicate<i32>>::new())(&1));
    }

    #[test]
    fn test_none() {
        assert!(none([no()])(&1));
        assert!(!none([no(), yes()])(&1));
        assert!(!none([yes()])(&1));
        assert!(none([no(), no()])(&1));
    }

    #[test]
    fn test_none_empty() {
        assert!(none(Vec::<Predicate<i32>>::new())(&1));
    }

    #[test]
    fn test_not() {
        assert!(!not(yes())(&1));
        assert!(not(no())(&1));
    }

    #[test]
    fn test_all_short_circuits() {
        let calls = std::cell::Cell::new(0);
        let counting = predicate(|_: &i32| {
            calls.set(calls.get() + 1);
            true
        });
        assert!(!all([no(), counting])(&1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_filter_with_combined_predicates() {
        let even = predicate(|i: &i32| i % 2 == 0);
        let large = predicate(|i: &i32| *i > 2);
        let s = seq![1, 2, 3, 4, 5, 6].filter(all([even, not(large)]));
        assert_eq!(s, seq![2]);
    }

    #[test]
    fn test_predicates_can_borrow() {
        let limit = 3;
        let below = predicate(|i: &i32| *i < limit);
        assert_eq!(seq![1, 2, 3, 4].filter(below), seq![1, 2]);
    }
}
