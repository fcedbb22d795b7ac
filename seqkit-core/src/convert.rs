use crate::Sequence;

/// Convert a sequence of `T` into a sequence of `U`, element by element.
///
/// Elements are visited in ascending index order and output index `i`
/// holds `f` applied to input index `i`.
pub fn convert<T, U>(sequence: &Sequence<T>, f: impl FnMut(&T) -> U) -> Sequence<U> {
    sequence.map_into(f)
}

/// The same as [`convert`].
pub fn map<T, U>(sequence: &Sequence<T>, f: impl FnMut(&T) -> U) -> Sequence<U> {
    convert(sequence, f)
}
