/// A sequence is an ordered list of elements of one type. Sequences are
/// values: no operation changes the sequence it is called on.
///
/// The operations are spread over a few files; core.rs holds the type and
/// element access, creation.rs the ways to build one, transform.rs the
/// operations that produce new sequences.
mod batch;
mod core;
mod creation;
mod shuffle;
mod transform;

pub use self::core::Sequence;
