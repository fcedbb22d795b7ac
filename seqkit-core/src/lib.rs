//! Immutable, ordered sequences with chainable transformations.
//!
//! A [`Sequence`] never changes once built: every transformation hands back a
//! new sequence with its own storage, so the receiver stays observable after
//! any call. Type-changing transformations and grouping live in free
//! functions ([`convert`], [`group_by`]), predicates compose through the
//! [`predicate`] module.
//!
//! ```
//! use seqkit_core::{seq, predicate};
//!
//! let even = predicate::predicate(|i: &i32| i % 2 == 0);
//! let small = predicate::predicate(|i: &i32| *i < 5);
//! let s = seq![1, 2, 3, 4, 5, 6].filter(predicate::all([even, small]));
//! assert_eq!(s, seq![2, 4]);
//! ```
mod convert;
pub mod error;
mod group;
pub mod inspect;
pub mod predicate;
mod sequence;
mod sort;

pub use convert::{convert, map};
pub use error::{Error, Result};
pub use group::{group_by, Grouped};
pub use inspect::{labelled, SectionFormat};
pub use predicate::Predicate;
pub use sequence::Sequence;
pub use sort::{negate, sort_backward};
