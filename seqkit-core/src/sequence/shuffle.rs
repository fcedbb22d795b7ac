use rand::seq::SliceRandom;
use rand::Rng;

use super::core::Sequence;

impl<T: Clone> Sequence<T> {
    /// A random permutation of the elements, using the thread-local
    /// generator.
    pub fn shuffle(&self) -> Self {
        self.shuffle_with(&mut rand::thread_rng())
    }

    /// A random permutation of the elements, drawn from `rng`.
    ///
    /// Pass a seeded generator to get a reproducible permutation.
    pub fn shuffle_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut items = self.items.clone();
        items.shuffle(rng);
        items.into()
    }
}
