use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use seqkit_core::Sequence;

use crate::common;

#[derive(Debug, Parser)]
pub(crate) struct Shuffle {
    /// input file (default stdin)
    infile: Option<PathBuf>,
    /// Seed for the random generator. The same seed and input always give
    /// the same order.
    #[arg(long)]
    seed: Option<u64>,
}

impl Shuffle {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let lines = common::input_lines(&self.infile)?;
        common::output(&self.render(&lines))
    }

    fn render(&self, lines: &Sequence<String>) -> String {
        let shuffled = match self.seed {
            Some(seed) => {
                tracing::debug!(seed, "shuffling with seeded generator");
                lines.shuffle_with(&mut Xoshiro256PlusPlus::seed_from_u64(seed))
            }
            None => lines.shuffle(),
        };
        common::render_lines(&shuffled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffle(seed: Option<u64>) -> Shuffle {
        Shuffle { infile: None, seed }
    }

    #[test]
    fn test_seeded_shuffle_is_stable() {
        let lines = common::lines("a\nb\nc\nd\ne\nf\ng\nh");
        assert_eq!(
            shuffle(Some(7)).render(&lines),
            shuffle(Some(7)).render(&lines)
        );
    }

    #[test]
    fn test_shuffle_keeps_lines() {
        let lines = common::lines("a\nb\nc");
        let rendered = shuffle(None).render(&lines);
        let mut got = rendered.lines().collect::<Vec<_>>();
        got.sort();
        assert_eq!(got, vec!["a", "b", "c"]);
    }
}
