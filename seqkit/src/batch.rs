use std::path::PathBuf;

use clap::Parser;
use seqkit_core::Sequence;

use crate::common;

#[derive(Debug, Parser)]
pub(crate) struct Batch {
    /// Number of lines per batch. With 0, all lines form one batch.
    size: usize,
    /// input file (default stdin)
    infile: Option<PathBuf>,
    /// Separator placed between the lines of a batch
    #[arg(long, default_value = " ")]
    separator: String,
}

impl Batch {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let lines = common::input_lines(&self.infile)?;
        common::output(&self.render(&lines))
    }

    fn render(&self, lines: &Sequence<String>) -> String {
        let batches = lines.batch(self.size);
        tracing::debug!(size = self.size, batches = batches.len(), "batched lines");
        let joined = batches.map_into(|batch| batch.as_slice().join(&self.separator));
        common::render_lines(&joined)
    }
}
