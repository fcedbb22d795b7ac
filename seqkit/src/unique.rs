use std::path::PathBuf;

use clap::Parser;
use seqkit_core::Sequence;

use crate::common;

#[derive(Debug, Parser)]
pub(crate) struct Unique {
    /// input file (default stdin)
    infile: Option<PathBuf>,
    /// Treat lines differing only in case as the same line.
    #[arg(long)]
    ignore_case: bool,
    /// Ignore leading and trailing whitespace when comparing lines.
    #[arg(long)]
    trim: bool,
}

impl Unique {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let lines = common::input_lines(&self.infile)?;
        common::output(&self.render(&lines))
    }

    fn render(&self, lines: &Sequence<String>) -> String {
        let unique = lines.unique(|line| {
            let line = if self.trim { line.trim() } else { line.as_str() };
            if self.ignore_case {
                line.to_lowercase()
            } else {
                line.to_string()
            }
        });
        tracing::debug!(before = lines.len(), after = unique.len(), "removed repeated lines");
        common::render_lines(&unique)
    }
}
