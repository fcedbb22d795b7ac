use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use seqkit_core::{sort_backward, Sequence};

use crate::common;

#[derive(Debug, Parser)]
pub(crate) struct Sort {
    /// input file (default stdin)
    infile: Option<PathBuf>,
    /// Sort from largest to smallest.
    #[arg(long)]
    descending: bool,
    /// Compare lines as numbers. Every line has to be a number.
    #[arg(long)]
    numeric: bool,
}

impl Sort {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let lines = common::input_lines(&self.infile)?;
        common::output(&self.render(&lines)?)
    }

    fn render(&self, lines: &Sequence<String>) -> anyhow::Result<String> {
        let sorted = if self.numeric {
            let keyed = lines
                .iter()
                .enumerate()
                .map(|(index, line)| -> anyhow::Result<(f64, String)> {
                    let key = line.trim().parse::<f64>().with_context(|| {
                        format!("Line {} is not a number: {line:?}", index + 1)
                    })?;
                    Ok((key, line.clone()))
                })
                .collect::<anyhow::Result<Sequence<_>>>()?;
            self.sort(&keyed, |a, b| a.0.total_cmp(&b.0).is_lt())
                .map_into(|(_, line)| line.clone())
        } else {
            self.sort(lines, |a, b| a < b)
        };
        Ok(common::render_lines(&sorted))
    }

    fn sort<T: Clone>(
        &self,
        items: &Sequence<T>,
        less: impl FnMut(&T, &T) -> bool,
    ) -> Sequence<T> {
        if self.descending {
            items.sort(sort_backward(less))
        } else {
            items.sort(less)
        }
    }
}
