use std::path::PathBuf;

use clap::Parser;
use seqkit_core::Sequence;

use crate::common;

#[derive(Debug, Parser)]
pub(crate) struct Reverse {
    /// input file (default stdin)
    infile: Option<PathBuf>,
}

impl Reverse {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let lines = common::input_lines(&self.infile)?;
        common::output(&common::render_lines(&lines.reverse()))
    }
}

#[derive(Debug, Parser)]
pub(crate) struct Take {
    /// Number of lines to output. It is an error if the input has fewer
    /// lines.
    #[arg(long, short = 'n', required_unless_present = "until_blank")]
    count: Option<usize>,
    /// input file (default stdin)
    infile: Option<PathBuf>,
    /// Output lines for as long as they are non-empty, then stop.
    #[arg(long, conflicts_with = "count")]
    until_blank: bool,
}

impl Take {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let lines = common::input_lines(&self.infile)?;
        common::output(&self.render(&lines)?)
    }

    fn render(&self, lines: &Sequence<String>) -> anyhow::Result<String> {
        let taken = if self.until_blank {
            lines.take_until(|line| !line.trim().is_empty())
        } else {
            lines.take(self.count.unwrap_or_default())?
        };
        Ok(common::render_lines(&taken))
    }
}

#[derive(Debug, Parser)]
pub(crate) struct Cycle {
    /// Number of lines to output
    size: usize,
    /// input file (default stdin)
    infile: Option<PathBuf>,
}

impl Cycle {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let lines = common::input_lines(&self.infile)?;
        common::output(&common::render_lines(&lines.cycle(self.size)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take() {
        let take = Take {
            count: Some(2),
            infile: None,
            until_blank: false,
        };
        assert_eq!(take.render(&common::lines("a\nb\nc")).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_take_too_many() {
        let take = Take {
            count: Some(5),
            infile: None,
            until_blank: false,
        };
        let err = take.render(&common::lines("a\nb\nc")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "offset 5 is out of bounds for sequence of length 3"
        );
    }

    #[test]
    fn test_take_until_blank() {
        let take = Take {
            count: None,
            infile: None,
            until_blank: true,
        };
        assert_eq!(
            take.render(&common::lines("a\nb\n\nc")).unwrap(),
            "a\nb\n"
        );
    }
}
