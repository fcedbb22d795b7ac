use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use seqkit_core::{SectionFormat, Sequence};

/// Reads lines from a file or stdin.
pub(crate) fn input_lines(infile: &Option<PathBuf>) -> anyhow::Result<Sequence<String>> {
    let input = if let Some(input_path) = infile {
        std::fs::read_to_string(input_path)
            .with_context(|| format!("Failed to read input file: {}", input_path.display()))?
    } else {
        let mut input_reader = BufReader::new(io::stdin());
        let mut input = String::new();
        input_reader
            .read_to_string(&mut input)
            .context("Failed to read from stdin")?;
        input
    };
    let lines = Sequence::new(input.lines().map(str::to_string));
    tracing::debug!(count = lines.len(), "read input lines");
    lines.trace("input");
    Ok(lines)
}

/// One output line per element.
pub(crate) fn render_lines(lines: &Sequence<String>) -> String {
    let mut out = String::new();
    lines.each(|line| {
        out.push_str(line);
        out.push('\n');
    });
    out
}

pub(crate) fn output(rendered: &str) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(rendered.as_bytes())
        .context("Failed to write to stdout")?;
    out.flush().context("Failed to write to stdout")
}

/// Options controlling how sections are framed.
#[derive(Debug, Clone, Args)]
pub(crate) struct SectionArgs {
    /// Character used to draw section lines
    #[arg(long, default_value_t = '=')]
    pub(crate) divider: char,
    /// Number of divider characters before a section title
    #[arg(long, default_value_t = 10)]
    pub(crate) lead: usize,
    /// Width of section lines
    #[arg(long, default_value_t = 80)]
    pub(crate) width: usize,
}

impl From<&SectionArgs> for SectionFormat {
    fn from(args: &SectionArgs) -> Self {
        SectionFormat {
            divider: args.divider,
            lead: args.lead,
            width: args.width,
        }
    }
}

#[cfg(test)]
pub(crate) fn lines(text: &str) -> Sequence<String> {
    Sequence::new(text.lines().map(str::to_string))
}
