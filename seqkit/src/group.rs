use std::fmt::Write;
use std::io::Write as _;
use std::path::PathBuf;

use clap::Parser;
use seqkit_core::{group_by, inspect, SectionFormat, Sequence};

use crate::common;

#[derive(Debug, Parser)]
pub(crate) struct Group {
    /// input file (default stdin)
    infile: Option<PathBuf>,
    /// Field separator
    #[arg(long, default_value_t = ',')]
    delimiter: char,
    /// Index of the field to group by, starting at 0. Lines without that
    /// field are grouped under the empty key.
    #[arg(long, default_value_t = 0)]
    field: usize,
    /// Only output each key with the number of lines in its group.
    #[arg(long)]
    count: bool,
    #[command(flatten)]
    section: common::SectionArgs,
}

impl Group {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let lines = common::input_lines(&self.infile)?;
        common::output(&self.render(&lines)?)
    }

    fn render(&self, lines: &Sequence<String>) -> anyhow::Result<String> {
        let grouped = group_by(lines, |line| {
            line.split(self.delimiter)
                .nth(self.field)
                .unwrap_or_default()
                .trim()
                .to_string()
        });
        tracing::debug!(groups = grouped.len(), "grouped lines");

        if self.count {
            let mut out = String::new();
            for (key, bucket) in grouped.iter() {
                writeln!(out, "{key}\t{}", bucket.len())?;
            }
            return Ok(out);
        }

        let format = SectionFormat::from(&self.section);
        let mut out = Vec::<u8>::new();
        for (key, bucket) in grouped.iter() {
            inspect::section(&mut out, &format, key, |out| {
                for line in bucket {
                    out.write_all(line.as_bytes())?;
                    out.write_all(b"\n")?;
                }
                Ok(())
            })?;
        }
        Ok(String::from_utf8(out)?)
    }
}
