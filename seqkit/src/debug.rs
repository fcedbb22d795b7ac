use std::path::PathBuf;

use clap::Parser;
use seqkit_core::{labelled, SectionFormat, Sequence};

use crate::common;

#[derive(Debug, Parser)]
pub(crate) struct Inspect {
    /// input file (default stdin)
    infile: Option<PathBuf>,
    /// Title of the debug section
    #[arg(long, default_value = "input")]
    title: String,
    /// Label printed before each line
    #[arg(long)]
    label: Option<String>,
    /// Also print the length of each line
    #[arg(long)]
    length: bool,
    #[command(flatten)]
    section: common::SectionArgs,
}

impl Inspect {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let lines = common::input_lines(&self.infile)?;
        common::output(&self.render(&lines)?)
    }

    fn render(&self, lines: &Sequence<String>) -> anyhow::Result<String> {
        let label = self.label.as_deref().unwrap_or("line");
        let text = labelled(label, |line: &String| line.clone());
        let length = labelled("len", |line: &String| line.chars().count().to_string());

        let mut formatters: Vec<&dyn Fn(&String) -> String> = Vec::new();
        if self.label.is_some() || self.length {
            formatters.push(&text);
        }
        if self.length {
            formatters.push(&length);
        }

        let mut out = Vec::<u8>::new();
        lines.debug_to(
            &mut out,
            &SectionFormat::from(&self.section),
            &self.title,
            &formatters,
        )?;
        Ok(String::from_utf8(out)?)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn inspect(label: Option<&str>, length: bool) -> Inspect {
        Inspect {
            infile: None,
            title: "words".to_string(),
            label: label.map(str::to_string),
            length,
            section: common::SectionArgs {
                divider: '#',
                lead: 4,
                width: 24,
            },
        }
    }

    #[test]
    fn test_debug_plain() {
        let rendered = inspect(None, false).render(&common::lines("ab\nc")).unwrap();
        assert_snapshot!(rendered.trim_end(), @r#"
        #### Debug: words ######
        Item[0] = "ab"
        Item[1] = "c"
        ####/Debug: words ######
        "#);
    }

    #[test]
    fn test_debug_label_and_length() {
        let rendered = inspect(Some("word"), true)
            .render(&common::lines("ab\nc"))
            .unwrap();
        assert_snapshot!(rendered.trim_end(), @r"
        #### Debug: words ######
        Item[0] = word:ab, len:2
        Item[1] = word:c, len:1
        ####/Debug: words ######
        ");
    }
}
