//! Print sequences for inspection.
//!
//! Output is framed as a section: a header line holding the title, the body,
//! and a footer line, both cut to a fixed width. How the frame looks is set
//! by a [`SectionFormat`].
use std::fmt;
use std::io::{self, Write};

use crate::Sequence;

/// The look of a section frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionFormat {
    /// The character the frame lines are drawn with
    pub divider: char,
    /// How many dividers go before the title
    pub lead: usize,
    /// Width of the frame lines, in characters
    pub width: usize,
}

impl Default for SectionFormat {
    fn default() -> Self {
        Self {
            divider: '=',
            lead: 10,
            width: 80,
        }
    }
}

impl SectionFormat {
    fn rule(&self, marker: char, title: &str) -> String {
        let dividers = |n: usize| std::iter::repeat(self.divider).take(n);
        dividers(self.lead)
            .chain(std::iter::once(marker))
            .chain(title.chars())
            .chain(std::iter::once(' '))
            .chain(dividers(self.width))
            .take(self.width)
            .collect()
    }

    /// The line opening a section
    pub fn header(&self, title: &str) -> String {
        self.rule(' ', title)
    }

    /// The line closing a section
    pub fn footer(&self, title: &str) -> String {
        self.rule('/', title)
    }
}

/// Write `body` to `out`, framed by a header and footer carrying `title`.
pub fn section<W: Write>(
    out: &mut W,
    format: &SectionFormat,
    title: &str,
    body: impl FnOnce(&mut W) -> io::Result<()>,
) -> io::Result<()> {
    writeln!(out, "{}", format.header(title))?;
    body(out)?;
    writeln!(out, "{}", format.footer(title))
}

/// A formatter that prefixes the output of `f` with `name:`.
pub fn labelled<T>(name: impl fmt::Display, f: impl Fn(&T) -> String) -> impl Fn(&T) -> String {
    move |item: &T| format!("{name}:{}", f(item))
}

fn representation<T: fmt::Debug>(item: &T, formatters: &[&dyn Fn(&T) -> String]) -> String {
    if formatters.is_empty() {
        return format!("{item:?}");
    }
    formatters
        .iter()
        .map(|f| f(item))
        .filter_map(|s| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl<T: fmt::Debug> Sequence<T> {
    /// Print the elements to stdout, one line each, and return the sequence
    /// itself.
    ///
    /// Each formatter turns an element into a piece of text; the non-empty
    /// pieces are joined by commas. Without formatters the `Debug` form of
    /// the element is printed.
    pub fn debug(&self, title: &str, formatters: &[&dyn Fn(&T) -> String]) -> &Self {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(err) = self.debug_to(&mut out, &SectionFormat::default(), title, formatters) {
            tracing::warn!(%err, title, "could not print sequence");
        }
        self
    }

    /// Like [`Sequence::debug`], writing to `out` with the given format.
    pub fn debug_to<W: Write>(
        &self,
        out: &mut W,
        format: &SectionFormat,
        title: &str,
        formatters: &[&dyn Fn(&T) -> String],
    ) -> io::Result<&Self> {
        section(out, format, &format!("Debug: {title}"), |out| {
            for (index, item) in self.iter().enumerate() {
                writeln!(out, "Item[{index}] = {}", representation(item, formatters))?;
            }
            Ok(())
        })?;
        Ok(self)
    }

    /// Emit the elements as `tracing` debug events and return the sequence
    /// itself.
    pub fn trace(&self, title: &str) -> &Self {
        tracing::debug!(title, len = self.len(), "sequence");
        for (index, item) in self.iter().enumerate() {
            tracing::debug!(title, index, item = ?item, "sequence item");
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use crate::seq;

    use super::*;

    fn small() -> SectionFormat {
        SectionFormat {
            divider: '-',
            lead: 3,
            width: 20,
        }
    }

    fn debug_output<T: fmt::Debug>(
        s: &Sequence<T>,
        title: &str,
        formatters: &[&dyn Fn(&T) -> String],
    ) -> String {
        let mut out = Vec::<u8>::new();
        s.debug_to(&mut out, &small(), title, formatters).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_default_width() {
        let format = SectionFormat::default();
        let header = format.header("title");
        assert_eq!(header.chars().count(), 80);
        assert!(header.starts_with("========== title ="));
    }

    #[test]
    fn test_footer() {
        assert_eq!(small().footer("abc"), "---/abc ------------");
    }

    #[test]
    fn test_long_title_is_cut() {
        assert_eq!(
            small().header("a title that is far too long"),
            "--- a title that is "
        );
    }

    #[test]
    fn test_section() {
        let mut out = Vec::<u8>::new();
        section(&mut out, &small(), "x", |out| writeln!(out, "body")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "--- x --------------\nbody\n---/x --------------\n"
        );
    }

    #[test]
    fn test_debug_default_representation() {
        let output = debug_output(&seq![1, 2], "all", &[]);
        assert_snapshot!(output.trim_end(), @r"
        --- Debug: all -----
        Item[0] = 1
        Item[1] = 2
        ---/Debug: all -----
        ");
    }

    #[test]
    fn test_debug_formatters() {
        let value = labelled("value", |i: &i32| i.to_string());
        let xor = labelled("xor", |i: &i32| (i ^ 3).to_string());
        let formatters: [&dyn Fn(&i32) -> String; 2] = [&value, &xor];
        let output = debug_output(&seq![1, 2], "f", &formatters);
        assert_snapshot!(output.trim_end(), @r"
        --- Debug: f -------
        Item[0] = value:1, xor:2
        Item[1] = value:2, xor:1
        ---/Debug: f -------
        ");
    }

    #[test]
    fn test_debug_skips_empty_pieces() {
        let blank = |_: &i32| "  ".to_string();
        let plain = |i: &i32| format!(" {i} ");
        let formatters: [&dyn Fn(&i32) -> String; 3] = [&blank, &plain, &blank];
        let output = debug_output(&seq![7], "e", &formatters);
        assert!(output.contains("Item[0] = 7\n"));
    }

    #[test]
    fn test_debug_returns_self() {
        let s = seq!["a"];
        let mut out = Vec::<u8>::new();
        let same = s.debug_to(&mut out, &small(), "t", &[]).unwrap();
        assert!(std::ptr::eq(same, &s));
    }

    #[test]
    fn test_trace_returns_self() {
        let s = seq![1, 2, 3];
        assert!(std::ptr::eq(s.trace("numbers"), &s));
    }
}
