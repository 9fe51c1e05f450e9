//! Line writer: the inverse of [`Parser`](crate::parse::Parser).

use std::fmt;
use std::io::{self, Write};

use crate::parse::Item;

/// Line terminator used when writing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Linefeed,
    /// `\r\n`, the traditional Windows terminator.
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Linefeed => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes [`Item`]s to a sink, one physical line each.
#[derive(Debug, Clone)]
pub struct Writer<W> {
    output: W,
    line_ending: LineEnding,
}

impl<W> Writer<W> {
    pub fn new(output: W, line_ending: LineEnding) -> Self {
        Self {
            output,
            line_ending,
        }
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Writer<W> {
    /// Write one item as a full line.
    ///
    /// The line is formatted up front and handed to the sink in a single
    /// `write_all`, so an item is never split across calls.
    pub fn write(&mut self, item: &Item) -> io::Result<()> {
        let eol = self.line_ending;
        let line = match item {
            Item::Empty => eol.to_string(),
            Item::Section { name } => format!("[{name}]{eol}"),
            Item::Value { key, value } => format!("{key}={value}{eol}"),
            Item::Comment { text } => format!(";{text}{eol}"),
        };
        self.output.write_all(line.as_bytes())
    }
}
