//! Line tokenizer: turns INI text into a lazy stream of [`Item`]s.
//!
//! Every physical line becomes exactly one item, or one error. Errors are
//! per line: after yielding an `Err` the parser carries on with the next
//! line, so callers decide whether a malformed line is fatal.
//!
//! ```
//! use winini::parse::{Item, Parser};
//!
//! let items: Vec<Item> = Parser::from_str("[server]\nport = 8080\n")
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(items[0], Item::Section { name: "server".into() });
//! ```

use std::convert::Infallible;
use std::io::{self, BufRead, BufReader, Read};
use std::str;

pub use crate::error::{ParseError, SyntaxError};

const BOM: char = '\u{feff}';

/// One syntactic unit of an INI document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Item {
    Empty,
    Section { name: String },
    Value { key: String, value: String },
    /// Comment text after the `;` or `#` marker.
    Comment { text: String },
}

/// Lazy INI tokenizer over a source of text lines.
#[derive(Debug)]
pub struct Parser<T> {
    input: T,
    line: usize,
}

impl<T> Parser<T> {
    /// Wrap any iterator of `Result<line, E>`.
    pub fn new(input: T) -> Self {
        Self { input, line: 0 }
    }

    /// Number of the last line pulled from the source (1-based, 0 before the first).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Give back the line source, positioned at the next unread line.
    pub fn into_inner(self) -> T {
        self.input
    }
}

impl<'a> Parser<StrLines<'a>> {
    /// Tokenize in-memory text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &'a str) -> Self {
        Self::new(StrLines(s.lines()))
    }
}

impl<R: BufRead> Parser<io::Lines<R>> {
    pub fn from_bufread(reader: R) -> Self {
        Self::new(reader.lines())
    }
}

impl<R: Read> Parser<io::Lines<BufReader<R>>> {
    /// Tokenize an unbuffered reader. Lines that are not valid UTF-8 come
    /// back as [`ParseError::Read`].
    pub fn from_read(reader: R) -> Self {
        Self::from_bufread(BufReader::new(reader))
    }
}

impl<E, S, T> Iterator for Parser<T>
where
    S: AsRef<str>,
    T: Iterator<Item = Result<S, E>>,
{
    type Item = Result<Item, ParseError<E>>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.input.next()? {
            Ok(line) => line,
            Err(e) => {
                self.line += 1;
                return Some(Err(ParseError::Read(e)));
            }
        };
        self.line += 1;

        let mut text = line.as_ref();
        if self.line == 1 {
            text = text.strip_prefix(BOM).unwrap_or(text);
        }

        Some(parse_line(text).map_err(|error| ParseError::Syntax {
            line: self.line,
            error,
        }))
    }
}

/// Classify a single line with its terminator already removed.
pub fn parse_line(line: &str) -> Result<Item, SyntaxError> {
    let line = line.trim();

    if line.is_empty() {
        return Ok(Item::Empty);
    }

    if let Some(text) = line.strip_prefix(';').or_else(|| line.strip_prefix('#')) {
        return Ok(Item::Comment { text: text.into() });
    }

    if let Some(rest) = line.strip_prefix('[') {
        let name = rest
            .strip_suffix(']')
            .ok_or(SyntaxError::SectionNotClosed)?;
        if name
            .chars()
            .any(|c| c == '[' || c == ']' || c.is_control())
        {
            return Err(SyntaxError::SectionName);
        }
        return Ok(Item::Section {
            name: name.trim().into(),
        });
    }

    // Only the first '=' separates; any later ones are part of the value.
    let (key, value) = line.split_once('=').ok_or(SyntaxError::MissingEquals)?;
    Ok(Item::Value {
        key: key.trim().into(),
        value: value.trim().into(),
    })
}

/// Lines of an in-memory string as an infallible line source.
#[derive(Debug, Clone)]
pub struct StrLines<'a>(str::Lines<'a>);

impl<'a> Iterator for StrLines<'a> {
    type Item = Result<&'a str, Infallible>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Ok)
    }
}
