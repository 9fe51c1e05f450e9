//! Error types for every stage of the INI pipeline.
//!
//! - [`SyntaxError`] describes one malformed line. The parser reports it and
//!   keeps going with the next line.
//! - [`ParseError`] is what the parser yields: either a syntax error with its
//!   line number, or a failure of the underlying line source.
//! - [`DeError`] and [`SerError`] are the serde-facing errors, re-exported as
//!   `de::Error` and `ser::Error`.

use std::convert::Infallible;
use std::fmt::Display;
use std::io;

use serde::{de, ser};
use thiserror::Error;

/// A line that does not fit the INI grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
pub enum SyntaxError {
    #[error("section header missing closing ']'")]
    SectionNotClosed,

    #[error("section name contains '[', ']' or a control character")]
    SectionName,

    #[error("key/value line missing '='")]
    MissingEquals,
}

/// An error produced while tokenizing a line source.
///
/// `E` is the error type of the line source: [`Infallible`] for in-memory
/// text, [`io::Error`] for readers.
#[derive(Debug, Error)]
pub enum ParseError<E> {
    #[error(transparent)]
    Read(E),

    #[error("INI syntax error on line {line}: {error}")]
    Syntax {
        line: usize,
        #[source]
        error: SyntaxError,
    },
}

/// Deserialization error.
#[derive(Debug, Error)]
pub enum DeError {
    #[error("failed to read INI input: {0}")]
    Io(#[from] io::Error),

    #[error("INI syntax error on line {line}: {error}")]
    Syntax {
        line: usize,
        #[source]
        error: SyntaxError,
    },

    #[error("unexpected end of INI input")]
    UnexpectedEof,

    #[error("INI data does not have the shape the target type requested")]
    InvalidState,

    #[error("{0}")]
    Custom(String),
}

impl From<Infallible> for DeError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl<E> From<ParseError<E>> for DeError
where
    DeError: From<E>,
{
    fn from(e: ParseError<E>) -> Self {
        match e {
            ParseError::Read(inner) => inner.into(),
            ParseError::Syntax { line, error } => DeError::Syntax { line, error },
        }
    }
}

impl de::Error for DeError {
    fn custom<T: Display>(msg: T) -> Self {
        DeError::Custom(msg.to_string())
    }
}

/// A value shape that has no INI representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnsupportedType {
    Bool,
    Bytes,
    None,
    Unit,
    Seq,
    /// Enum variants carrying data (serde models them as single-entry maps).
    Map,
    /// A number, string, char or unit variant where a map was required.
    Scalar,
}

/// Serialization error.
#[derive(Debug, Error)]
pub enum SerError {
    #[error("failed to write INI output: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Custom(String),

    #[error("{0:?} cannot be serialized into INI")]
    UnsupportedType(UnsupportedType),

    #[error("INI section and key names must be strings")]
    NonStringKey,

    #[error("INI maps can only nest one level: sections cannot contain maps")]
    TopLevelMap,

    #[error("top-level INI values must be serialized before any section")]
    OrphanValue,

    #[error("INI key {0:?} would not read back unchanged")]
    InvalidKey(String),

    #[error("INI section name {0:?} would not read back unchanged")]
    InvalidSectionName(String),

    #[error("INI value {0:?} would not read back unchanged")]
    InvalidValue(String),

    #[error("serializer consistency error: map value serialized without its key")]
    MapKeyMissing,
}

impl From<UnsupportedType> for SerError {
    fn from(t: UnsupportedType) -> Self {
        SerError::UnsupportedType(t)
    }
}

impl ser::Error for SerError {
    fn custom<T: Display>(msg: T) -> Self {
        SerError::Custom(msg.to_string())
    }
}
