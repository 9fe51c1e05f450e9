//! Windows INI files for serde. Define a struct, derive, and go.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Config {
//!     name: String,
//!     server: Server,
//! }
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! let text = "name = demo\n\n[server]\nhost = localhost\nport = 8080\n";
//! let config: Config = winini::from_str(text).unwrap();
//! assert_eq!(config.server.port, 8080);
//!
//! let written = winini::to_string(&config).unwrap();
//! assert_eq!(written, "name=demo\n[server]\nhost=localhost\nport=8080\n");
//! ```
//!
//! # Data model
//!
//! An INI document is a map of sections, each a map of string keys to string
//! values. Keys that appear before the first `[header]` belong to the unnamed
//! section, named `""`.
//!
//! - Deserializing into a **map** yields every section, the unnamed one under
//!   the key `""`.
//! - Deserializing into a **struct** places the unnamed section's keys
//!   directly on the struct, next to the named sections.
//! - Repeated sections merge; repeated keys keep the last value.
//! - Values are plain text. Numbers, bools and unit enum variants are parsed
//!   from that text on demand; sequences and deeper nesting are rejected.
//!
//! # Layers
//!
//! The crate is built bottom-up, and each layer is usable on its own:
//!
//! ```text
//! parse   text lines      -> Item stream    (lazy, per-line errors)
//! write   Item            -> text line      (LF or CRLF)
//! de      Item stream     -> serde value
//! ser     serde value     -> Item stream
//! ```
//!
//! # Format
//!
//! - `[name]` opens a section; the name cannot contain `[`, `]` or control
//!   characters.
//! - `key = value` splits on the first `=`; both sides are trimmed. There is
//!   no quoting or escaping.
//! - Lines starting with `;` or `#` are comments. Comments are always written
//!   back with `;`.
//! - A leading UTF-8 byte order mark is ignored.

pub mod de;
pub mod error;
pub mod parse;
pub mod ser;
pub mod write;

#[cfg(test)]
mod fixtures;

pub use de::{Deserializer, from_bufread, from_read, from_str};
pub use parse::{Item, Parser};
pub use ser::{Serializer, to_string, to_vec, to_writer};
pub use write::{LineEnding, Writer};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{AppConfig, SAMPLE_INI, sample};
    use std::collections::BTreeMap;

    #[test]
    fn sample_round_trips_through_text() {
        let parsed: AppConfig = from_str(SAMPLE_INI).unwrap();
        assert_eq!(parsed, sample());

        let text = to_string(&parsed).unwrap();
        let reparsed: AppConfig = from_str(&text).unwrap();
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn writing_is_idempotent() {
        let first = to_string(&sample()).unwrap();
        let second = to_string(&from_str::<AppConfig>(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn padded_text_is_refused_rather_than_changed_on_reread() {
        type Document = BTreeMap<String, BTreeMap<String, String>>;

        let mut doc = Document::new();
        doc.entry("s".into())
            .or_default()
            .insert("k".into(), " padded ".into());
        assert!(matches!(to_string(&doc), Err(ser::Error::InvalidValue(_))));

        doc.get_mut("s").unwrap().insert("k".into(), "padded".into());
        let first = to_string(&doc).unwrap();
        let second = to_string(&from_str::<Document>(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unit_fields_round_trip() {
        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
        struct Flags {
            verbose: (),
            name: String,
        }

        let parsed: Flags = from_str("verbose=\nname=x\n").unwrap();
        assert_eq!(to_string(&parsed).unwrap(), "verbose=\nname=x\n");
    }

    #[test]
    fn generic_document_round_trip() {
        type Document = BTreeMap<String, BTreeMap<String, String>>;

        let text = "root=1\n[a]\nx=1\n[b]\ny=2\n";
        let doc: Document = from_str(text).unwrap();
        assert_eq!(doc[""]["root"], "1");
        assert_eq!(to_string(&doc).unwrap(), text);
    }

    #[test]
    fn crlf_documents_read_back() {
        let mut ser = Serializer::new(Writer::new(Vec::new(), LineEnding::CrLf));
        serde::Serialize::serialize(&sample(), &mut ser).unwrap();
        let bytes = ser.into_inner().into_inner();

        assert!(bytes.windows(2).any(|w| w == b"\r\n"));
        let parsed: AppConfig = from_read(bytes.as_slice()).unwrap();
        assert_eq!(parsed, sample());
    }
}
