//! serde deserializer for INI documents.
//!
//! The item stream is read as a two-level map: section name -> (key -> value).
//! Repeated `[section]` headers are merged, keys keep the position of their
//! first occurrence and the last value wins. Keys that appear before any
//! header belong to the unnamed section `""`.
//!
//! Requested as a map (or through `deserialize_any`, e.g. `serde_json::Value`)
//! the document looks like `{"": {..}, "section": {..}}`. Requested as a
//! struct, the unnamed section's keys are presented as the struct's own
//! fields and every named section as a nested field. When a root key and a
//! section share a name, the section wins:
//!
//! ```
//! #[derive(serde::Deserialize)]
//! struct Config {
//!     name: String,
//!     server: Server,
//! }
//!
//! #[derive(serde::Deserialize)]
//! struct Server {
//!     port: u16,
//! }
//!
//! let config: Config = winini::from_str("name=demo\n[server]\nport=8080\n").unwrap();
//! assert_eq!(config.name, "demo");
//! assert_eq!(config.server.port, 8080);
//! ```

use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Read};
use std::str::FromStr;
use std::vec;

use serde::de::{self, DeserializeOwned, DeserializeSeed, IntoDeserializer, MapAccess, Visitor};

use crate::parse::{Item, Parser, StrLines};

pub use crate::error::DeError as Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A source of parsed items.
///
/// Implemented for every iterator of `Result<Item, E>` whose error converts
/// into [`Error`], which includes [`Parser`] over any line source.
pub trait ItemSource {
    fn next_item(&mut self) -> Option<Result<Item>>;
}

impl<E, I> ItemSource for I
where
    I: Iterator<Item = std::result::Result<Item, E>>,
    Error: From<E>,
{
    fn next_item(&mut self) -> Option<Result<Item>> {
        self.next().map(|item| item.map_err(Error::from))
    }
}

#[derive(Debug)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => {
                tracing::trace!(section = %self.name, %key, "duplicate key, last value wins");
                *slot = value;
            }
            None => self.entries.push((key, value)),
        }
    }
}

fn section_index(sections: &mut Vec<Section>, name: String) -> usize {
    match sections.iter().position(|s| s.name == name) {
        Some(i) => i,
        None => {
            sections.push(Section {
                name,
                entries: Vec::new(),
            });
            sections.len() - 1
        }
    }
}

/// Deserializes a value from a stream of INI [`Item`]s.
#[derive(Debug)]
pub struct Deserializer<T> {
    input: T,
}

impl<T> Deserializer<T> {
    pub fn new(input: T) -> Self {
        Self { input }
    }

    pub fn into_inner(self) -> T {
        self.input
    }
}

impl<'a> Deserializer<Parser<StrLines<'a>>> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &'a str) -> Self {
        Self::new(Parser::from_str(s))
    }
}

impl<R: BufRead> Deserializer<Parser<io::Lines<R>>> {
    pub fn from_bufread(reader: R) -> Self {
        Self::new(Parser::from_bufread(reader))
    }
}

impl<R: Read> Deserializer<Parser<io::Lines<BufReader<R>>>> {
    pub fn from_read(reader: R) -> Self {
        Self::new(Parser::from_read(reader))
    }
}

impl<T: ItemSource> Deserializer<T> {
    /// Drain the item source into merged sections, in order of first appearance.
    ///
    /// Stops at the first malformed line or read failure.
    fn collect_sections(&mut self) -> Result<Vec<Section>> {
        let mut sections = Vec::new();
        let mut current = None;

        while let Some(item) = self.input.next_item() {
            match item? {
                Item::Empty | Item::Comment { .. } => {}
                Item::Section { name } => current = Some(section_index(&mut sections, name)),
                Item::Value { key, value } => {
                    let index =
                        *current.get_or_insert_with(|| section_index(&mut sections, String::new()));
                    sections[index].insert(key, value);
                }
            }
        }

        tracing::debug!(sections = sections.len(), "collected INI document");
        Ok(sections)
    }
}

/// Expands to the `de::Deserializer` methods that only a single scalar could
/// satisfy. Maps reject them all.
macro_rules! reject_non_map {
    ($($method:ident)*) => {
        $(
            fn $method<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
                Err(Error::InvalidState)
            }
        )*

        fn deserialize_unit_struct<V: Visitor<'de>>(
            self,
            _name: &'static str,
            _visitor: V,
        ) -> Result<V::Value> {
            Err(Error::InvalidState)
        }

        fn deserialize_tuple<V: Visitor<'de>>(self, _len: usize, _visitor: V) -> Result<V::Value> {
            Err(Error::InvalidState)
        }

        fn deserialize_tuple_struct<V: Visitor<'de>>(
            self,
            _name: &'static str,
            _len: usize,
            _visitor: V,
        ) -> Result<V::Value> {
            Err(Error::InvalidState)
        }

        fn deserialize_enum<V: Visitor<'de>>(
            self,
            _name: &'static str,
            _variants: &'static [&'static str],
            _visitor: V,
        ) -> Result<V::Value> {
            Err(Error::InvalidState)
        }
    };
}

impl<'de, T: ItemSource> de::Deserializer<'de> for &mut Deserializer<T> {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let sections = self.collect_sections()?;
        visitor.visit_map(Entries::sections(sections))
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        self.deserialize_any(visitor)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        let sections = self.collect_sections()?;
        visitor.visit_map(Entries::inline_root(sections))
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        self.collect_sections()?;
        visitor.visit_unit()
    }

    reject_non_map! {
        deserialize_bool deserialize_i8 deserialize_i16 deserialize_i32 deserialize_i64
        deserialize_u8 deserialize_u16 deserialize_u32 deserialize_u64
        deserialize_f32 deserialize_f64 deserialize_char deserialize_str deserialize_string
        deserialize_bytes deserialize_byte_buf deserialize_unit deserialize_seq
        deserialize_identifier
    }
}

enum Entry {
    Value(String),
    Section(Vec<(String, String)>),
}

/// `MapAccess` over prepared entries.
struct Entries {
    iter: vec::IntoIter<(String, Entry)>,
    pending: Option<Entry>,
}

impl Entries {
    fn new(entries: Vec<(String, Entry)>) -> Self {
        Self {
            iter: entries.into_iter(),
            pending: None,
        }
    }

    /// One entry per section, the unnamed one included.
    fn sections(sections: Vec<Section>) -> Self {
        Self::new(
            sections
                .into_iter()
                .map(|s| (s.name, Entry::Section(s.entries)))
                .collect(),
        )
    }

    /// Unnamed-section keys first, as plain values, then the named sections.
    ///
    /// A root key that shares its name with a section is dropped, so the
    /// struct field is filled from the section.
    fn inline_root(sections: Vec<Section>) -> Self {
        let (root, named): (Vec<_>, Vec<_>) =
            sections.into_iter().partition(|s| s.name.is_empty());

        let mut entries = Vec::new();
        for section in root {
            for (key, value) in section.entries {
                if named.iter().any(|s| s.name == key) {
                    tracing::debug!(%key, "root key shadowed by section of the same name");
                    continue;
                }
                entries.push((key, Entry::Value(value)));
            }
        }
        entries.extend(
            named
                .into_iter()
                .map(|s| (s.name, Entry::Section(s.entries))),
        );
        Self::new(entries)
    }

    fn values(entries: Vec<(String, String)>) -> Self {
        Self::new(
            entries
                .into_iter()
                .map(|(k, v)| (k, Entry::Value(v)))
                .collect(),
        )
    }
}

impl<'de> MapAccess<'de> for Entries {
    type Error = Error;

    fn next_key_seed<K: DeserializeSeed<'de>>(&mut self, seed: K) -> Result<Option<K::Value>> {
        let Some((key, entry)) = self.iter.next() else {
            return Ok(None);
        };
        self.pending = Some(entry);
        seed.deserialize(key.into_deserializer()).map(Some)
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value> {
        match self.pending.take() {
            Some(Entry::Value(value)) => seed.deserialize(ValueDeserializer(value)),
            Some(Entry::Section(entries)) => seed.deserialize(SectionDeserializer(entries)),
            None => Err(Error::UnexpectedEof),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

/// Deserializes the key/value pairs of one section as a map.
pub struct SectionDeserializer(Vec<(String, String)>);

impl<'de> de::Deserializer<'de> for SectionDeserializer {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_map(Entries::values(self.0))
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        self.deserialize_any(visitor)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        self.deserialize_any(visitor)
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_unit()
    }

    reject_non_map! {
        deserialize_bool deserialize_i8 deserialize_i16 deserialize_i32 deserialize_i64
        deserialize_u8 deserialize_u16 deserialize_u32 deserialize_u64
        deserialize_f32 deserialize_f64 deserialize_char deserialize_str deserialize_string
        deserialize_bytes deserialize_byte_buf deserialize_unit deserialize_seq
        deserialize_identifier
    }
}

/// Deserializes a single raw value string into whatever the target asks for.
pub struct ValueDeserializer(String);

impl ValueDeserializer {
    fn parse<F>(&self) -> Result<F>
    where
        F: FromStr,
        F::Err: Display,
    {
        self.0
            .parse()
            .map_err(|e| Error::Custom(format!("invalid value {:?}: {e}", self.0)))
    }
}

macro_rules! deserialize_from_str {
    ($($method:ident => $visit:ident,)*) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
                visitor.$visit(self.parse()?)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_string(self.0)
    }

    deserialize_from_str! {
        deserialize_bool => visit_bool,
        deserialize_i8 => visit_i8,
        deserialize_i16 => visit_i16,
        deserialize_i32 => visit_i32,
        deserialize_i64 => visit_i64,
        deserialize_i128 => visit_i128,
        deserialize_u8 => visit_u8,
        deserialize_u16 => visit_u16,
        deserialize_u32 => visit_u32,
        deserialize_u64 => visit_u64,
        deserialize_u128 => visit_u128,
        deserialize_f32 => visit_f32,
        deserialize_f64 => visit_f64,
    }

    fn deserialize_char<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => visitor.visit_char(c),
            // Let the visitor reject anything that is not exactly one char.
            _ => visitor.visit_string(self.0),
        }
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_string(self.0)
    }

    fn deserialize_string<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_string(self.0)
    }

    fn deserialize_identifier<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_string(self.0)
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_bytes(self.0.as_bytes())
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_byte_buf(self.0.into_bytes())
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_some(self)
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        if self.0.is_empty() {
            visitor.visit_unit()
        } else {
            Err(Error::InvalidState)
        }
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_enum(self.0.into_deserializer())
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_unit()
    }

    fn deserialize_seq<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::InvalidState)
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, _len: usize, _visitor: V) -> Result<V::Value> {
        Err(Error::InvalidState)
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        _visitor: V,
    ) -> Result<V::Value> {
        Err(Error::InvalidState)
    }

    fn deserialize_map<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::InvalidState)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value> {
        Err(Error::InvalidState)
    }
}

/// Deserialize an instance of `T` from INI text.
pub fn from_str<T: DeserializeOwned>(s: &str) -> Result<T> {
    T::deserialize(&mut Deserializer::from_str(s))
}

/// Deserialize an instance of `T` from a buffered reader.
pub fn from_bufread<R: BufRead, T: DeserializeOwned>(reader: R) -> Result<T> {
    T::deserialize(&mut Deserializer::from_bufread(reader))
}

/// Deserialize an instance of `T` from a reader.
pub fn from_read<R: Read, T: DeserializeOwned>(reader: R) -> Result<T> {
    T::deserialize(&mut Deserializer::from_read(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{AppConfig, Mode, SAMPLE_INI, sample};
    use crate::parse::SyntaxError;
    use serde::Deserialize;
    use std::collections::{BTreeMap, HashMap};
    use std::fmt;

    type Document = BTreeMap<String, BTreeMap<String, String>>;

    fn section(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Records top-level keys in the order the deserializer presents them.
    struct KeyOrder(Vec<String>);

    impl<'de> Deserialize<'de> for KeyOrder {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: de::Deserializer<'de>,
        {
            struct KeyOrderVisitor;

            impl<'de> Visitor<'de> for KeyOrderVisitor {
                type Value = KeyOrder;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a map")
                }

                fn visit_map<A>(self, mut map: A) -> std::result::Result<KeyOrder, A::Error>
                where
                    A: MapAccess<'de>,
                {
                    let mut keys = Vec::new();
                    while let Some(key) = map.next_key::<String>()? {
                        map.next_value::<de::IgnoredAny>()?;
                        keys.push(key);
                    }
                    Ok(KeyOrder(keys))
                }
            }

            deserializer.deserialize_map(KeyOrderVisitor)
        }
    }

    #[test]
    fn leading_keys_land_in_unnamed_section() {
        let doc: Document = from_str("key1=value1\nkey2=value2\n").unwrap();
        let mut expected = Document::new();
        expected.insert(
            String::new(),
            section(&[("key1", "value1"), ("key2", "value2")]),
        );
        assert_eq!(doc, expected);
    }

    #[test]
    fn sections_become_nested_maps() {
        let doc: Document = from_str("[a]\nx=1\n[b]\ny=2\n").unwrap();
        let mut expected = Document::new();
        expected.insert("a".into(), section(&[("x", "1")]));
        expected.insert("b".into(), section(&[("y", "2")]));
        assert_eq!(doc, expected);
    }

    #[test]
    fn dynamic_value_sees_map_of_maps() {
        let value: serde_json::Value = from_str("top=1\n[s]\nk=v\n").unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "": { "top": "1" }, "s": { "k": "v" } })
        );
    }

    #[test]
    fn duplicate_key_last_wins() {
        let doc: Document = from_str("k=1\nk=2\n").unwrap();
        assert_eq!(doc[""]["k"], "2");
    }

    #[test]
    fn repeated_sections_merge_in_first_seen_order() {
        let input = "[b]\nx=1\n[a]\ny=2\n[b]\nz=3\nx=4\n";
        let doc: Document = from_str(input).unwrap();
        assert_eq!(doc["b"], section(&[("x", "4"), ("z", "3")]));

        let KeyOrder(keys) = from_str(input).unwrap();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn section_keys_keep_first_position() {
        #[derive(Deserialize)]
        struct Wrapper {
            s: KeyOrder,
        }
        let wrapper: Wrapper = from_str("[s]\nb=1\na=2\nb=3\n").unwrap();
        assert_eq!(wrapper.s.0, vec!["b", "a"]);
    }

    #[test]
    fn struct_with_inline_root_and_sections() {
        let config: AppConfig = from_str(SAMPLE_INI).unwrap();
        assert_eq!(config, sample());
    }

    #[test]
    fn all_constructors_agree() {
        let expected = sample();
        let via_bufread: AppConfig = from_bufread(SAMPLE_INI.as_bytes()).unwrap();
        let via_read: AppConfig = from_read(SAMPLE_INI.as_bytes()).unwrap();
        let via_parser =
            AppConfig::deserialize(&mut Deserializer::new(Parser::from_str(SAMPLE_INI))).unwrap();
        assert_eq!(via_bufread, expected);
        assert_eq!(via_read, expected);
        assert_eq!(via_parser, expected);
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("app.ini");
        std::fs::write(&path, SAMPLE_INI.replace('\n', "\r\n")).unwrap();

        let file = std::fs::File::open(&path).unwrap();
        let config: AppConfig = from_read(file).unwrap();
        assert_eq!(config, sample());
    }

    #[test]
    fn syntax_error_aborts_with_line() {
        let err = from_str::<Document>("a=1\n[unterminated\nb=2\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Syntax {
                line: 2,
                error: SyntaxError::SectionNotClosed
            }
        ));
    }

    #[test]
    fn read_failure_surfaces_as_io() {
        let bytes: &[u8] = b"a=\xff\n";
        let err = from_read::<_, Document>(bytes).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn bad_number_is_custom_error() {
        #[derive(Debug, Deserialize)]
        struct Port {
            #[allow(dead_code)]
            port: u16,
        }
        let err = from_str::<Port>("port=eighty").unwrap_err();
        match err {
            Error::Custom(msg) => assert!(msg.contains("eighty")),
            other => panic!("expected Custom, got {other:?}"),
        }
    }

    #[test]
    fn scalar_top_level_is_invalid_state() {
        assert!(matches!(from_str::<u32>("a=1"), Err(Error::InvalidState)));
        assert!(matches!(
            from_str::<Vec<String>>("a=1"),
            Err(Error::InvalidState)
        ));
    }

    #[test]
    fn section_requested_as_scalar_is_invalid_state() {
        #[derive(Debug, Deserialize)]
        struct Flat {
            #[allow(dead_code)]
            server: String,
        }
        assert!(matches!(
            from_str::<Flat>("[server]\nport=1\n"),
            Err(Error::InvalidState)
        ));
    }

    #[test]
    fn value_requested_as_map_is_invalid_state() {
        let err = from_str::<AppConfig>("database=oops\n").unwrap_err();
        assert!(matches!(err, Error::InvalidState));
    }

    #[test]
    fn value_shapes() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Shapes {
            flag: bool,
            letter: char,
            ratio: f32,
            big: i128,
            mode: Mode,
            nothing: (),
            maybe: Option<u8>,
        }
        let shapes: Shapes = from_str(
            "flag=true\nletter=x\nratio=0.25\nbig=-170141183460469231731687303715884105728\nmode=slow\nnothing=\nmaybe=7\n",
        )
        .unwrap();
        assert_eq!(
            shapes,
            Shapes {
                flag: true,
                letter: 'x',
                ratio: 0.25,
                big: i128::MIN,
                mode: Mode::Slow,
                nothing: (),
                maybe: Some(7),
            }
        );
    }

    #[test]
    fn unknown_sections_are_ignored_by_structs() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct OnlyName {
            name: String,
        }
        let parsed: OnlyName = from_str("name=x\nextra=1\n[junk]\na=b\n").unwrap();
        assert_eq!(parsed.name, "x");
    }

    #[test]
    fn empty_input_is_empty_map() {
        let doc: HashMap<String, HashMap<String, String>> =
            from_str("; just a comment\n\n").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn section_shadows_root_key_of_same_name() {
        #[derive(Debug, Deserialize)]
        struct Named {
            name: BTreeMap<String, String>,
        }
        let parsed: Named = from_str("name=x\n[name]\nk=v\n").unwrap();
        assert_eq!(parsed.name, section(&[("k", "v")]));

        let doc: Document = from_str("name=x\n[name]\nk=v\n").unwrap();
        assert_eq!(doc[""]["name"], "x");
    }

    #[test]
    fn explicit_empty_header_joins_unnamed_section() {
        let doc: Document = from_str("a=1\n[s]\nb=2\n[]\nc=3\n").unwrap();
        assert_eq!(doc[""], section(&[("a", "1"), ("c", "3")]));
    }
}
