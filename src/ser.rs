//! serde serializer for INI documents.
//!
//! The value must be a map or struct. Its scalar entries are written as
//! `key=value` lines before any section; its map or struct entries become
//! `[section]` blocks of scalars. Anything deeper is rejected.
//!
//! `None` entries are skipped entirely, so an `Option` field round-trips as
//! an absent key. `()` is written as an empty value.
//!
//! There is no escaping, so text the parser would read back differently is
//! refused: keys containing `=` or starting with `;`, `#` or `[`, section
//! names the parser rejects, and any key, value or name with surrounding
//! whitespace or a line break.

use std::io::Write;

use serde::ser::{self, Impossible, Serialize};

use crate::parse::Item;
use crate::write::{LineEnding, Writer};

pub use crate::error::{SerError as Error, UnsupportedType};

pub type Result<T> = std::result::Result<T, Error>;

/// Serializes values into INI [`Item`]s fed to a [`Writer`].
#[derive(Debug)]
pub struct Serializer<W> {
    writer: Writer<W>,
    in_section: bool,
}

impl<W> Serializer<W> {
    pub fn new(writer: Writer<W>) -> Self {
        Self {
            writer,
            in_section: false,
        }
    }

    pub fn into_inner(self) -> Writer<W> {
        self.writer
    }
}

impl<W: Write> Serializer<W> {
    /// Write a key of the unnamed section. Only possible before the first header.
    fn write_root_value(&mut self, key: String, value: String) -> Result<()> {
        if self.in_section {
            return Err(Error::OrphanValue);
        }
        check_pair(&key, &value)?;
        self.writer.write(&Item::Value { key, value })?;
        Ok(())
    }

    fn write_section(&mut self, name: String, entries: Vec<(String, String)>) -> Result<()> {
        tracing::debug!(%name, entries = entries.len(), "writing INI section");

        // Nothing of the section is written unless all of it can be.
        for (key, value) in &entries {
            check_pair(key, value)?;
        }

        if name.is_empty() {
            // The unnamed section needs no header, but only while nothing
            // else has opened one.
            if self.in_section {
                return Err(Error::OrphanValue);
            }
        } else {
            check_section_name(&name)?;
            self.writer.write(&Item::Section { name })?;
            self.in_section = true;
        }

        for (key, value) in entries {
            self.writer.write(&Item::Value { key, value })?;
        }
        Ok(())
    }
}

// The parser trims every line and the text around `=`, so anything that
// trimming would change cannot be written.
fn is_padded(s: &str) -> bool {
    s.trim() != s
}

fn has_line_break(s: &str) -> bool {
    s.contains(['\n', '\r'])
}

/// A key must read back as the same key: no `=`, and nothing that would turn
/// the line into a comment or a header.
fn check_pair(key: &str, value: &str) -> Result<()> {
    if is_padded(key)
        || has_line_break(key)
        || key.contains('=')
        || key.starts_with([';', '#', '[', '\u{feff}'])
    {
        return Err(Error::InvalidKey(key.to_string()));
    }
    if is_padded(value) || has_line_break(value) {
        return Err(Error::InvalidValue(value.to_string()));
    }
    Ok(())
}

/// Mirrors the header rule of [`parse_line`](crate::parse::parse_line).
fn check_section_name(name: &str) -> Result<()> {
    if is_padded(name) || name.chars().any(|c| c == '[' || c == ']' || c.is_control()) {
        return Err(Error::InvalidSectionName(name.to_string()));
    }
    Ok(())
}

impl<'a, W: Write> ser::Serializer for &'a mut Serializer<W> {
    type Ok = ();
    type Error = Error;
    type SerializeSeq = Impossible<(), Error>;
    type SerializeTuple = Impossible<(), Error>;
    type SerializeTupleStruct = Impossible<(), Error>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = DocumentSerializer<'a, W>;
    type SerializeStruct = DocumentSerializer<'a, W>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, _v: bool) -> Result<()> {
        Err(UnsupportedType::Bool.into())
    }

    fn serialize_i8(self, _v: i8) -> Result<()> {
        Err(UnsupportedType::Scalar.into())
    }

    fn serialize_i16(self, _v: i16) -> Result<()> {
        Err(UnsupportedType::Scalar.into())
    }

    fn serialize_i32(self, _v: i32) -> Result<()> {
        Err(UnsupportedType::Scalar.into())
    }

    fn serialize_i64(self, _v: i64) -> Result<()> {
        Err(UnsupportedType::Scalar.into())
    }

    fn serialize_u8(self, _v: u8) -> Result<()> {
        Err(UnsupportedType::Scalar.into())
    }

    fn serialize_u16(self, _v: u16) -> Result<()> {
        Err(UnsupportedType::Scalar.into())
    }

    fn serialize_u32(self, _v: u32) -> Result<()> {
        Err(UnsupportedType::Scalar.into())
    }

    fn serialize_u64(self, _v: u64) -> Result<()> {
        Err(UnsupportedType::Scalar.into())
    }

    fn serialize_f32(self, _v: f32) -> Result<()> {
        Err(UnsupportedType::Scalar.into())
    }

    fn serialize_f64(self, _v: f64) -> Result<()> {
        Err(UnsupportedType::Scalar.into())
    }

    fn serialize_char(self, _v: char) -> Result<()> {
        Err(UnsupportedType::Scalar.into())
    }

    fn serialize_str(self, _v: &str) -> Result<()> {
        Err(UnsupportedType::Scalar.into())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<()> {
        Err(UnsupportedType::Bytes.into())
    }

    fn serialize_none(self) -> Result<()> {
        Err(UnsupportedType::None.into())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        Err(UnsupportedType::Unit.into())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        Err(UnsupportedType::Unit.into())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<()> {
        Err(UnsupportedType::Scalar.into())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<()> {
        Err(UnsupportedType::Map.into())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(UnsupportedType::Seq.into())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(UnsupportedType::Seq.into())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(UnsupportedType::Seq.into())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(UnsupportedType::Seq.into())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(DocumentSerializer {
            ser: self,
            key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(UnsupportedType::Map.into())
    }
}

// --- Top-level map ---

/// The top-level map: scalar entries go to the unnamed section, map entries
/// become sections.
pub struct DocumentSerializer<'a, W> {
    ser: &'a mut Serializer<W>,
    key: Option<String>,
}

impl<W: Write> ser::SerializeMap for DocumentSerializer<'_, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
        self.key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let key = self.key.take().ok_or(Error::MapKeyMissing)?;
        value.serialize(EntrySerializer {
            ser: &mut *self.ser,
            key,
        })
    }

    fn end(self) -> Result<()> {
        match self.key {
            Some(_) => Err(Error::MapKeyMissing),
            None => Ok(()),
        }
    }
}

impl<W: Write> ser::SerializeStruct for DocumentSerializer<'_, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(EntrySerializer {
            ser: &mut *self.ser,
            key: key.to_string(),
        })
    }

    fn end(self) -> Result<()> {
        ser::SerializeMap::end(self)
    }
}

/// One entry of the top-level map: either a root key or a whole section.
struct EntrySerializer<'a, W> {
    ser: &'a mut Serializer<W>,
    key: String,
}

impl<W: Write> EntrySerializer<'_, W> {
    fn emit(self, value: String) -> Result<()> {
        self.ser.write_root_value(self.key, value)
    }
}

impl<'a, W: Write> ser::Serializer for EntrySerializer<'a, W> {
    type Ok = ();
    type Error = Error;
    type SerializeSeq = Impossible<(), Error>;
    type SerializeTuple = Impossible<(), Error>;
    type SerializeTupleStruct = Impossible<(), Error>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = SectionSerializer<'a, W>;
    type SerializeStruct = SectionSerializer<'a, W>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.emit(v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.emit(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.emit(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.emit(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.emit(v.to_string())
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        self.emit(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.emit(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.emit(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.emit(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.emit(v.to_string())
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        self.emit(v.to_string())
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.emit(v.to_string())
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.emit(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<()> {
        self.emit(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.emit(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<()> {
        Err(UnsupportedType::Bytes.into())
    }

    fn serialize_none(self) -> Result<()> {
        tracing::trace!(key = %self.key, "skipping None entry");
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<()> {
        value.serialize(self)
    }

    // Unit reads back from an empty value.
    fn serialize_unit(self) -> Result<()> {
        self.emit(String::new())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.emit(String::new())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.emit(variant.to_string())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<()> {
        Err(UnsupportedType::Map.into())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(UnsupportedType::Seq.into())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(UnsupportedType::Seq.into())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(UnsupportedType::Seq.into())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(UnsupportedType::Seq.into())
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(SectionSerializer {
            ser: self.ser,
            name: self.key,
            entries: Vec::with_capacity(len.unwrap_or(0)),
            key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(UnsupportedType::Map.into())
    }
}

// --- Sections ---

/// Buffers one section's pairs and writes the header plus values on `end`.
pub struct SectionSerializer<'a, W> {
    ser: &'a mut Serializer<W>,
    name: String,
    entries: Vec<(String, String)>,
    key: Option<String>,
}

impl<W> SectionSerializer<'_, W> {
    fn push<T: Serialize + ?Sized>(&mut self, key: String, value: &T) -> Result<()> {
        match value.serialize(ScalarSerializer)? {
            Some(value) => self.entries.push((key, value)),
            None => tracing::trace!(section = %self.name, %key, "skipping None entry"),
        }
        Ok(())
    }
}

impl<W: Write> ser::SerializeMap for SectionSerializer<'_, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
        self.key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let key = self.key.take().ok_or(Error::MapKeyMissing)?;
        self.push(key, value)
    }

    fn end(self) -> Result<()> {
        if self.key.is_some() {
            return Err(Error::MapKeyMissing);
        }
        self.ser.write_section(self.name, self.entries)
    }
}

impl<W: Write> ser::SerializeStruct for SectionSerializer<'_, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.push(key.to_string(), value)
    }

    fn end(self) -> Result<()> {
        ser::SerializeMap::end(self)
    }
}

// --- Section values ---

/// Renders a value inside a section as text. `None` means "omit this key".
struct ScalarSerializer;

impl ser::Serializer for ScalarSerializer {
    type Ok = Option<String>;
    type Error = Error;
    type SerializeSeq = Impossible<Option<String>, Error>;
    type SerializeTuple = Impossible<Option<String>, Error>;
    type SerializeTupleStruct = Impossible<Option<String>, Error>;
    type SerializeTupleVariant = Impossible<Option<String>, Error>;
    type SerializeMap = Impossible<Option<String>, Error>;
    type SerializeStruct = Impossible<Option<String>, Error>;
    type SerializeStructVariant = Impossible<Option<String>, Error>;

    fn serialize_bool(self, v: bool) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i8(self, v: i8) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i16(self, v: i16) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i32(self, v: i32) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i64(self, v: i64) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i128(self, v: i128) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u8(self, v: u8) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u16(self, v: u16) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u32(self, v: u32) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u64(self, v: u64) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u128(self, v: u128) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_f32(self, v: f32) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_f64(self, v: f64) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_char(self, v: char) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Option<String>> {
        Err(UnsupportedType::Bytes.into())
    }

    fn serialize_none(self) -> Result<Option<String>> {
        Ok(None)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Option<String>> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Option<String>> {
        Ok(Some(String::new()))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Option<String>> {
        Ok(Some(String::new()))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Option<String>> {
        Ok(Some(variant.to_string()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Option<String>> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Option<String>> {
        Err(UnsupportedType::Map.into())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(UnsupportedType::Seq.into())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(UnsupportedType::Seq.into())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(UnsupportedType::Seq.into())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(UnsupportedType::Seq.into())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::TopLevelMap)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::TopLevelMap)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::TopLevelMap)
    }
}

// --- Key serializer (section names and keys must be strings) ---

struct KeySerializer;

impl ser::Serializer for KeySerializer {
    type Ok = String;
    type Error = Error;
    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_unit_variant(self, _: &'static str, _: u32, v: &'static str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        v: &T,
    ) -> Result<String> {
        v.serialize(self)
    }

    fn serialize_bool(self, _: bool) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_i8(self, _: i8) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_i16(self, _: i16) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_i32(self, _: i32) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_i64(self, _: i64) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_u8(self, _: u8) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_u16(self, _: u16) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_u32(self, _: u32) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_u64(self, _: u64) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_f32(self, _: f32) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_f64(self, _: f64) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_bytes(self, _: &[u8]) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_none(self) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_some<T: Serialize + ?Sized>(self, _: &T) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_unit(self) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_unit_struct(self, _: &'static str) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: &T,
    ) -> Result<String> {
        Err(Error::NonStringKey)
    }
    fn serialize_seq(self, _: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::NonStringKey)
    }
    fn serialize_tuple(self, _: usize) -> Result<Self::SerializeTuple> {
        Err(Error::NonStringKey)
    }
    fn serialize_tuple_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::NonStringKey)
    }
    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::NonStringKey)
    }
    fn serialize_map(self, _: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::NonStringKey)
    }
    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self::SerializeStruct> {
        Err(Error::NonStringKey)
    }
    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::NonStringKey)
    }
}

/// Serialize `value` as INI into `writer`, using the default [`LineEnding`].
pub fn to_writer<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> Result<()> {
    let mut ser = Serializer::new(Writer::new(writer, LineEnding::default()));
    value.serialize(&mut ser)
}

pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(128);
    to_writer(&mut out, value)?;
    Ok(out)
}

pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    String::from_utf8(to_vec(value)?).map_err(|e| Error::Custom(e.to_string()))
}
