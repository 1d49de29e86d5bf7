use byteorder::{ReadBytesExt, WriteBytesExt};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::io::{Read, Write};

use conduit_common::error::{ProtocolError, ProtocolResult};
use conduit_common::limits::{NBT_DEPTH_LIMIT, NBT_LENGTH_LIMIT};

pub mod de;
mod encoding;
pub mod ser;

pub use encoding::Encoding;

/// The thirteen NBT tag kinds. The discriminant is the tag byte on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TagKind {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl TagKind {
    pub fn from_id(id: u8) -> Option<TagKind> {
        match id {
            0 => Some(TagKind::End),
            1 => Some(TagKind::Byte),
            2 => Some(TagKind::Short),
            3 => Some(TagKind::Int),
            4 => Some(TagKind::Long),
            5 => Some(TagKind::Float),
            6 => Some(TagKind::Double),
            7 => Some(TagKind::ByteArray),
            8 => Some(TagKind::String),
            9 => Some(TagKind::List),
            10 => Some(TagKind::Compound),
            11 => Some(TagKind::IntArray),
            12 => Some(TagKind::LongArray),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }
}

/// A string-keyed mapping of tags that preserves insertion order, so that a
/// decoded compound re-encodes byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
    entries: Vec<(String, Tag)>,
}

impl Compound {
    pub fn new() -> Self {
        Compound {
            entries: Vec::new(),
        }
    }

    /// Inserts a tag under the given name. Replaces an existing entry in
    /// place, keeping its position.
    pub fn insert(&mut self, name: impl Into<String>, tag: Tag) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = tag;
        } else {
            self.entries.push((name, tag));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, tag)| tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Tag)> {
        self.entries.iter()
    }
}

impl Compound {
    /// Reads a compound written as a named root tag, discarding the name.
    /// Item NBT and packet NBT blobs are framed this way.
    pub fn read_root<R: Read>(reader: &mut R, encoding: Encoding) -> ProtocolResult<Compound> {
        let (_, tag) = decode(reader, encoding)?;
        match tag {
            Tag::Compound(compound) => Ok(compound),
            other => Err(ProtocolError::malformed(
                "nbt root",
                format!("expected a compound, got {:?}", other.kind()),
            )),
        }
    }

    /// Writes this compound as a root tag with an empty name.
    pub fn write_root<W: Write>(&self, writer: &mut W, encoding: Encoding) -> ProtocolResult<()> {
        writer.write_u8(TagKind::Compound.id())?;
        write_string(writer, encoding, "")?;
        for (name, tag) in self.iter() {
            tag.write_named(writer, encoding, name)?;
        }
        writer.write_u8(TagKind::End.id())?;
        Ok(())
    }
}

impl FromIterator<(String, Tag)> for Compound {
    fn from_iter<I: IntoIterator<Item = (String, Tag)>>(iter: I) -> Self {
        let mut compound = Compound::new();
        for (name, tag) in iter {
            compound.insert(name, tag);
        }
        compound
    }
}

impl IntoIterator for Compound {
    type Item = (String, Tag);
    type IntoIter = std::vec::IntoIter<(String, Tag)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A single NBT value. Lists carry their element kind explicitly so that an
/// empty list keeps the kind it was decoded with.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    String(String),
    List(TagKind, Vec<Tag>),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Tag {
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::End => TagKind::End,
            Tag::Byte(_) => TagKind::Byte,
            Tag::Short(_) => TagKind::Short,
            Tag::Int(_) => TagKind::Int,
            Tag::Long(_) => TagKind::Long,
            Tag::Float(_) => TagKind::Float,
            Tag::Double(_) => TagKind::Double,
            Tag::ByteArray(_) => TagKind::ByteArray,
            Tag::String(_) => TagKind::String,
            Tag::List(_, _) => TagKind::List,
            Tag::Compound(_) => TagKind::Compound,
            Tag::IntArray(_) => TagKind::IntArray,
            Tag::LongArray(_) => TagKind::LongArray,
        }
    }

    /// Reads one named tag: the tag byte, the name, then the payload. A bare
    /// `End` byte yields `("", Tag::End)`, which terminates a compound.
    pub fn read_named<R: Read>(reader: &mut R, encoding: Encoding) -> ProtocolResult<(String, Tag)> {
        Self::read_named_at_depth(reader, encoding, 0)
    }

    fn read_named_at_depth<R: Read>(
        reader: &mut R,
        encoding: Encoding,
        depth: usize,
    ) -> ProtocolResult<(String, Tag)> {
        let id = reader.read_u8()?;
        let kind = TagKind::from_id(id)
            .ok_or_else(|| ProtocolError::malformed("nbt tag", format!("unknown tag ID {}", id)))?;
        if kind == TagKind::End {
            return Ok((String::new(), Tag::End));
        }
        let name = read_string(reader, encoding)?;
        let tag = Self::read_payload(reader, encoding, kind, depth)?;
        Ok((name, tag))
    }

    fn read_payload<R: Read>(
        reader: &mut R,
        encoding: Encoding,
        kind: TagKind,
        depth: usize,
    ) -> ProtocolResult<Tag> {
        if depth > NBT_DEPTH_LIMIT {
            return Err(ProtocolError::limit(
                "nbt depth",
                NBT_DEPTH_LIMIT as u32,
                depth as u32,
            ));
        }
        match kind {
            TagKind::End => Ok(Tag::End),
            TagKind::Byte => Ok(Tag::Byte(reader.read_i8()?)),
            TagKind::Short => Ok(Tag::Short(encoding.read_i16(reader)?)),
            TagKind::Int => Ok(Tag::Int(encoding.read_i32(reader)?)),
            TagKind::Long => Ok(Tag::Long(encoding.read_i64(reader)?)),
            TagKind::Float => Ok(Tag::Float(encoding.read_f32(reader)?)),
            TagKind::Double => Ok(Tag::Double(encoding.read_f64(reader)?)),
            TagKind::ByteArray => {
                let length = read_seq_len(reader, encoding, "nbt byte array")?;
                let mut bytes = vec![0u8; length];
                reader.read_exact(&mut bytes)?;
                Ok(Tag::ByteArray(bytes))
            }
            TagKind::String => Ok(Tag::String(read_string(reader, encoding)?)),
            TagKind::List => {
                let element_id = reader.read_u8()?;
                let element_kind = TagKind::from_id(element_id).ok_or_else(|| {
                    ProtocolError::malformed("nbt list", format!("unknown tag ID {}", element_id))
                })?;
                let length = read_seq_len(reader, encoding, "nbt list")?;
                if element_kind == TagKind::End && length != 0 {
                    return Err(ProtocolError::malformed(
                        "nbt list",
                        "non-empty list of End tags",
                    ));
                }
                let mut items = Vec::with_capacity(length);
                for _ in 0..length {
                    items.push(Self::read_payload(reader, encoding, element_kind, depth + 1)?);
                }
                Ok(Tag::List(element_kind, items))
            }
            TagKind::Compound => {
                let mut compound = Compound::new();
                loop {
                    let (name, tag) = Self::read_named_at_depth(reader, encoding, depth + 1)?;
                    if let Tag::End = tag {
                        break;
                    }
                    compound.insert(name, tag);
                }
                Ok(Tag::Compound(compound))
            }
            TagKind::IntArray => {
                let length = read_seq_len(reader, encoding, "nbt int array")?;
                let mut ints = Vec::with_capacity(length);
                for _ in 0..length {
                    ints.push(encoding.read_i32(reader)?);
                }
                Ok(Tag::IntArray(ints))
            }
            TagKind::LongArray => {
                let length = read_seq_len(reader, encoding, "nbt long array")?;
                let mut longs = Vec::with_capacity(length);
                for _ in 0..length {
                    longs.push(encoding.read_i64(reader)?);
                }
                Ok(Tag::LongArray(longs))
            }
        }
    }

    /// Writes this tag with a name: the tag byte, the name (omitted for
    /// `End`), then the payload.
    pub fn write_named<W: Write>(
        &self,
        writer: &mut W,
        encoding: Encoding,
        name: &str,
    ) -> ProtocolResult<()> {
        writer.write_u8(self.kind().id())?;
        if !matches!(self, Tag::End) {
            write_string(writer, encoding, name)?;
        }
        self.write_payload(writer, encoding)
    }

    fn write_payload<W: Write>(&self, writer: &mut W, encoding: Encoding) -> ProtocolResult<()> {
        match self {
            Tag::End => Ok(()),
            Tag::Byte(v) => Ok(writer.write_i8(*v)?),
            Tag::Short(v) => Ok(encoding.write_i16(writer, *v)?),
            Tag::Int(v) => Ok(encoding.write_i32(writer, *v)?),
            Tag::Long(v) => Ok(encoding.write_i64(writer, *v)?),
            Tag::Float(v) => Ok(encoding.write_f32(writer, *v)?),
            Tag::Double(v) => Ok(encoding.write_f64(writer, *v)?),
            Tag::ByteArray(v) => {
                encoding.write_seq_len(writer, v.len())?;
                writer.write_all(v)?;
                Ok(())
            }
            Tag::String(v) => write_string(writer, encoding, v),
            Tag::List(element_kind, items) => {
                for item in items {
                    if item.kind() != *element_kind {
                        return Err(ProtocolError::malformed(
                            "nbt list",
                            format!(
                                "list of {:?} holds a {:?} element",
                                element_kind,
                                item.kind()
                            ),
                        ));
                    }
                }
                writer.write_u8(element_kind.id())?;
                encoding.write_seq_len(writer, items.len())?;
                for item in items {
                    item.write_payload(writer, encoding)?;
                }
                Ok(())
            }
            Tag::Compound(compound) => {
                for (name, tag) in compound.iter() {
                    tag.write_named(writer, encoding, name)?;
                }
                writer.write_u8(TagKind::End.id())?;
                Ok(())
            }
            Tag::IntArray(v) => {
                encoding.write_seq_len(writer, v.len())?;
                for i in v {
                    encoding.write_i32(writer, *i)?;
                }
                Ok(())
            }
            Tag::LongArray(v) => {
                encoding.write_seq_len(writer, v.len())?;
                for l in v {
                    encoding.write_i64(writer, *l)?;
                }
                Ok(())
            }
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(compound) => Some(compound),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Tag]> {
        match self {
            Tag::List(_, items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Tag::Long(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Tag::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Tag::Short(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Tag::Byte(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Tag::Double(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Tag::Float(n) => Some(*n),
            _ => None,
        }
    }
}

/// Reads one top-level named tag. A bare `End` at the top level is invalid
/// here, unlike inside a compound body.
pub fn decode<R: Read>(reader: &mut R, encoding: Encoding) -> ProtocolResult<(String, Tag)> {
    let (name, tag) = Tag::read_named(reader, encoding)?;
    if let Tag::End = tag {
        return Err(ProtocolError::malformed("nbt root", "End tag at top level"));
    }
    Ok((name, tag))
}

/// Writes one top-level named tag.
pub fn encode<W: Write>(
    writer: &mut W,
    encoding: Encoding,
    name: &str,
    tag: &Tag,
) -> ProtocolResult<()> {
    tag.write_named(writer, encoding, name)
}

/// Serialises a value into a tag tree through its serde implementation.
pub fn to_tag<T: Serialize>(value: &T) -> ProtocolResult<Tag> {
    value.serialize(ser::TagSerializer)
}

/// Reconstructs a value from a tag tree through its serde implementation.
pub fn from_tag<T: DeserializeOwned>(tag: &Tag) -> ProtocolResult<T> {
    T::deserialize(de::TagDeserializer::new(tag))
}

fn read_string<R: Read>(reader: &mut R, encoding: Encoding) -> ProtocolResult<String> {
    let length = encoding.read_string_len(reader)?;
    if length > NBT_LENGTH_LIMIT {
        return Err(ProtocolError::limit("nbt string", NBT_LENGTH_LIMIT, length));
    }
    let mut bytes = vec![0u8; length as usize];
    reader.read_exact(&mut bytes)?;
    String::from_utf8(bytes)
        .map_err(|e| ProtocolError::malformed("nbt string", e.to_string()))
}

fn write_string<W: Write>(writer: &mut W, encoding: Encoding, s: &str) -> ProtocolResult<()> {
    encoding.write_string_len(writer, s.len())?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

fn read_seq_len<R: Read>(
    reader: &mut R,
    encoding: Encoding,
    context: &'static str,
) -> ProtocolResult<usize> {
    let length = encoding.read_seq_len(reader)?;
    if length < 0 {
        return Err(ProtocolError::negative(context, length));
    }
    if length as u32 > NBT_LENGTH_LIMIT {
        return Err(ProtocolError::limit(context, NBT_LENGTH_LIMIT, length as u32));
    }
    Ok(length as usize)
}

/// Wrapper that makes a `Vec<u8>` serialise as a `ByteArray` tag rather than
/// a list of bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ByteArray(pub Vec<u8>);

/// Wrapper that makes a `Vec<i32>` serialise as an `IntArray` tag rather
/// than a list of ints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntArray(pub Vec<i32>);

/// Wrapper that makes a `Vec<i64>` serialise as a `LongArray` tag rather
/// than a list of longs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LongArray(pub Vec<i64>);

pub(crate) const TOKEN_BYTE_ARRAY: &str = "__nbt_byte_array";
pub(crate) const TOKEN_INT_ARRAY: &str = "__nbt_int_array";
pub(crate) const TOKEN_LONG_ARRAY: &str = "__nbt_long_array";

impl Serialize for ByteArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(TOKEN_BYTE_ARRAY, &self.0)
    }
}

impl<'de> Deserialize<'de> for ByteArray {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(ByteArray(Vec::<u8>::deserialize(deserializer)?))
    }
}

impl Serialize for IntArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(TOKEN_INT_ARRAY, &self.0)
    }
}

impl<'de> Deserialize<'de> for IntArray {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(IntArray(Vec::<i32>::deserialize(deserializer)?))
    }
}

impl Serialize for LongArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(TOKEN_LONG_ARRAY, &self.0)
    }
}

impl<'de> Deserialize<'de> for LongArray {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(LongArray(Vec::<i64>::deserialize(deserializer)?))
    }
}

/// A complete NBT file: a single named root tag, optionally gzip-compressed
/// on disk.
pub struct NbtFile {
    pub root: Tag,
    pub name: String,
}

impl NbtFile {
    pub fn new(name: String, root: Tag) -> Self {
        NbtFile { root, name }
    }

    pub fn read<R: Read>(reader: &mut R, encoding: Encoding) -> ProtocolResult<Self> {
        let (name, root) = decode(reader, encoding)?;
        Ok(NbtFile { root, name })
    }

    pub fn write<W: Write>(&self, writer: &mut W, encoding: Encoding) -> ProtocolResult<()> {
        self.root.write_named(writer, encoding, &self.name)
    }

    pub fn read_gzip<R: Read>(reader: &mut R, encoding: Encoding) -> ProtocolResult<Self> {
        let mut decoder = GzDecoder::new(reader);
        Self::read(&mut decoder, encoding)
    }

    pub fn write_gzip<W: Write>(&self, writer: &mut W, encoding: Encoding) -> ProtocolResult<()> {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        self.write(&mut encoder, encoding)?;
        encoder.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn roundtrip(tag: &Tag, encoding: Encoding) -> Tag {
        let mut buffer = Vec::new();
        tag.write_named(&mut buffer, encoding, "root").unwrap();
        let mut cursor = Cursor::new(buffer);
        let (name, read) = Tag::read_named(&mut cursor, encoding).unwrap();
        assert_eq!(name, "root");
        read
    }

    #[test]
    fn test_tag_kind_ids() {
        assert_eq!(Tag::End.kind().id(), 0);
        assert_eq!(Tag::Byte(0).kind().id(), 1);
        assert_eq!(Tag::Short(0).kind().id(), 2);
        assert_eq!(Tag::Int(0).kind().id(), 3);
        assert_eq!(Tag::Long(0).kind().id(), 4);
        assert_eq!(Tag::Float(0.0).kind().id(), 5);
        assert_eq!(Tag::Double(0.0).kind().id(), 6);
        assert_eq!(Tag::ByteArray(vec![]).kind().id(), 7);
        assert_eq!(Tag::String(String::new()).kind().id(), 8);
        assert_eq!(Tag::List(TagKind::End, vec![]).kind().id(), 9);
        assert_eq!(Tag::Compound(Compound::new()).kind().id(), 10);
        assert_eq!(Tag::IntArray(vec![]).kind().id(), 11);
        assert_eq!(Tag::LongArray(vec![]).kind().id(), 12);
    }

    #[test]
    fn test_roundtrip_scalars_all_encodings() {
        let tags = vec![
            Tag::Byte(-42),
            Tag::Short(1234),
            Tag::Int(12345678),
            Tag::Long(123456789012),
            Tag::Float(3.5),
            Tag::Double(-7.25),
            Tag::ByteArray(vec![1, 2, 3]),
            Tag::String("Hello, World!".to_string()),
            Tag::List(TagKind::Int, vec![Tag::Int(1), Tag::Int(2), Tag::Int(3)]),
            Tag::IntArray(vec![-1, 0, 1]),
            Tag::LongArray(vec![i64::MIN, 0, i64::MAX]),
        ];
        for encoding in [
            Encoding::BigEndian,
            Encoding::LittleEndian,
            Encoding::NetworkLittleEndian,
        ] {
            for tag in &tags {
                assert_eq!(&roundtrip(tag, encoding), tag, "{:?}", encoding);
            }
        }
    }

    #[test]
    fn test_compound_preserves_insertion_order() {
        let mut compound = Compound::new();
        compound.insert("zulu", Tag::Byte(1));
        compound.insert("alpha", Tag::Byte(2));
        compound.insert("mike", Tag::Byte(3));

        let mut buffer = Vec::new();
        Tag::Compound(compound.clone())
            .write_named(&mut buffer, Encoding::LittleEndian, "")
            .unwrap();
        let mut again = Vec::new();
        roundtrip(&Tag::Compound(compound), Encoding::LittleEndian)
            .write_named(&mut again, Encoding::LittleEndian, "")
            .unwrap();
        assert_eq!(buffer, again);
    }

    #[test]
    fn test_empty_list_little_endian_bytes() {
        // Compound{"l": List<End>[]} under the little-endian variant.
        let mut compound = Compound::new();
        compound.insert("l", Tag::List(TagKind::End, vec![]));
        let mut buffer = Vec::new();
        Tag::Compound(compound)
            .write_named(&mut buffer, Encoding::LittleEndian, "")
            .unwrap();
        assert_eq!(
            buffer,
            [
                0x0a, 0x00, 0x00, // compound, empty name
                0x09, 0x01, 0x00, b'l', // list named "l"
                0x00, // element kind End
                0x00, 0x00, 0x00, 0x00, // length 0
                0x00, // end of compound
            ]
        );

        let mut cursor = Cursor::new(buffer);
        let (_, read) = Tag::read_named(&mut cursor, Encoding::LittleEndian).unwrap();
        let compound = read.as_compound().unwrap();
        assert_eq!(compound.get("l"), Some(&Tag::List(TagKind::End, vec![])));
    }

    #[test]
    fn test_variants_produce_distinct_bytes() {
        let tag = Tag::Int(70000);
        let mut be = Vec::new();
        let mut le = Vec::new();
        let mut network = Vec::new();
        tag.write_named(&mut be, Encoding::BigEndian, "n").unwrap();
        tag.write_named(&mut le, Encoding::LittleEndian, "n").unwrap();
        tag.write_named(&mut network, Encoding::NetworkLittleEndian, "n")
            .unwrap();
        assert_ne!(be, le);
        assert_ne!(le, network);
        assert_ne!(be, network);
    }

    #[test]
    fn test_unknown_tag_id_is_malformed() {
        let mut cursor = Cursor::new([0xFF, 0x00, 0x00]);
        let err = Tag::read_named(&mut cursor, Encoding::LittleEndian).unwrap_err();
        assert!(matches!(err, ProtocolError::Malformed { .. }));
    }

    #[test]
    fn test_top_level_end_rejected_by_decode() {
        let mut cursor = Cursor::new([0x00]);
        let err = decode(&mut cursor, Encoding::LittleEndian).unwrap_err();
        assert!(matches!(err, ProtocolError::Malformed { .. }));
    }

    #[test]
    fn test_negative_list_length_rejected() {
        // list named "l" with length -1, no elements
        let bytes = [
            0x09, 0x01, 0x00, b'l', 0x01, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        let mut cursor = Cursor::new(bytes);
        let err = Tag::read_named(&mut cursor, Encoding::LittleEndian).unwrap_err();
        assert!(matches!(err, ProtocolError::NegativeLength { .. }));
    }

    #[test]
    fn test_depth_guard_trips() {
        // A chain of nested list headers, each claiming one nested list.
        let mut bytes = vec![0x09, 0x00, 0x00];
        for _ in 0..NBT_DEPTH_LIMIT + 2 {
            // element kind List, length 1
            bytes.extend_from_slice(&[0x09, 0x01, 0x00, 0x00, 0x00]);
        }
        let mut cursor = Cursor::new(bytes);
        let err = Tag::read_named(&mut cursor, Encoding::LittleEndian).unwrap_err();
        assert!(matches!(err, ProtocolError::LimitExceeded { .. }));
    }

    #[test]
    fn test_mismatched_list_element_rejected_on_write() {
        let tag = Tag::List(TagKind::Int, vec![Tag::Int(1), Tag::Byte(2)]);
        let mut buffer = Vec::new();
        let err = tag
            .write_named(&mut buffer, Encoding::LittleEndian, "")
            .unwrap_err();
        assert!(matches!(err, ProtocolError::Malformed { .. }));
    }

    #[test]
    fn test_nbt_file_gzip_roundtrip() {
        let mut compound = Compound::new();
        compound.insert("name", Tag::String("Test".to_string()));
        compound.insert("value", Tag::Int(42));
        let original = NbtFile::new("level".to_string(), Tag::Compound(compound));

        let mut buffer = Vec::new();
        original.write_gzip(&mut buffer, Encoding::BigEndian).unwrap();
        let mut cursor = Cursor::new(buffer);
        let read = NbtFile::read_gzip(&mut cursor, Encoding::BigEndian).unwrap();
        assert_eq!(read.name, original.name);
        assert_eq!(read.root, original.root);
    }
}
