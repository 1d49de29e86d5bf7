//! Serde serializer that builds a [`Tag`] tree from any `Serialize` value,
//! preserving integer widths: an `i32` always becomes an `Int` tag, never a
//! `Long`.

use serde::ser::{self, Serialize};

use conduit_common::error::ProtocolError;

use crate::{Compound, Tag, TagKind, TOKEN_BYTE_ARRAY, TOKEN_INT_ARRAY, TOKEN_LONG_ARRAY};

/// Serialises a value into a single [`Tag`].
pub struct TagSerializer;

impl ser::Serializer for TagSerializer {
    type Ok = Tag;
    type Error = ProtocolError;

    type SerializeSeq = SerializeList;
    type SerializeTuple = SerializeList;
    type SerializeTupleStruct = SerializeList;
    type SerializeTupleVariant = ser::Impossible<Tag, ProtocolError>;
    type SerializeMap = SerializeCompound;
    type SerializeStruct = SerializeCompound;
    type SerializeStructVariant = ser::Impossible<Tag, ProtocolError>;

    fn serialize_bool(self, v: bool) -> Result<Tag, ProtocolError> {
        Ok(Tag::Byte(v as i8))
    }

    fn serialize_i8(self, v: i8) -> Result<Tag, ProtocolError> {
        Ok(Tag::Byte(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Tag, ProtocolError> {
        Ok(Tag::Short(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Tag, ProtocolError> {
        Ok(Tag::Int(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Tag, ProtocolError> {
        Ok(Tag::Long(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Tag, ProtocolError> {
        Ok(Tag::Byte(v as i8))
    }

    fn serialize_u16(self, v: u16) -> Result<Tag, ProtocolError> {
        Ok(Tag::Short(v as i16))
    }

    fn serialize_u32(self, v: u32) -> Result<Tag, ProtocolError> {
        Ok(Tag::Int(v as i32))
    }

    fn serialize_u64(self, v: u64) -> Result<Tag, ProtocolError> {
        Ok(Tag::Long(v as i64))
    }

    fn serialize_f32(self, v: f32) -> Result<Tag, ProtocolError> {
        Ok(Tag::Float(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Tag, ProtocolError> {
        Ok(Tag::Double(v))
    }

    fn serialize_char(self, v: char) -> Result<Tag, ProtocolError> {
        Ok(Tag::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Tag, ProtocolError> {
        Ok(Tag::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Tag, ProtocolError> {
        Ok(Tag::ByteArray(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Tag, ProtocolError> {
        Err(ser::Error::custom(
            "NBT has no representation for None; skip the field instead",
        ))
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Tag, ProtocolError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Tag, ProtocolError> {
        Err(ser::Error::custom("NBT has no representation for unit"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Tag, ProtocolError> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Tag, ProtocolError> {
        Ok(Tag::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        value: &T,
    ) -> Result<Tag, ProtocolError> {
        let tag = value.serialize(TagSerializer)?;
        match name {
            TOKEN_BYTE_ARRAY => match tag {
                Tag::List(_, items) => {
                    let mut bytes = Vec::with_capacity(items.len());
                    for item in items {
                        match item {
                            Tag::Byte(b) => bytes.push(b as u8),
                            _ => return Err(ser::Error::custom("byte array element is not a byte")),
                        }
                    }
                    Ok(Tag::ByteArray(bytes))
                }
                Tag::ByteArray(bytes) => Ok(Tag::ByteArray(bytes)),
                _ => Err(ser::Error::custom("byte array wrapper holds a non-sequence")),
            },
            TOKEN_INT_ARRAY => match tag {
                Tag::List(_, items) => {
                    let mut ints = Vec::with_capacity(items.len());
                    for item in items {
                        match item {
                            Tag::Int(i) => ints.push(i),
                            _ => return Err(ser::Error::custom("int array element is not an int")),
                        }
                    }
                    Ok(Tag::IntArray(ints))
                }
                _ => Err(ser::Error::custom("int array wrapper holds a non-sequence")),
            },
            TOKEN_LONG_ARRAY => match tag {
                Tag::List(_, items) => {
                    let mut longs = Vec::with_capacity(items.len());
                    for item in items {
                        match item {
                            Tag::Long(l) => longs.push(l),
                            _ => return Err(ser::Error::custom("long array element is not a long")),
                        }
                    }
                    Ok(Tag::LongArray(longs))
                }
                _ => Err(ser::Error::custom("long array wrapper holds a non-sequence")),
            },
            _ => Ok(tag),
        }
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Tag, ProtocolError> {
        Err(ser::Error::custom("NBT cannot represent newtype variants"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeList, ProtocolError> {
        Ok(SerializeList {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeList, ProtocolError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SerializeList, ProtocolError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, ProtocolError> {
        Err(ser::Error::custom("NBT cannot represent tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeCompound, ProtocolError> {
        Ok(SerializeCompound {
            compound: Compound::new(),
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<SerializeCompound, ProtocolError> {
        self.serialize_map(None)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, ProtocolError> {
        Err(ser::Error::custom("NBT cannot represent struct variants"))
    }
}

pub struct SerializeList {
    items: Vec<Tag>,
}

impl SerializeList {
    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ProtocolError> {
        let tag = value.serialize(TagSerializer)?;
        if let Some(first) = self.items.first() {
            if first.kind() != tag.kind() {
                return Err(ser::Error::custom(format!(
                    "list of {:?} cannot hold a {:?}",
                    first.kind(),
                    tag.kind()
                )));
            }
        }
        self.items.push(tag);
        Ok(())
    }

    fn finish(self) -> Tag {
        let kind = self.items.first().map_or(TagKind::End, Tag::kind);
        Tag::List(kind, self.items)
    }
}

impl ser::SerializeSeq for SerializeList {
    type Ok = Tag;
    type Error = ProtocolError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ProtocolError> {
        self.push(value)
    }

    fn end(self) -> Result<Tag, ProtocolError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeList {
    type Ok = Tag;
    type Error = ProtocolError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ProtocolError> {
        self.push(value)
    }

    fn end(self) -> Result<Tag, ProtocolError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeList {
    type Ok = Tag;
    type Error = ProtocolError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ProtocolError> {
        self.push(value)
    }

    fn end(self) -> Result<Tag, ProtocolError> {
        Ok(self.finish())
    }
}

pub struct SerializeCompound {
    compound: Compound,
    pending_key: Option<String>,
}

impl ser::SerializeMap for SerializeCompound {
    type Ok = Tag;
    type Error = ProtocolError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), ProtocolError> {
        match key.serialize(TagSerializer)? {
            Tag::String(s) => {
                self.pending_key = Some(s);
                Ok(())
            }
            other => Err(ser::Error::custom(format!(
                "compound keys must be strings, got {:?}",
                other.kind()
            ))),
        }
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ProtocolError> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| <ProtocolError as ser::Error>::custom("value serialised before key"))?;
        let tag = value.serialize(TagSerializer)?;
        self.compound.insert(key, tag);
        Ok(())
    }

    fn end(self) -> Result<Tag, ProtocolError> {
        Ok(Tag::Compound(self.compound))
    }
}

impl ser::SerializeStruct for SerializeCompound {
    type Ok = Tag;
    type Error = ProtocolError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), ProtocolError> {
        let tag = value.serialize(TagSerializer)?;
        self.compound.insert(key, tag);
        Ok(())
    }

    fn end(self) -> Result<Tag, ProtocolError> {
        Ok(Tag::Compound(self.compound))
    }
}
