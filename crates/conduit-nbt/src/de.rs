//! Serde deserializer that reconstructs values from a [`Tag`] tree. The tag
//! kind drives dispatch, so integer widths survive the round trip.

use serde::de::{self, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;

use conduit_common::error::ProtocolError;

use crate::{Compound, Tag};

/// Deserialises a value out of a borrowed [`Tag`].
pub struct TagDeserializer<'a> {
    tag: &'a Tag,
}

impl<'a> TagDeserializer<'a> {
    pub fn new(tag: &'a Tag) -> Self {
        TagDeserializer { tag }
    }
}

impl<'de, 'a> de::Deserializer<'de> for TagDeserializer<'a> {
    type Error = ProtocolError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, ProtocolError> {
        match self.tag {
            Tag::End => Err(de::Error::custom("cannot deserialise an End tag")),
            Tag::Byte(v) => visitor.visit_i8(*v),
            Tag::Short(v) => visitor.visit_i16(*v),
            Tag::Int(v) => visitor.visit_i32(*v),
            Tag::Long(v) => visitor.visit_i64(*v),
            Tag::Float(v) => visitor.visit_f32(*v),
            Tag::Double(v) => visitor.visit_f64(*v),
            Tag::ByteArray(v) => visitor.visit_seq(ByteArrayAccess { iter: v.iter() }),
            Tag::String(v) => visitor.visit_str(v),
            Tag::List(_, items) => visitor.visit_seq(ListAccess { iter: items.iter() }),
            Tag::Compound(compound) => visitor.visit_map(CompoundAccess::new(compound)),
            Tag::IntArray(v) => visitor.visit_seq(IntArrayAccess { iter: v.iter() }),
            Tag::LongArray(v) => visitor.visit_seq(LongArrayAccess { iter: v.iter() }),
        }
    }

    fn deserialize_bool<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, ProtocolError> {
        match self.tag {
            Tag::Byte(v) => visitor.visit_bool(*v != 0),
            other => Err(de::Error::custom(format!(
                "expected a Byte for a bool, got {:?}",
                other.kind()
            ))),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, ProtocolError> {
        // A present tag is always Some; absent compound entries never reach
        // the deserializer at all.
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, ProtocolError> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, ProtocolError> {
        match self.tag {
            Tag::String(s) => visitor.visit_enum(s.as_str().into_deserializer()),
            other => Err(de::Error::custom(format!(
                "expected a String for a unit enum, got {:?}",
                other.kind()
            ))),
        }
    }

    forward_to_deserialize_any! {
        i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

struct ListAccess<'a> {
    iter: std::slice::Iter<'a, Tag>,
}

impl<'de, 'a> de::SeqAccess<'de> for ListAccess<'a> {
    type Error = ProtocolError;

    fn next_element_seed<T: de::DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, ProtocolError> {
        match self.iter.next() {
            Some(tag) => seed.deserialize(TagDeserializer::new(tag)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct ByteArrayAccess<'a> {
    iter: std::slice::Iter<'a, u8>,
}

impl<'de, 'a> de::SeqAccess<'de> for ByteArrayAccess<'a> {
    type Error = ProtocolError;

    fn next_element_seed<T: de::DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, ProtocolError> {
        match self.iter.next() {
            Some(b) => seed.deserialize((*b).into_deserializer()).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct IntArrayAccess<'a> {
    iter: std::slice::Iter<'a, i32>,
}

impl<'de, 'a> de::SeqAccess<'de> for IntArrayAccess<'a> {
    type Error = ProtocolError;

    fn next_element_seed<T: de::DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, ProtocolError> {
        match self.iter.next() {
            Some(i) => seed.deserialize((*i).into_deserializer()).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct LongArrayAccess<'a> {
    iter: std::slice::Iter<'a, i64>,
}

impl<'de, 'a> de::SeqAccess<'de> for LongArrayAccess<'a> {
    type Error = ProtocolError;

    fn next_element_seed<T: de::DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, ProtocolError> {
        match self.iter.next() {
            Some(l) => seed.deserialize((*l).into_deserializer()).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct CompoundAccess<'a> {
    iter: std::slice::Iter<'a, (String, Tag)>,
    value: Option<&'a Tag>,
}

impl<'a> CompoundAccess<'a> {
    fn new(compound: &'a Compound) -> Self {
        CompoundAccess {
            iter: compound.entries.iter(),
            value: None,
        }
    }
}

impl<'de, 'a> de::MapAccess<'de> for CompoundAccess<'a> {
    type Error = ProtocolError;

    fn next_key_seed<K: de::DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, ProtocolError> {
        match self.iter.next() {
            Some((name, tag)) => {
                self.value = Some(tag);
                seed.deserialize(name.as_str().into_deserializer()).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V: de::DeserializeSeed<'de>>(
        &mut self,
        seed: V,
    ) -> Result<V::Value, ProtocolError> {
        let tag = self
            .value
            .take()
            .ok_or_else(|| <ProtocolError as de::Error>::custom("value requested before key"))?;
        seed.deserialize(TagDeserializer::new(tag))
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_tag, to_tag, ByteArray, IntArray, LongArray, TagKind};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct ItemDisplay {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Damage")]
        damage: i16,
        #[serde(rename = "Unbreakable")]
        unbreakable: bool,
        lore: Vec<String>,
    }

    #[test]
    fn test_struct_binding_roundtrip() {
        let value = ItemDisplay {
            name: "Excalibur".to_string(),
            damage: 3,
            unbreakable: true,
            lore: vec!["ancient".to_string(), "sharp".to_string()],
        };
        let tag = to_tag(&value).unwrap();
        let back: ItemDisplay = from_tag(&tag).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_integer_widths_are_preserved() {
        #[derive(Serialize)]
        struct Widths {
            byte: i8,
            short: i16,
            int: i32,
            long: i64,
        }
        let tag = to_tag(&Widths {
            byte: 1,
            short: 2,
            int: 3,
            long: 4,
        })
        .unwrap();
        let compound = tag.as_compound().unwrap();
        assert_eq!(compound.get("byte").unwrap().kind(), TagKind::Byte);
        assert_eq!(compound.get("short").unwrap().kind(), TagKind::Short);
        assert_eq!(compound.get("int").unwrap().kind(), TagKind::Int);
        assert_eq!(compound.get("long").unwrap().kind(), TagKind::Long);
    }

    #[test]
    fn test_array_wrappers_force_array_tags() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Arrays {
            bytes: ByteArray,
            ints: IntArray,
            longs: LongArray,
        }
        let value = Arrays {
            bytes: ByteArray(vec![1, 2, 3]),
            ints: IntArray(vec![-1, 0, 1]),
            longs: LongArray(vec![i64::MAX]),
        };
        let tag = to_tag(&value).unwrap();
        let compound = tag.as_compound().unwrap();
        assert_eq!(compound.get("bytes").unwrap().kind(), TagKind::ByteArray);
        assert_eq!(compound.get("ints").unwrap().kind(), TagKind::IntArray);
        assert_eq!(compound.get("longs").unwrap().kind(), TagKind::LongArray);

        let back: Arrays = from_tag(&tag).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_plain_vec_becomes_list() {
        let tag = to_tag(&vec![1i32, 2, 3]).unwrap();
        assert_eq!(tag.kind(), TagKind::List);
    }

    #[test]
    fn test_missing_optional_field_is_none() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct WithOption {
            present: i32,
            missing: Option<i32>,
        }
        let mut compound = Compound::new();
        compound.insert("present", Tag::Int(7));
        let value: WithOption = from_tag(&Tag::Compound(compound)).unwrap();
        assert_eq!(
            value,
            WithOption {
                present: 7,
                missing: None
            }
        );
    }

    #[test]
    fn test_binding_reencodes_byte_exactly() {
        let value = ItemDisplay {
            name: "pick".to_string(),
            damage: 11,
            unbreakable: false,
            lore: vec![],
        };
        let first = to_tag(&value).unwrap();
        let back: ItemDisplay = from_tag(&first).unwrap();
        let second = to_tag(&back).unwrap();

        let mut a = Vec::new();
        let mut b = Vec::new();
        first
            .write_named(&mut a, crate::Encoding::LittleEndian, "")
            .unwrap();
        second
            .write_named(&mut b, crate::Encoding::LittleEndian, "")
            .unwrap();
        assert_eq!(a, b);
    }
}
