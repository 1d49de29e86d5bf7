use tracing::warn;

use conduit_common::error::{ProtocolError, ProtocolResult};
use conduit_common::limits::HIGHER_LIMIT;
use conduit_nbt::{Compound, Encoding};

use crate::buffer::PacketBuffer;

/// Network ID of the shield item, the one item type that carries an extra
/// trailing field on the wire.
pub const SHIELD_NETWORK_ID: i32 = 513;

/// A consistent combination of network ID and metadata value of an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemType {
    /// The numerical network ID of the item. This is sometimes a positive
    /// ID, and sometimes a negative ID, depending on what item it concerns.
    /// Zero means air, which terminates the stack on the wire.
    pub network_id: i32,
    /// The metadata value: a damage value for some items, a variant
    /// identifier for others.
    pub metadata: i16,
}

/// An item instance/stack as sent over the network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemStack {
    pub item_type: ItemType,
    /// The amount of items the stack holds.
    pub count: i16,
    /// The item's NBT payload, if any, carrying display names, enchantments
    /// and similar mutable data.
    pub nbt_data: Option<Compound>,
    /// Block identifiers like 'minecraft:stone' the item may be placed on.
    pub can_be_placed_on: Vec<String>,
    /// Block identifiers the item is able to break.
    pub can_break: Vec<String>,
    /// The tick a shield started blocking at. Only present on the wire when
    /// the item is a shield.
    pub blocking_tick: i64,
}

impl ItemStack {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<ItemStack> {
        let mut stack = ItemStack::default();
        stack.item_type.network_id = buffer.read_varint32()?;
        if stack.item_type.network_id == 0 {
            // Air: nothing else belongs to this stack.
            return Ok(stack);
        }
        let aux = buffer.read_varint32()?;
        stack.item_type.metadata = (aux >> 8) as i16;
        stack.count = (aux & 0xFF) as i16;

        let marker = buffer.read_i16()?;
        if marker == -1 {
            let nbt_count = buffer.read_u8()?;
            if nbt_count != 1 {
                return Err(ProtocolError::malformed(
                    "item nbt",
                    format!("expected NBT count to be 1, got {}", nbt_count),
                ));
            }
            stack.nbt_data = Some(Compound::read_root(buffer, Encoding::LittleEndian)?);
        } else if marker > 0 {
            // Legacy framing with an explicit byte length in front of the
            // compound. Not produced anymore; kept as a decode fallback.
            warn!(length = marker, "item NBT used legacy length-prefixed framing");
            let bytes = buffer.read_bytes_raw(marker as usize, "item nbt")?;
            let mut nested = PacketBuffer::from_bytes(bytes);
            stack.nbt_data = Some(Compound::read_root(&mut nested, Encoding::LittleEndian)?);
        } else if marker != 0 {
            return Err(ProtocolError::malformed(
                "item nbt",
                format!("invalid NBT length {}", marker),
            ));
        }

        let count = buffer.read_varint_len(HIGHER_LIMIT, "item can be placed on")?;
        stack.can_be_placed_on = Vec::with_capacity(count);
        for _ in 0..count {
            stack.can_be_placed_on.push(buffer.read_string()?);
        }
        let count = buffer.read_varint_len(HIGHER_LIMIT, "item can break")?;
        stack.can_break = Vec::with_capacity(count);
        for _ in 0..count {
            stack.can_break.push(buffer.read_string()?);
        }

        if stack.item_type.network_id == SHIELD_NETWORK_ID {
            stack.blocking_tick = buffer.read_varint64()?;
        }
        Ok(stack)
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_varint32(self.item_type.network_id);
        if self.item_type.network_id == 0 {
            return;
        }
        let aux = ((self.item_type.metadata as i32) << 8) | (self.count as i32 & 0xFF);
        buffer.write_varint32(aux);

        match &self.nbt_data {
            Some(nbt) => {
                // A fixed -1 where the length used to be, then the count
                // byte, then a single little-endian compound.
                buffer.write_i16(-1);
                buffer.write_u8(1);
                nbt.write_root(buffer, Encoding::LittleEndian)
                    .expect("item NBT compound must be encodable");
            }
            None => buffer.write_i16(0),
        }

        buffer.write_varint32(self.can_be_placed_on.len() as i32);
        for block in &self.can_be_placed_on {
            buffer.write_string(block);
        }
        buffer.write_varint32(self.can_break.len() as i32);
        for block in &self.can_break {
            buffer.write_string(block);
        }

        if self.item_type.network_id == SHIELD_NETWORK_ID {
            buffer.write_varint64(self.blocking_tick);
        }
    }

    /// Reads an item in its recipe ingredient form, which drops the NBT and
    /// block lists and widens count and metadata to varints.
    pub fn read_ingredient(buffer: &mut PacketBuffer) -> ProtocolResult<ItemStack> {
        let mut stack = ItemStack::default();
        stack.item_type.network_id = buffer.read_varint32()?;
        if stack.item_type.network_id == 0 {
            return Ok(stack);
        }
        stack.item_type.metadata = buffer.read_varint32()? as i16;
        let count = buffer.read_varint32()?;
        if count < 0 {
            return Err(ProtocolError::negative("recipe ingredient count", count));
        }
        stack.count = count as i16;
        Ok(stack)
    }

    pub fn write_ingredient(&self, buffer: &mut PacketBuffer) {
        buffer.write_varint32(self.item_type.network_id);
        if self.item_type.network_id == 0 {
            return;
        }
        buffer.write_varint32(self.item_type.metadata as i32);
        buffer.write_varint32(self.count as i32);
    }
}

/// An entry in the creative inventory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreativeItem {
    /// A unique ID for the creative item, used when the client obtains it.
    pub creative_item_network_id: u32,
    pub item: ItemStack,
}

impl CreativeItem {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<CreativeItem> {
        Ok(CreativeItem {
            creative_item_network_id: buffer.read_varuint32()?,
            item: ItemStack::read(buffer)?,
        })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_varuint32(self.creative_item_network_id);
        self.item.write(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conduit_nbt::Tag;

    #[test]
    fn test_air_is_a_single_zero_byte() {
        let stack = ItemStack::default();
        let mut buffer = PacketBuffer::new();
        stack.write(&mut buffer);
        assert_eq!(buffer.as_bytes(), [0x00]);

        let mut buffer = PacketBuffer::from_bytes(vec![0x00]);
        let read = ItemStack::read(&mut buffer).unwrap();
        assert_eq!(read, ItemStack::default());
        assert_eq!(buffer.remaining(), 0);
    }

    #[test]
    fn test_plain_stone_wire_bytes() {
        // network_id 1, metadata 1, count 0, no NBT, empty block lists.
        let bytes = vec![0x02, 0x80, 0x04, 0x00, 0x00, 0x00, 0x00];
        let mut buffer = PacketBuffer::from_bytes(bytes.clone());
        let stack = ItemStack::read(&mut buffer).unwrap();
        assert_eq!(stack.item_type.network_id, 1);
        assert_eq!(stack.item_type.metadata, 1);
        assert_eq!(stack.count, 0);
        assert_eq!(stack.nbt_data, None);
        assert!(stack.can_be_placed_on.is_empty());
        assert!(stack.can_break.is_empty());
        assert_eq!(buffer.remaining(), 0);

        let mut out = PacketBuffer::new();
        stack.write(&mut out);
        assert_eq!(out.as_bytes(), &bytes[..]);
    }

    #[test]
    fn test_nbt_marker_roundtrip() {
        let mut nbt = Compound::new();
        nbt.insert("Damage", Tag::Int(3));
        let stack = ItemStack {
            item_type: ItemType {
                network_id: 276,
                metadata: 0,
            },
            count: 1,
            nbt_data: Some(nbt),
            ..Default::default()
        };
        let mut buffer = PacketBuffer::new();
        stack.write(&mut buffer);
        let read = ItemStack::read(&mut buffer).unwrap();
        assert_eq!(read, stack);
    }

    #[test]
    fn test_legacy_nbt_length_path() {
        // Same compound framed the legacy way: a positive i16 byte length.
        let mut nbt = Compound::new();
        nbt.insert("Damage", Tag::Int(3));
        let mut nbt_bytes = Vec::new();
        nbt.write_root(&mut nbt_bytes, Encoding::LittleEndian).unwrap();

        let mut buffer = PacketBuffer::new();
        buffer.write_varint32(276);
        buffer.write_varint32(1); // metadata 0, count 1
        buffer.write_i16(nbt_bytes.len() as i16);
        buffer.write_bytes_raw(&nbt_bytes);
        buffer.write_varint32(0);
        buffer.write_varint32(0);

        let read = ItemStack::read(&mut buffer).unwrap();
        assert_eq!(read.nbt_data.unwrap().get("Damage"), Some(&Tag::Int(3)));
    }

    #[test]
    fn test_invalid_nbt_marker_is_malformed() {
        let mut buffer = PacketBuffer::new();
        buffer.write_varint32(1);
        buffer.write_varint32(0);
        buffer.write_i16(-2);
        let err = ItemStack::read(&mut buffer).unwrap_err();
        assert!(matches!(err, ProtocolError::Malformed { .. }));
    }

    #[test]
    fn test_shield_reads_trailing_blocking_tick() {
        let stack = ItemStack {
            item_type: ItemType {
                network_id: SHIELD_NETWORK_ID,
                metadata: 0,
            },
            count: 1,
            blocking_tick: 20,
            ..Default::default()
        };
        let mut buffer = PacketBuffer::new();
        stack.write(&mut buffer);
        let read = ItemStack::read(&mut buffer).unwrap();
        assert_eq!(read.blocking_tick, 20);
        assert_eq!(buffer.remaining(), 0);
    }

    #[test]
    fn test_non_shield_consumes_no_trailing_bytes() {
        let stack = ItemStack {
            item_type: ItemType {
                network_id: 5,
                metadata: 0,
            },
            count: 1,
            ..Default::default()
        };
        let mut buffer = PacketBuffer::new();
        stack.write(&mut buffer);
        buffer.write_varint64(99); // unrelated trailing data
        let read = ItemStack::read(&mut buffer).unwrap();
        assert_eq!(read.blocking_tick, 0);
        assert_eq!(buffer.read_varint64().unwrap(), 99);
    }

    #[test]
    fn test_place_on_limit_guard() {
        let mut buffer = PacketBuffer::new();
        buffer.write_varint32(1);
        buffer.write_varint32(0);
        buffer.write_i16(0);
        buffer.write_varint32(HIGHER_LIMIT as i32 + 1);
        let err = ItemStack::read(&mut buffer).unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::LimitExceeded {
                limit: HIGHER_LIMIT,
                ..
            }
        ));
    }

    #[test]
    fn test_negative_ingredient_count() {
        let mut buffer = PacketBuffer::new();
        buffer.write_varint32(1);
        buffer.write_varint32(0);
        buffer.write_varint32(-1);
        let err = ItemStack::read_ingredient(&mut buffer).unwrap_err();
        assert!(matches!(err, ProtocolError::NegativeLength { .. }));
    }

    #[test]
    fn test_ingredient_air_sentinel() {
        let stack = ItemStack::default();
        let mut buffer = PacketBuffer::new();
        stack.write_ingredient(&mut buffer);
        assert_eq!(buffer.as_bytes(), [0x00]);
    }
}
