use conduit_common::error::ProtocolResult;
use conduit_common::limits::LOWER_LIMIT;

use crate::buffer::PacketBuffer;

pub const ENCHANTMENT_SLOT_NONE: i32 = 0;
pub const ENCHANTMENT_SLOT_ALL: i32 = 0xFFFF;
pub const ENCHANTMENT_SLOT_HELMET: i32 = 0x1;
pub const ENCHANTMENT_SLOT_CHESTPLATE: i32 = 0x2;
pub const ENCHANTMENT_SLOT_LEGGINGS: i32 = 0x4;
pub const ENCHANTMENT_SLOT_BOOTS: i32 = 0x8;
pub const ENCHANTMENT_SLOT_ARMOUR: i32 = ENCHANTMENT_SLOT_HELMET
    | ENCHANTMENT_SLOT_CHESTPLATE
    | ENCHANTMENT_SLOT_LEGGINGS
    | ENCHANTMENT_SLOT_BOOTS;
pub const ENCHANTMENT_SLOT_SWORD: i32 = 0x10;
pub const ENCHANTMENT_SLOT_BOW: i32 = 0x20;
pub const ENCHANTMENT_SLOT_HOE: i32 = 0x40;
pub const ENCHANTMENT_SLOT_SHEARS: i32 = 0x80;
pub const ENCHANTMENT_SLOT_FLINT_AND_STEEL: i32 = 0x100;
pub const ENCHANTMENT_SLOT_TOOL_OTHER: i32 =
    ENCHANTMENT_SLOT_HOE | ENCHANTMENT_SLOT_SHEARS | ENCHANTMENT_SLOT_FLINT_AND_STEEL;
pub const ENCHANTMENT_SLOT_AXE: i32 = 0x200;
pub const ENCHANTMENT_SLOT_PICKAXE: i32 = 0x400;
pub const ENCHANTMENT_SLOT_SHOVEL: i32 = 0x800;
pub const ENCHANTMENT_SLOT_DIG: i32 =
    ENCHANTMENT_SLOT_AXE | ENCHANTMENT_SLOT_PICKAXE | ENCHANTMENT_SLOT_SHOVEL;
pub const ENCHANTMENT_SLOT_FISHING_ROD: i32 = 0x1000;
pub const ENCHANTMENT_SLOT_CARROT_ON_A_STICK: i32 = 0x2000;
pub const ENCHANTMENT_SLOT_ELYTRA: i32 = 0x4000;
pub const ENCHANTMENT_SLOT_TRIDENT: i32 = 0x8000;

/// A single enchantment with its level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnchantmentInstance {
    pub enchantment_type: u8,
    pub level: u8,
}

impl EnchantmentInstance {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<EnchantmentInstance> {
        Ok(EnchantmentInstance {
            enchantment_type: buffer.read_u8()?,
            level: buffer.read_u8()?,
        })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_u8(self.enchantment_type);
        buffer.write_u8(self.level);
    }
}

/// The enchantments applied to an item for one enchantment table button.
/// The three buckets group enchantments by activation type and are always
/// present on the wire, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemEnchantments {
    /// The equipment slot bitmask of the item put into the table.
    pub slot: i32,
    pub enchantments: [Vec<EnchantmentInstance>; 3],
}

impl ItemEnchantments {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<ItemEnchantments> {
        let mut item_enchantments = ItemEnchantments {
            slot: buffer.read_i32()?,
            ..Default::default()
        };
        for bucket in item_enchantments.enchantments.iter_mut() {
            let count = buffer.read_varuint_len(LOWER_LIMIT, "enchantment bucket")?;
            bucket.reserve(count);
            for _ in 0..count {
                bucket.push(EnchantmentInstance::read(buffer)?);
            }
        }
        Ok(item_enchantments)
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_i32(self.slot);
        for bucket in &self.enchantments {
            buffer.write_varuint32(bucket.len() as u32);
            for enchantment in bucket {
                enchantment.write(buffer);
            }
        }
    }
}

/// A single option in the enchantment table for a single item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnchantmentOption {
    /// The amount of XP levels required to select this option.
    pub cost: u32,
    pub enchantments: ItemEnchantments,
    /// A name translated to the Standard Galactic Alphabet client-side.
    pub name: String,
    /// A network ID unique across enchantment options and normal recipes,
    /// submitted back by the client when it picks this option.
    pub recipe_network_id: u32,
}

impl EnchantmentOption {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<EnchantmentOption> {
        Ok(EnchantmentOption {
            cost: buffer.read_varuint32()?,
            enchantments: ItemEnchantments::read(buffer)?,
            name: buffer.read_string()?,
            recipe_network_id: buffer.read_varuint32()?,
        })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_varuint32(self.cost);
        self.enchantments.write(buffer);
        buffer.write_string(&self.name);
        buffer.write_varuint32(self.recipe_network_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buckets_are_still_written() {
        let enchantments = ItemEnchantments {
            slot: ENCHANTMENT_SLOT_SWORD,
            ..Default::default()
        };
        let mut buffer = PacketBuffer::new();
        enchantments.write(&mut buffer);
        // slot i32 + three zero-length varuint prefixes
        assert_eq!(buffer.as_bytes(), [0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(ItemEnchantments::read(&mut buffer).unwrap(), enchantments);
    }

    #[test]
    fn test_option_roundtrip() {
        let option = EnchantmentOption {
            cost: 30,
            enchantments: ItemEnchantments {
                slot: ENCHANTMENT_SLOT_ARMOUR,
                enchantments: [
                    vec![EnchantmentInstance {
                        enchantment_type: 0,
                        level: 4,
                    }],
                    vec![],
                    vec![EnchantmentInstance {
                        enchantment_type: 17,
                        level: 1,
                    }],
                ],
            },
            name: "bless inside creature shrink".to_string(),
            recipe_network_id: 771,
        };
        let mut buffer = PacketBuffer::new();
        option.write(&mut buffer);
        assert_eq!(EnchantmentOption::read(&mut buffer).unwrap(), option);
        assert_eq!(buffer.remaining(), 0);
    }
}
