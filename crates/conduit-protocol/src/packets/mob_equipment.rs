use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::item::ItemStack;
use crate::packet::Packet;

/// Announces the item an entity holds in its hand, including off-hand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MobEquipment {
    pub entity_runtime_id: u64,
    pub new_item: ItemStack,
    /// Slot in the inventory the held item sits in.
    pub inventory_slot: u8,
    pub hotbar_slot: u8,
    /// ID of the window the item came from, usually the entity inventory.
    pub window_id: u8,
}

impl Packet for MobEquipment {
    fn id(&self) -> u32 {
        id::MOB_EQUIPMENT
    }

    fn name(&self) -> &'static str {
        "MobEquipment"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varuint64(self.entity_runtime_id);
        self.new_item.write(buffer);
        buffer.write_u8(self.inventory_slot);
        buffer.write_u8(self.hotbar_slot);
        buffer.write_u8(self.window_id);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.entity_runtime_id = buffer.read_varuint64()?;
        self.new_item = ItemStack::read(buffer)?;
        self.inventory_slot = buffer.read_u8()?;
        self.hotbar_slot = buffer.read_u8()?;
        self.window_id = buffer.read_u8()?;
        Ok(())
    }
}
