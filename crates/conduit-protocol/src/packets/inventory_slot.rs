use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::item::ItemStack;
use crate::packet::Packet;

/// Updates a single slot in a window the client currently has open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventorySlot {
    pub window_id: u32,
    pub slot: u32,
    pub new_item: ItemStack,
}

impl Packet for InventorySlot {
    fn id(&self) -> u32 {
        id::INVENTORY_SLOT
    }

    fn name(&self) -> &'static str {
        "InventorySlot"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varuint32(self.window_id);
        buffer.write_varuint32(self.slot);
        self.new_item.write(buffer);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.window_id = buffer.read_varuint32()?;
        self.slot = buffer.read_varuint32()?;
        self.new_item = ItemStack::read(buffer)?;
        Ok(())
    }
}
