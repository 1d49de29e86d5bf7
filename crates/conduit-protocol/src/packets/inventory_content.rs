use conduit_common::error::ProtocolResult;
use conduit_common::limits::HIGHER_LIMIT;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::item::ItemStack;
use crate::packet::Packet;

/// Replaces the full content of a window the client has open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryContent {
    pub window_id: u32,
    pub content: Vec<ItemStack>,
}

impl Packet for InventoryContent {
    fn id(&self) -> u32 {
        id::INVENTORY_CONTENT
    }

    fn name(&self) -> &'static str {
        "InventoryContent"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varuint32(self.window_id);
        buffer.write_varuint32(self.content.len() as u32);
        for item in &self.content {
            item.write(buffer);
        }
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.window_id = buffer.read_varuint32()?;
        let count = buffer.read_varuint_len(HIGHER_LIMIT, "inventory content")?;
        self.content = Vec::with_capacity(count);
        for _ in 0..count {
            self.content.push(ItemStack::read(buffer)?);
        }
        Ok(())
    }
}
