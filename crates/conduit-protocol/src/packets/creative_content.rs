use conduit_common::error::ProtocolResult;
use conduit_common::limits::HIGHER_LIMIT;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::item::CreativeItem;
use crate::packet::Packet;

/// Sets the creative inventory content for a player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreativeContent {
    pub items: Vec<CreativeItem>,
}

impl Packet for CreativeContent {
    fn id(&self) -> u32 {
        id::CREATIVE_CONTENT
    }

    fn name(&self) -> &'static str {
        "CreativeContent"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varuint32(self.items.len() as u32);
        for item in &self.items {
            item.write(buffer);
        }
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        let count = buffer.read_varuint_len(HIGHER_LIMIT, "creative item")?;
        self.items = Vec::with_capacity(count);
        for _ in 0..count {
            self.items.push(CreativeItem::read(buffer)?);
        }
        Ok(())
    }
}
