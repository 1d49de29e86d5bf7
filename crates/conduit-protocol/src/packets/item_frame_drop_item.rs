use conduit_common::error::ProtocolResult;
use conduit_common::types::BlockPos;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

/// Sent by the client when it takes an item out of an item frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFrameDropItem {
    /// Position of the item frame's block entity.
    pub position: BlockPos,
}

impl Packet for ItemFrameDropItem {
    fn id(&self) -> u32 {
        id::ITEM_FRAME_DROP_ITEM
    }

    fn name(&self) -> &'static str {
        "ItemFrameDropItem"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_ublock_pos(self.position);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.position = buffer.read_ublock_pos()?;
        Ok(())
    }
}
