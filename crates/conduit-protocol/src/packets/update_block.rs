use conduit_common::error::ProtocolResult;
use conduit_common::types::BlockPos;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

pub const BLOCK_UPDATE_NEIGHBOURS: u32 = 0x1;
pub const BLOCK_UPDATE_NETWORK: u32 = 0x2;
pub const BLOCK_UPDATE_NO_GRAPHICS: u32 = 0x4;
pub const BLOCK_UPDATE_PRIORITY: u32 = 0x8;

/// Sent by the server to change a single block client-side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateBlock {
    pub position: BlockPos,
    /// Runtime ID of the new block state.
    pub new_block_runtime_id: u32,
    /// A combination of the flag constants above.
    pub flags: u32,
    /// The storage layer the block is placed on, used for waterlogging.
    pub layer: u32,
}

impl Packet for UpdateBlock {
    fn id(&self) -> u32 {
        id::UPDATE_BLOCK
    }

    fn name(&self) -> &'static str {
        "UpdateBlock"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_ublock_pos(self.position);
        buffer.write_varuint32(self.new_block_runtime_id);
        buffer.write_varuint32(self.flags);
        buffer.write_varuint32(self.layer);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.position = buffer.read_ublock_pos()?;
        self.new_block_runtime_id = buffer.read_varuint32()?;
        self.flags = buffer.read_varuint32()?;
        self.layer = buffer.read_varuint32()?;
        Ok(())
    }
}
