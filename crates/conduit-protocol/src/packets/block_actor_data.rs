use conduit_common::error::ProtocolResult;
use conduit_common::types::BlockPos;
use conduit_nbt::{Compound, Encoding};

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

/// Attaches data to a block entity client-side, such as the lines of text
/// on a sign. The payload is a network-encoded NBT compound consumed in
/// place off the packet cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockActorData {
    pub position: BlockPos,
    pub nbt_data: Compound,
}

impl Packet for BlockActorData {
    fn id(&self) -> u32 {
        id::BLOCK_ACTOR_DATA
    }

    fn name(&self) -> &'static str {
        "BlockActorData"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_ublock_pos(self.position);
        self.nbt_data
            .write_root(buffer, Encoding::NetworkLittleEndian)
            .expect("block entity NBT compound must be encodable");
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.position = buffer.read_ublock_pos()?;
        self.nbt_data = Compound::read_root(buffer, Encoding::NetworkLittleEndian)?;
        Ok(())
    }
}
