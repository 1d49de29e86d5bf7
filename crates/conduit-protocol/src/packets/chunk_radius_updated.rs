use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

/// The server's answer to a chunk radius request, carrying the radius it
/// actually grants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkRadiusUpdated {
    pub chunk_radius: i32,
}

impl Packet for ChunkRadiusUpdated {
    fn id(&self) -> u32 {
        id::CHUNK_RADIUS_UPDATED
    }

    fn name(&self) -> &'static str {
        "ChunkRadiusUpdated"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varint32(self.chunk_radius);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.chunk_radius = buffer.read_varint32()?;
        Ok(())
    }
}
