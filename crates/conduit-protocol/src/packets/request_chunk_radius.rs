use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

/// Sent by the client to request the chunk radius it would like, typically
/// right after joining.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestChunkRadius {
    pub chunk_radius: i32,
}

impl Packet for RequestChunkRadius {
    fn id(&self) -> u32 {
        id::REQUEST_CHUNK_RADIUS
    }

    fn name(&self) -> &'static str {
        "RequestChunkRadius"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varint32(self.chunk_radius);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.chunk_radius = buffer.read_varint32()?;
        Ok(())
    }
}
