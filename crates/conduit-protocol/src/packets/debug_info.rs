use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugInfo {
    /// Unique ID of the player the packet is sent to.
    pub player_unique_id: i64,
    pub data: Vec<u8>,
}

impl Packet for DebugInfo {
    fn id(&self) -> u32 {
        id::DEBUG_INFO
    }

    fn name(&self) -> &'static str {
        "DebugInfo"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varint64(self.player_unique_id);
        buffer.write_byte_slice(&self.data);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.player_unique_id = buffer.read_varint64()?;
        self.data = buffer.read_byte_slice()?;
        Ok(())
    }
}
