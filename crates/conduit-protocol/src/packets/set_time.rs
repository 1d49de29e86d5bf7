use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

/// Synchronises the world time with the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetTime {
    /// World time in ticks; one day lasts 24000 ticks.
    pub time: i32,
}

impl Packet for SetTime {
    fn id(&self) -> u32 {
        id::SET_TIME
    }

    fn name(&self) -> &'static str {
        "SetTime"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varint32(self.time);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.time = buffer.read_varint32()?;
        Ok(())
    }
}
