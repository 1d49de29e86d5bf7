use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

/// Measures latency over the full processing stack rather than the bare
/// transport round trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkStackLatency {
    pub timestamp: i64,
    /// Whether the receiving end should send a latency packet back.
    pub needs_response: bool,
}

impl Packet for NetworkStackLatency {
    fn id(&self) -> u32 {
        id::NETWORK_STACK_LATENCY
    }

    fn name(&self) -> &'static str {
        "NetworkStackLatency"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varint64(self.timestamp);
        buffer.write_bool(self.needs_response);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.timestamp = buffer.read_varint64()?;
        self.needs_response = buffer.read_bool()?;
        Ok(())
    }
}
