use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

/// Exchanged to synchronise the client's and server's tick clocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickSync {
    pub client_request_timestamp: i64,
    pub server_reception_timestamp: i64,
}

impl Packet for TickSync {
    fn id(&self) -> u32 {
        id::TICK_SYNC
    }

    fn name(&self) -> &'static str {
        "TickSync"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_i64(self.client_request_timestamp);
        buffer.write_i64(self.server_reception_timestamp);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.client_request_timestamp = buffer.read_i64()?;
        self.server_reception_timestamp = buffer.read_i64()?;
        Ok(())
    }
}
