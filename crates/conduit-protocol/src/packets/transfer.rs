use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

/// Orders the client to disconnect and connect to a different server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transfer {
    /// Address of the target server, either a hostname or an IP.
    pub address: String,
    pub port: u16,
}

impl Packet for Transfer {
    fn id(&self) -> u32 {
        id::TRANSFER
    }

    fn name(&self) -> &'static str {
        "Transfer"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_string(&self.address);
        buffer.write_u16(self.port);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.address = buffer.read_string()?;
        self.port = buffer.read_u16()?;
        Ok(())
    }
}
