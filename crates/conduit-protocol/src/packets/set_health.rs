use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

/// Sets the health of the player. Damage is normally applied through
/// attributes; this packet mainly matters for respawning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetHealth {
    pub health: i32,
}

impl Packet for SetHealth {
    fn id(&self) -> u32 {
        id::SET_HEALTH
    }

    fn name(&self) -> &'static str {
        "SetHealth"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varint32(self.health);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.health = buffer.read_varint32()?;
        Ok(())
    }
}
