use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

pub const EMOTE_FLAG_SERVER_SIDE: u8 = 0x1;

/// Sent when a player performs an emote, and relayed by the server to other
/// players in range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Emote {
    pub entity_runtime_id: u64,
    /// UUID of the emote piece being performed.
    pub emote_id: String,
    pub flags: u8,
}

impl Packet for Emote {
    fn id(&self) -> u32 {
        id::EMOTE
    }

    fn name(&self) -> &'static str {
        "Emote"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varuint64(self.entity_runtime_id);
        buffer.write_string(&self.emote_id);
        buffer.write_u8(self.flags);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.entity_runtime_id = buffer.read_varuint64()?;
        self.emote_id = buffer.read_string()?;
        self.flags = buffer.read_u8()?;
        Ok(())
    }
}
