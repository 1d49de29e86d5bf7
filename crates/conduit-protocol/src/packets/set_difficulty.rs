use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetDifficulty {
    /// The new world difficulty, 0 (peaceful) through 3 (hard).
    pub difficulty: u32,
}

impl Packet for SetDifficulty {
    fn id(&self) -> u32 {
        id::SET_DIFFICULTY
    }

    fn name(&self) -> &'static str {
        "SetDifficulty"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varuint32(self.difficulty);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.difficulty = buffer.read_varuint32()?;
        Ok(())
    }
}
