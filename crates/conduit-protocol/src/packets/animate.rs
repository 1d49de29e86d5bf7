use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

pub const ANIMATE_ACTION_SWING_ARM: i32 = 1;
pub const ANIMATE_ACTION_STOP_SLEEP: i32 = 3;
pub const ANIMATE_ACTION_CRITICAL_HIT: i32 = 4;

/// Sent to play an animation on an entity, such as an arm swing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Animate {
    pub action_type: i32,
    pub entity_runtime_id: u64,
    /// Only on the wire for actions with the 0x80 bit set; rowing boats use
    /// it for the rowing time.
    pub boat_rowing_time: f32,
}

impl Packet for Animate {
    fn id(&self) -> u32 {
        id::ANIMATE
    }

    fn name(&self) -> &'static str {
        "Animate"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varint32(self.action_type);
        buffer.write_varuint64(self.entity_runtime_id);
        if self.action_type & 0x80 != 0 {
            buffer.write_f32(self.boat_rowing_time);
        }
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.action_type = buffer.read_varint32()?;
        self.entity_runtime_id = buffer.read_varuint64()?;
        if self.action_type & 0x80 != 0 {
            self.boat_rowing_time = buffer.read_f32()?;
        }
        Ok(())
    }
}
