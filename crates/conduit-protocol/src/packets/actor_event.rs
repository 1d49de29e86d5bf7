use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

/// Sent by the server when an event happens that has to do with an entity,
/// such as a wolf shaking itself dry or an entity dying.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActorEvent {
    /// Runtime ID of the entity, unique for each world session.
    pub entity_runtime_id: u64,
    pub event_type: u8,
    /// Optional data whose meaning depends on the event; most events leave
    /// it zero.
    pub event_data: i32,
}

impl Packet for ActorEvent {
    fn id(&self) -> u32 {
        id::ACTOR_EVENT
    }

    fn name(&self) -> &'static str {
        "ActorEvent"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varuint64(self.entity_runtime_id);
        buffer.write_u8(self.event_type);
        buffer.write_varint32(self.event_data);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.entity_runtime_id = buffer.read_varuint64()?;
        self.event_type = buffer.read_u8()?;
        self.event_data = buffer.read_varint32()?;
        Ok(())
    }
}
