use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

/// Removes an entity that currently exists in the world from the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoveActor {
    /// Unique ID of the entity, constant for its whole lifetime.
    pub entity_unique_id: i64,
}

impl Packet for RemoveActor {
    fn id(&self) -> u32 {
        id::REMOVE_ACTOR
    }

    fn name(&self) -> &'static str {
        "RemoveActor"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varint64(self.entity_unique_id);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.entity_unique_id = buffer.read_varint64()?;
        Ok(())
    }
}
