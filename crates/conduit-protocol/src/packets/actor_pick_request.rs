use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

/// Sent by the client when it middle-clicks an entity to pick it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActorPickRequest {
    pub entity_unique_id: i64,
    /// The hotbar slot the picked item should land in.
    pub hotbar_slot: u8,
    /// Whether block entity data should be attached to the picked item.
    pub with_data: bool,
}

impl Packet for ActorPickRequest {
    fn id(&self) -> u32 {
        id::ACTOR_PICK_REQUEST
    }

    fn name(&self) -> &'static str {
        "ActorPickRequest"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_i64(self.entity_unique_id);
        buffer.write_u8(self.hotbar_slot);
        buffer.write_bool(self.with_data);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.entity_unique_id = buffer.read_i64()?;
        self.hotbar_slot = buffer.read_u8()?;
        self.with_data = buffer.read_bool()?;
        Ok(())
    }
}
