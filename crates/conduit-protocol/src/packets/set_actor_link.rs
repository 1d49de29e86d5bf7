use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::entity_link::EntityLink;
use crate::id;
use crate::packet::Packet;

/// Links or unlinks two entities, such as a player mounting a horse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetActorLink {
    pub entity_link: EntityLink,
}

impl Packet for SetActorLink {
    fn id(&self) -> u32 {
        id::SET_ACTOR_LINK
    }

    fn name(&self) -> &'static str {
        "SetActorLink"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        self.entity_link.write(buffer);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.entity_link = EntityLink::read(buffer)?;
        Ok(())
    }
}
