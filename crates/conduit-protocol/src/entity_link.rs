use conduit_common::error::ProtocolResult;
use conduit_common::limits::LOWER_LIMIT;

use crate::buffer::PacketBuffer;

/// Removes the link between two entities.
pub const LINK_REMOVE: u8 = 0;
/// The rider controls the entity it is riding, as in a minecart.
pub const LINK_RIDER: u8 = 1;
/// The rider is a plain passenger, as on the back seat of a boat.
pub const LINK_PASSENGER: u8 = 2;

/// A link between two entities, typically one entity riding another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityLink {
    /// Unique ID of the entity being ridden.
    pub ridden_entity_unique_id: i64,
    /// Unique ID of the entity doing the riding.
    pub rider_entity_unique_id: i64,
    /// One of the link type constants above.
    pub link_type: u8,
    /// Set to dismount immediately, for example when the mount dies.
    pub immediate: bool,
    /// Whether the link was created by the rider itself.
    pub rider_initiated: bool,
}

impl EntityLink {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<EntityLink> {
        Ok(EntityLink {
            ridden_entity_unique_id: buffer.read_varint64()?,
            rider_entity_unique_id: buffer.read_varint64()?,
            link_type: buffer.read_u8()?,
            immediate: buffer.read_bool()?,
            rider_initiated: buffer.read_bool()?,
        })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_varint64(self.ridden_entity_unique_id);
        buffer.write_varint64(self.rider_entity_unique_id);
        buffer.write_u8(self.link_type);
        buffer.write_bool(self.immediate);
        buffer.write_bool(self.rider_initiated);
    }
}

/// Reads the list of currently active entity links.
pub fn read_entity_links(buffer: &mut PacketBuffer) -> ProtocolResult<Vec<EntityLink>> {
    let count = buffer.read_varuint_len(LOWER_LIMIT, "entity link")?;
    let mut links = Vec::with_capacity(count);
    for _ in 0..count {
        links.push(EntityLink::read(buffer)?);
    }
    Ok(links)
}

pub fn write_entity_links(buffer: &mut PacketBuffer, links: &[EntityLink]) {
    buffer.write_varuint32(links.len() as u32);
    for link in links {
        link.write(buffer);
    }
}
