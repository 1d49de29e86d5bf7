use conduit_common::error::ProtocolResult;
use conduit_nbt::{Compound, Encoding};

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

/// Gives the client the contents of an entity-based window, such as the
/// equipment of a horse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateEquip {
    pub window_id: u8,
    pub window_type: u8,
    pub size: i32,
    pub entity_unique_id: i64,
    /// The inventory serialised as a network NBT compound.
    pub serialised_inventory_data: Compound,
}

impl Packet for UpdateEquip {
    fn id(&self) -> u32 {
        id::UPDATE_EQUIP
    }

    fn name(&self) -> &'static str {
        "UpdateEquip"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_u8(self.window_id);
        buffer.write_u8(self.window_type);
        buffer.write_varint32(self.size);
        buffer.write_varint64(self.entity_unique_id);
        self.serialised_inventory_data
            .write_root(buffer, Encoding::NetworkLittleEndian)
            .expect("inventory NBT compound must be encodable");
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.window_id = buffer.read_u8()?;
        self.window_type = buffer.read_u8()?;
        self.size = buffer.read_varint32()?;
        self.entity_unique_id = buffer.read_varint64()?;
        self.serialised_inventory_data =
            Compound::read_root(buffer, Encoding::NetworkLittleEndian)?;
        Ok(())
    }
}
