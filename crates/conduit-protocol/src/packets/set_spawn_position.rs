use conduit_common::error::ProtocolResult;
use conduit_common::types::BlockPos;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

pub const SPAWN_TYPE_PLAYER: i32 = 0;
pub const SPAWN_TYPE_WORLD: i32 = 1;

/// Updates the spawn position of a player, for example after sleeping in a
/// bed or touching a respawn anchor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetSpawnPosition {
    /// Whether the personal or the world spawn is set; the latter also moves
    /// where compasses point.
    pub spawn_type: i32,
    pub position: BlockPos,
    /// ID of the dimension that had its spawn updated.
    pub dimension: i32,
    /// The world spawn position; all minimum values for a default spawn.
    pub spawn_position: BlockPos,
}

impl Packet for SetSpawnPosition {
    fn id(&self) -> u32 {
        id::SET_SPAWN_POSITION
    }

    fn name(&self) -> &'static str {
        "SetSpawnPosition"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varint32(self.spawn_type);
        buffer.write_ublock_pos(self.position);
        buffer.write_varint32(self.dimension);
        buffer.write_ublock_pos(self.spawn_position);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.spawn_type = buffer.read_varint32()?;
        self.position = buffer.read_ublock_pos()?;
        self.dimension = buffer.read_varint32()?;
        self.spawn_position = buffer.read_ublock_pos()?;
        Ok(())
    }
}
