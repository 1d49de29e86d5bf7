use conduit_common::error::ProtocolResult;
use conduit_common::types::Vec3;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

/// Makes the client play a sound at a position in the world. The most
/// frequently sent packet in a busy world.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelSoundEvent {
    /// Numeric ID of the sound to play.
    pub sound_type: u32,
    pub position: Vec3,
    /// Extra data tied to the sound, such as a block runtime ID; -1 when
    /// unused.
    pub extra_data: i32,
    /// Entity identifier such as 'minecraft:skeleton' for mob sounds.
    pub entity_type: String,
    pub baby_mob: bool,
    pub disable_relative_volume: bool,
}

impl Packet for LevelSoundEvent {
    fn id(&self) -> u32 {
        id::LEVEL_SOUND_EVENT
    }

    fn name(&self) -> &'static str {
        "LevelSoundEvent"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varuint32(self.sound_type);
        buffer.write_vec3(self.position);
        buffer.write_varint32(self.extra_data);
        buffer.write_string(&self.entity_type);
        buffer.write_bool(self.baby_mob);
        buffer.write_bool(self.disable_relative_volume);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.sound_type = buffer.read_varuint32()?;
        self.position = buffer.read_vec3()?;
        self.extra_data = buffer.read_varint32()?;
        self.entity_type = buffer.read_string()?;
        self.baby_mob = buffer.read_bool()?;
        self.disable_relative_volume = buffer.read_bool()?;
        Ok(())
    }
}
