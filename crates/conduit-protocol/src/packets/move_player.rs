use conduit_common::error::ProtocolResult;
use conduit_common::types::Vec3;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

pub const MOVE_MODE_NORMAL: u8 = 0;
pub const MOVE_MODE_RESET: u8 = 1;
pub const MOVE_MODE_TELEPORT: u8 = 2;
pub const MOVE_MODE_ROTATION: u8 = 3;

pub const TELEPORT_CAUSE_UNKNOWN: i32 = 0;
pub const TELEPORT_CAUSE_PROJECTILE: i32 = 1;
pub const TELEPORT_CAUSE_CHORUS_FRUIT: i32 = 2;
pub const TELEPORT_CAUSE_COMMAND: i32 = 3;
pub const TELEPORT_CAUSE_BEHAVIOUR: i32 = 4;

/// Moves a player. Sent by players for their own movement and by the server
/// to correct or teleport them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovePlayer {
    pub entity_runtime_id: u64,
    /// Position of the player's eyes, 1.62 blocks above the feet.
    pub position: Vec3,
    pub pitch: f32,
    pub yaw: f32,
    pub head_yaw: f32,
    /// One of the movement mode constants; teleports carry a cause.
    pub mode: u8,
    pub on_ground: bool,
    /// Runtime ID of the entity being ridden, or zero.
    pub ridden_entity_runtime_id: u64,
    /// Only on the wire when mode is teleport.
    pub teleport_cause: i32,
    pub teleport_source_entity_type: i32,
}

impl Packet for MovePlayer {
    fn id(&self) -> u32 {
        id::MOVE_PLAYER
    }

    fn name(&self) -> &'static str {
        "MovePlayer"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varuint64(self.entity_runtime_id);
        buffer.write_vec3(self.position);
        buffer.write_f32(self.pitch);
        buffer.write_f32(self.yaw);
        buffer.write_f32(self.head_yaw);
        buffer.write_u8(self.mode);
        buffer.write_bool(self.on_ground);
        buffer.write_varuint64(self.ridden_entity_runtime_id);
        if self.mode == MOVE_MODE_TELEPORT {
            buffer.write_i32(self.teleport_cause);
            buffer.write_i32(self.teleport_source_entity_type);
        }
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.entity_runtime_id = buffer.read_varuint64()?;
        self.position = buffer.read_vec3()?;
        self.pitch = buffer.read_f32()?;
        self.yaw = buffer.read_f32()?;
        self.head_yaw = buffer.read_f32()?;
        self.mode = buffer.read_u8()?;
        self.on_ground = buffer.read_bool()?;
        self.ridden_entity_runtime_id = buffer.read_varuint64()?;
        if self.mode == MOVE_MODE_TELEPORT {
            self.teleport_cause = buffer.read_i32()?;
            self.teleport_source_entity_type = buffer.read_i32()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teleport_cause_only_for_teleport_mode() {
        let mut packet = MovePlayer {
            entity_runtime_id: 1,
            position: Vec3::new(0.5, 64.62, 0.5),
            mode: MOVE_MODE_NORMAL,
            teleport_cause: TELEPORT_CAUSE_COMMAND,
            ..Default::default()
        };
        let mut normal = PacketBuffer::new();
        packet.marshal(&mut normal);

        packet.mode = MOVE_MODE_TELEPORT;
        let mut teleport = PacketBuffer::new();
        packet.marshal(&mut teleport);

        assert_eq!(teleport.as_bytes().len(), normal.as_bytes().len() + 8);

        let mut read = MovePlayer::default();
        read.unmarshal(&mut teleport).unwrap();
        assert_eq!(read, packet);
        assert_eq!(teleport.remaining(), 0);
    }
}
