use uuid::Uuid;

use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;
use crate::skin::Skin;

/// Sent when a player changes its skin in-game, and relayed to everyone who
/// can see the player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerSkin {
    /// UUID of the player, consistent with the one from login.
    pub uuid: Uuid,
    pub skin: Skin,
    pub new_skin_name: String,
    pub old_skin_name: String,
}

impl Packet for PlayerSkin {
    fn id(&self) -> u32 {
        id::PLAYER_SKIN
    }

    fn name(&self) -> &'static str {
        "PlayerSkin"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_uuid(self.uuid);
        self.skin.write(buffer);
        buffer.write_string(&self.new_skin_name);
        buffer.write_string(&self.old_skin_name);
        buffer.write_bool(self.skin.trusted);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.uuid = buffer.read_uuid()?;
        self.skin = Skin::read(buffer)?;
        self.new_skin_name = buffer.read_string()?;
        self.old_skin_name = buffer.read_string()?;
        self.skin.trusted = buffer.read_bool()?;
        Ok(())
    }
}
