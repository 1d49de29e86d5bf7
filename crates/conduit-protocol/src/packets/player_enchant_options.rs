use conduit_common::error::ProtocolResult;
use conduit_common::limits::LOWER_LIMIT;

use crate::buffer::PacketBuffer;
use crate::enchant::EnchantmentOption;
use crate::id;
use crate::packet::Packet;

/// Sends the options available for the item currently in the enchantment
/// table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerEnchantOptions {
    pub options: Vec<EnchantmentOption>,
}

impl Packet for PlayerEnchantOptions {
    fn id(&self) -> u32 {
        id::PLAYER_ENCHANT_OPTIONS
    }

    fn name(&self) -> &'static str {
        "PlayerEnchantOptions"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varuint32(self.options.len() as u32);
        for option in &self.options {
            option.write(buffer);
        }
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        let count = buffer.read_varuint_len(LOWER_LIMIT, "enchantment option")?;
        self.options = Vec::with_capacity(count);
        for _ in 0..count {
            self.options.push(EnchantmentOption::read(buffer)?);
        }
        Ok(())
    }
}
