use conduit_common::error::{ProtocolError, ProtocolResult};
use conduit_common::limits::LOWER_LIMIT;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

pub const TEXT_TYPE_RAW: u8 = 0;
pub const TEXT_TYPE_CHAT: u8 = 1;
pub const TEXT_TYPE_TRANSLATION: u8 = 2;
pub const TEXT_TYPE_POPUP: u8 = 3;
pub const TEXT_TYPE_JUKEBOX_POPUP: u8 = 4;
pub const TEXT_TYPE_TIP: u8 = 5;
pub const TEXT_TYPE_SYSTEM: u8 = 6;
pub const TEXT_TYPE_WHISPER: u8 = 7;
pub const TEXT_TYPE_ANNOUNCEMENT: u8 = 8;
pub const TEXT_TYPE_OBJECT_WHISPER: u8 = 9;
pub const TEXT_TYPE_OBJECT: u8 = 10;

/// Carries chat and other screen text. Which fields travel depends on the
/// text type, so each type is its own branch of the codec.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub text_type: u8,
    /// Whether the message contains translatable placeholders.
    pub needs_translation: bool,
    /// Name of the sender; only travels for chat-like types.
    pub source_name: String,
    pub message: String,
    /// Parameters filled into the message placeholders; only travels for
    /// translated types.
    pub parameters: Vec<String>,
    /// XBOX User ID of the sender, verified by the client.
    pub xuid: String,
    /// Identifies the platform the message was sent from.
    pub platform_chat_id: String,
}

impl Packet for Text {
    fn id(&self) -> u32 {
        id::TEXT
    }

    fn name(&self) -> &'static str {
        "Text"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_u8(self.text_type);
        buffer.write_bool(self.needs_translation);
        match self.text_type {
            TEXT_TYPE_CHAT | TEXT_TYPE_WHISPER | TEXT_TYPE_ANNOUNCEMENT => {
                buffer.write_string(&self.source_name);
                buffer.write_string(&self.message);
            }
            TEXT_TYPE_RAW | TEXT_TYPE_TIP | TEXT_TYPE_SYSTEM | TEXT_TYPE_OBJECT
            | TEXT_TYPE_OBJECT_WHISPER => {
                buffer.write_string(&self.message);
            }
            TEXT_TYPE_TRANSLATION | TEXT_TYPE_POPUP | TEXT_TYPE_JUKEBOX_POPUP => {
                buffer.write_string(&self.message);
                buffer.write_varuint32(self.parameters.len() as u32);
                for parameter in &self.parameters {
                    buffer.write_string(parameter);
                }
            }
            other => panic!("text packet written with unknown type {}", other),
        }
        buffer.write_string(&self.xuid);
        buffer.write_string(&self.platform_chat_id);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.text_type = buffer.read_u8()?;
        self.needs_translation = buffer.read_bool()?;
        match self.text_type {
            TEXT_TYPE_CHAT | TEXT_TYPE_WHISPER | TEXT_TYPE_ANNOUNCEMENT => {
                self.source_name = buffer.read_string()?;
                self.message = buffer.read_string()?;
            }
            TEXT_TYPE_RAW | TEXT_TYPE_TIP | TEXT_TYPE_SYSTEM | TEXT_TYPE_OBJECT
            | TEXT_TYPE_OBJECT_WHISPER => {
                self.message = buffer.read_string()?;
            }
            TEXT_TYPE_TRANSLATION | TEXT_TYPE_POPUP | TEXT_TYPE_JUKEBOX_POPUP => {
                self.message = buffer.read_string()?;
                let count = buffer.read_varuint_len(LOWER_LIMIT, "text parameter")?;
                self.parameters = Vec::with_capacity(count);
                for _ in 0..count {
                    self.parameters.push(buffer.read_string()?);
                }
            }
            other => {
                return Err(ProtocolError::malformed(
                    "text type",
                    format!("unknown text type {}", other),
                ))
            }
        }
        self.xuid = buffer.read_string()?;
        self.platform_chat_id = buffer.read_string()?;
        Ok(())
    }
}
