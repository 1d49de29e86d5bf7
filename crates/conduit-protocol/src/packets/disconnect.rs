use conduit_common::error::ProtocolResult;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;

/// Sent by the server to disconnect the client with a message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Disconnect {
    /// When set, the disconnection screen is hidden and no message travels.
    pub hide_disconnect_screen: bool,
    pub message: String,
}

impl Packet for Disconnect {
    fn id(&self) -> u32 {
        id::DISCONNECT
    }

    fn name(&self) -> &'static str {
        "Disconnect"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_bool(self.hide_disconnect_screen);
        if !self.hide_disconnect_screen {
            buffer.write_string(&self.message);
        }
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        self.hide_disconnect_screen = buffer.read_bool()?;
        if !self.hide_disconnect_screen {
            self.message = buffer.read_string()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_screen_skips_message() {
        let packet = Disconnect {
            hide_disconnect_screen: true,
            message: String::new(),
        };
        let mut buffer = PacketBuffer::new();
        packet.marshal(&mut buffer);
        assert_eq!(buffer.as_bytes(), [0x01]);
    }

    #[test]
    fn test_message_travels_when_shown() {
        let packet = Disconnect {
            hide_disconnect_screen: false,
            message: "Server closed".to_string(),
        };
        let mut buffer = PacketBuffer::new();
        packet.marshal(&mut buffer);
        let mut read = Disconnect::default();
        read.unmarshal(&mut buffer).unwrap();
        assert_eq!(read, packet);
    }
}
