pub use conduit_common as common;
pub use conduit_nbt as nbt;
pub use conduit_protocol as protocol;

// Re-export commonly used items
pub use conduit_common::{BlockPos, ProtocolError, ProtocolResult, Vec3};
pub use conduit_nbt::{Compound, Encoding, Tag};
pub use conduit_protocol::{ItemStack, ItemType, Packet, PacketBuffer, Skin};
