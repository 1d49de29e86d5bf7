use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::warn;

use conduit_common::error::{ProtocolError, ProtocolResult};

use crate::buffer::PacketBuffer;
use crate::packet::Packet;
use crate::packets::*;

/// Produces a fresh zero-valued instance of one packet shape.
pub type PacketConstructor = fn() -> Box<dyn Packet>;

struct Tables {
    by_id: HashMap<u32, PacketConstructor>,
    by_name: HashMap<String, PacketConstructor>,
}

impl Tables {
    fn with_defaults() -> Tables {
        let mut tables = Tables {
            by_id: HashMap::new(),
            by_name: HashMap::new(),
        };
        tables.add::<ActorEvent>();
        tables.add::<ActorPickRequest>();
        tables.add::<Animate>();
        tables.add::<AvailableCommands>();
        tables.add::<BlockActorData>();
        tables.add::<ChunkRadiusUpdated>();
        tables.add::<CraftingData>();
        tables.add::<CreativeContent>();
        tables.add::<DebugInfo>();
        tables.add::<Disconnect>();
        tables.add::<Emote>();
        tables.add::<InventoryContent>();
        tables.add::<InventorySlot>();
        tables.add::<ItemFrameDropItem>();
        tables.add::<LevelSoundEvent>();
        tables.add::<MobEquipment>();
        tables.add::<MovePlayer>();
        tables.add::<NetworkStackLatency>();
        tables.add::<PlayerEnchantOptions>();
        tables.add::<PlayerSkin>();
        tables.add::<RemoveActor>();
        tables.add::<RequestChunkRadius>();
        tables.add::<SetActorLink>();
        tables.add::<SetDifficulty>();
        tables.add::<SetHealth>();
        tables.add::<SetSpawnPosition>();
        tables.add::<SetTime>();
        tables.add::<Text>();
        tables.add::<TickSync>();
        tables.add::<Transfer>();
        tables.add::<UpdateBlock>();
        tables.add::<UpdateEquip>();
        // The name table is derived from the finished ID table, so the two
        // always cover the same set.
        tables.rebuild_names();
        tables
    }

    fn add<P: Packet + Default + 'static>(&mut self) {
        let constructor: PacketConstructor = || Box::new(P::default());
        self.by_id.insert(P::default().id(), constructor);
    }

    fn rebuild_names(&mut self) {
        self.by_name.clear();
        for constructor in self.by_id.values() {
            let packet = constructor();
            self.by_name.insert(packet.name().to_string(), *constructor);
        }
    }
}

// Written once on first use, read-only afterwards unless a caller registers
// a custom shape before decoding starts.
static TABLES: Lazy<RwLock<Tables>> = Lazy::new(|| RwLock::new(Tables::with_defaults()));

/// Registers a constructor for the given ID. Replaces an earlier
/// registration for the same ID, including the built-in one.
pub fn register(id: u32, constructor: PacketConstructor) {
    let mut tables = TABLES.write().expect("packet registry poisoned");
    tables.by_id.insert(id, constructor);
    let packet = constructor();
    tables.by_name.insert(packet.name().to_string(), constructor);
}

/// Constructs a zero-valued instance of the shape registered for the ID.
pub fn new_by_id(id: u32) -> ProtocolResult<Box<dyn Packet>> {
    let tables = TABLES.read().expect("packet registry poisoned");
    match tables.by_id.get(&id) {
        Some(constructor) => Ok(constructor()),
        None => Err(ProtocolError::UnknownPacket { id }),
    }
}

/// Looks up a constructor by the packet's stable name, for tools that build
/// packets from text.
pub fn by_name(name: &str) -> Option<PacketConstructor> {
    let tables = TABLES.read().expect("packet registry poisoned");
    tables.by_name.get(name).copied()
}

/// A fresh set of zero-valued instances, one per known ID.
pub fn pool() -> HashMap<u32, Box<dyn Packet>> {
    let tables = TABLES.read().expect("packet registry poisoned");
    tables
        .by_id
        .iter()
        .map(|(id, constructor)| (*id, constructor()))
        .collect()
}

/// Builds the packet registered for `id` and unmarshals it from `payload`.
/// Trailing bytes after a successful unmarshal are tolerated with a warning;
/// callers that want to be strict can compare lengths themselves.
pub fn decode(id: u32, payload: &[u8]) -> ProtocolResult<Box<dyn Packet>> {
    let mut packet = new_by_id(id)?;
    let mut buffer = PacketBuffer::from_bytes(payload.to_vec());
    packet.unmarshal(&mut buffer)?;
    if buffer.remaining() > 0 {
        warn!(
            packet = packet.name(),
            trailing = buffer.remaining(),
            "packet left trailing bytes after decoding"
        );
    }
    Ok(packet)
}

/// Serialises a packet into its payload bytes.
pub fn encode(packet: &dyn Packet) -> Vec<u8> {
    let mut buffer = PacketBuffer::new();
    packet.marshal(&mut buffer);
    buffer.into_bytes()
}
