//! The packet catalog: one file per packet shape, each a plain struct with
//! its `Packet` implementation.

pub mod actor_event;
pub mod actor_pick_request;
pub mod animate;
pub mod available_commands;
pub mod block_actor_data;
pub mod chunk_radius_updated;
pub mod crafting_data;
pub mod creative_content;
pub mod debug_info;
pub mod disconnect;
pub mod emote;
pub mod inventory_content;
pub mod inventory_slot;
pub mod item_frame_drop_item;
pub mod level_sound_event;
pub mod mob_equipment;
pub mod move_player;
pub mod network_stack_latency;
pub mod player_enchant_options;
pub mod player_skin;
pub mod remove_actor;
pub mod request_chunk_radius;
pub mod set_actor_link;
pub mod set_difficulty;
pub mod set_health;
pub mod set_spawn_position;
pub mod set_time;
pub mod text;
pub mod tick_sync;
pub mod transfer;
pub mod update_block;
pub mod update_equip;

pub use actor_event::ActorEvent;
pub use actor_pick_request::ActorPickRequest;
pub use animate::Animate;
pub use available_commands::AvailableCommands;
pub use block_actor_data::BlockActorData;
pub use chunk_radius_updated::ChunkRadiusUpdated;
pub use crafting_data::CraftingData;
pub use creative_content::CreativeContent;
pub use debug_info::DebugInfo;
pub use disconnect::Disconnect;
pub use emote::Emote;
pub use inventory_content::InventoryContent;
pub use inventory_slot::InventorySlot;
pub use item_frame_drop_item::ItemFrameDropItem;
pub use level_sound_event::LevelSoundEvent;
pub use mob_equipment::MobEquipment;
pub use move_player::MovePlayer;
pub use network_stack_latency::NetworkStackLatency;
pub use player_enchant_options::PlayerEnchantOptions;
pub use player_skin::PlayerSkin;
pub use remove_actor::RemoveActor;
pub use request_chunk_radius::RequestChunkRadius;
pub use set_actor_link::SetActorLink;
pub use set_difficulty::SetDifficulty;
pub use set_health::SetHealth;
pub use set_spawn_position::SetSpawnPosition;
pub use set_time::SetTime;
pub use text::Text;
pub use tick_sync::TickSync;
pub use transfer::Transfer;
pub use update_block::UpdateBlock;
pub use update_equip::UpdateEquip;
