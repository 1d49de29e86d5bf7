use uuid::Uuid;

use conduit_common::types::{BlockPos, Vec3};
use conduit_nbt::{Compound, Tag};
use conduit_protocol::entity_link::{EntityLink, LINK_RIDER};
use conduit_protocol::item::{CreativeItem, ItemStack, ItemType};
use conduit_protocol::packet::Packet;
use conduit_protocol::packets::*;
use conduit_protocol::registry;
use conduit_protocol::skin::Skin;

/// Encodes a packet, decodes it through the registry by its own ID, and
/// checks the re-encoding is byte-identical and consumed the whole payload.
fn assert_stable(packet: &dyn Packet) {
    let payload = registry::encode(packet);
    let decoded = registry::decode(packet.id(), &payload)
        .unwrap_or_else(|e| panic!("{} failed to decode: {}", packet.name(), e));
    assert_eq!(
        registry::encode(decoded.as_ref()),
        payload,
        "{} did not re-encode byte-identically",
        packet.name()
    );
    assert_eq!(decoded.id(), packet.id());
    assert_eq!(decoded.name(), packet.name());
}

fn sample_item() -> ItemStack {
    let mut nbt = Compound::new();
    nbt.insert("Damage", Tag::Int(10));
    nbt.insert("RepairCost", Tag::Int(1));
    ItemStack {
        item_type: ItemType {
            network_id: 276,
            metadata: 0,
        },
        count: 1,
        nbt_data: Some(nbt),
        can_be_placed_on: vec![],
        can_break: vec!["minecraft:web".to_string()],
        blocking_tick: 0,
    }
}

#[test]
fn test_catalog_roundtrips() {
    let packets: Vec<Box<dyn Packet>> = vec![
        Box::new(ActorEvent {
            entity_runtime_id: 17,
            event_type: 4,
            event_data: -2,
        }),
        Box::new(ActorPickRequest {
            entity_unique_id: -8,
            hotbar_slot: 3,
            with_data: true,
        }),
        Box::new(Animate {
            action_type: 1,
            entity_runtime_id: 2,
            boat_rowing_time: 0.0,
        }),
        Box::new(BlockActorData {
            position: BlockPos::new(4, 68, -1),
            nbt_data: {
                let mut nbt = Compound::new();
                nbt.insert("id", Tag::String("Chest".to_string()));
                nbt
            },
        }),
        Box::new(ChunkRadiusUpdated { chunk_radius: 8 }),
        Box::new(CreativeContent {
            items: vec![CreativeItem {
                creative_item_network_id: 1,
                item: sample_item(),
            }],
        }),
        Box::new(DebugInfo {
            player_unique_id: 2,
            data: b"{}".to_vec(),
        }),
        Box::new(Disconnect {
            hide_disconnect_screen: false,
            message: "Kicked".to_string(),
        }),
        Box::new(Emote {
            entity_runtime_id: 5,
            emote_id: "emote-uuid".to_string(),
            flags: 0,
        }),
        Box::new(InventoryContent {
            window_id: 0,
            content: vec![ItemStack::default(), sample_item()],
        }),
        Box::new(InventorySlot {
            window_id: 0,
            slot: 4,
            new_item: sample_item(),
        }),
        Box::new(ItemFrameDropItem {
            position: BlockPos::new(-4, 70, 9),
        }),
        Box::new(LevelSoundEvent {
            sound_type: 42,
            position: Vec3::new(1.5, 64.0, -0.5),
            extra_data: -1,
            entity_type: ":".to_string(),
            baby_mob: false,
            disable_relative_volume: false,
        }),
        Box::new(MobEquipment {
            entity_runtime_id: 1,
            new_item: sample_item(),
            inventory_slot: 2,
            hotbar_slot: 2,
            window_id: 0,
        }),
        Box::new(MovePlayer {
            entity_runtime_id: 1,
            position: Vec3::new(0.5, 65.62, 0.5),
            pitch: 12.0,
            yaw: 180.0,
            head_yaw: 180.0,
            mode: 2,
            on_ground: false,
            ridden_entity_runtime_id: 0,
            teleport_cause: 3,
            teleport_source_entity_type: 0,
        }),
        Box::new(NetworkStackLatency {
            timestamp: 123_456,
            needs_response: true,
        }),
        Box::new(RemoveActor {
            entity_unique_id: -3,
        }),
        Box::new(RequestChunkRadius { chunk_radius: 12 }),
        Box::new(SetActorLink {
            entity_link: EntityLink {
                ridden_entity_unique_id: 1,
                rider_entity_unique_id: 2,
                link_type: LINK_RIDER,
                immediate: false,
                rider_initiated: true,
            },
        }),
        Box::new(SetDifficulty { difficulty: 2 }),
        Box::new(SetHealth { health: 20 }),
        Box::new(SetSpawnPosition {
            spawn_type: 1,
            position: BlockPos::new(0, 70, 0),
            dimension: 0,
            spawn_position: BlockPos::new(0, 70, 0),
        }),
        Box::new(SetTime { time: 6000 }),
        Box::new(Text {
            text_type: 1,
            needs_translation: false,
            source_name: "Alex".to_string(),
            message: "hi".to_string(),
            parameters: vec![],
            xuid: String::new(),
            platform_chat_id: String::new(),
        }),
        Box::new(TickSync {
            client_request_timestamp: 4,
            server_reception_timestamp: 5,
        }),
        Box::new(Transfer {
            address: "play.example.net".to_string(),
            port: 19132,
        }),
        Box::new(UpdateBlock {
            position: BlockPos::new(2, 64, 2),
            new_block_runtime_id: 1337,
            flags: 0x3,
            layer: 0,
        }),
        Box::new(UpdateEquip {
            window_id: 2,
            window_type: 12,
            size: 1,
            entity_unique_id: 77,
            serialised_inventory_data: Compound::new(),
        }),
    ];
    for packet in &packets {
        assert_stable(packet.as_ref());
    }
}

#[test]
fn test_player_skin_roundtrip() {
    let packet = PlayerSkin {
        uuid: Uuid::from_bytes([9; 16]),
        skin: Skin {
            skin_id: "custom".to_string(),
            skin_resource_patch: b"{}".to_vec(),
            skin_image_width: 1,
            skin_image_height: 1,
            skin_data: vec![0, 0, 0, 255],
            cape_image_width: 0,
            cape_image_height: 0,
            arm_size: "wide".to_string(),
            skin_colour: "#b37b62".to_string(),
            ..Default::default()
        },
        new_skin_name: "new".to_string(),
        old_skin_name: "old".to_string(),
    };
    assert_stable(&packet);
}

#[test]
fn test_crafting_and_enchant_packets_roundtrip() {
    use conduit_protocol::enchant::{EnchantmentInstance, EnchantmentOption, ItemEnchantments};
    use conduit_protocol::recipe::{Recipe, ShapelessRecipe};

    let crafting = CraftingData {
        recipes: vec![Recipe::Shapeless(ShapelessRecipe {
            recipe_id: "minecraft:torch".to_string(),
            input: vec![ItemStack {
                item_type: ItemType {
                    network_id: 263,
                    metadata: 0,
                },
                count: 1,
                ..Default::default()
            }],
            output: vec![ItemStack {
                item_type: ItemType {
                    network_id: 50,
                    metadata: 0,
                },
                count: 4,
                ..Default::default()
            }],
            uuid: Uuid::from_bytes([3; 16]),
            block: "crafting_table".to_string(),
            priority: 0,
            recipe_network_id: 1,
        })],
        potion_recipes: vec![],
        potion_container_change_recipes: vec![],
        clear_recipes: true,
    };
    assert_stable(&crafting);

    let enchant = PlayerEnchantOptions {
        options: vec![EnchantmentOption {
            cost: 3,
            enchantments: ItemEnchantments {
                slot: 0x10,
                enchantments: [
                    vec![],
                    vec![EnchantmentInstance {
                        enchantment_type: 9,
                        level: 1,
                    }],
                    vec![],
                ],
            },
            name: "elder free of inside".to_string(),
            recipe_network_id: 2,
        }],
    };
    assert_stable(&enchant);
}

#[test]
fn test_available_commands_through_registry() {
    use conduit_protocol::command::{Command, CommandEnum, CommandOverload, NO_ALIASES};

    let packet = AvailableCommands {
        enum_values: vec!["survival".to_string(), "creative".to_string()],
        suffixes: vec![],
        enums: vec![CommandEnum {
            name: "GameMode".to_string(),
            value_indices: vec![0, 1],
        }],
        commands: vec![Command {
            name: "gamemode".to_string(),
            description: "Sets a player's game mode.".to_string(),
            flags: 0,
            permission_level: 1,
            aliases_offset: NO_ALIASES,
            overloads: vec![CommandOverload { parameters: vec![] }],
        }],
        dynamic_enums: vec![],
        enum_constraints: vec![],
    };
    assert_stable(&packet);
}
