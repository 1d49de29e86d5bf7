//! Numeric packet IDs of the frozen protocol revision. The full table is
//! declared even though only part of the catalog has a shape implemented,
//! so that tools can name every frame they see.

pub const LOGIN: u32 = 1;
pub const PLAY_STATUS: u32 = 2;
pub const SERVER_TO_CLIENT_HANDSHAKE: u32 = 3;
pub const CLIENT_TO_SERVER_HANDSHAKE: u32 = 4;
pub const DISCONNECT: u32 = 5;
pub const RESOURCE_PACKS_INFO: u32 = 6;
pub const RESOURCE_PACK_STACK: u32 = 7;
pub const RESOURCE_PACK_CLIENT_RESPONSE: u32 = 8;
pub const TEXT: u32 = 9;
pub const SET_TIME: u32 = 10;
pub const START_GAME: u32 = 11;
pub const ADD_PLAYER: u32 = 12;
pub const ADD_ACTOR: u32 = 13;
pub const REMOVE_ACTOR: u32 = 14;
pub const ADD_ITEM_ACTOR: u32 = 15;
pub const TAKE_ITEM_ACTOR: u32 = 17;
pub const MOVE_ACTOR_ABSOLUTE: u32 = 18;
pub const MOVE_PLAYER: u32 = 19;
pub const RIDER_JUMP: u32 = 20;
pub const UPDATE_BLOCK: u32 = 21;
pub const ADD_PAINTING: u32 = 22;
pub const TICK_SYNC: u32 = 23;
pub const LEVEL_SOUND_EVENT_V1: u32 = 24;
pub const LEVEL_EVENT: u32 = 25;
pub const BLOCK_EVENT: u32 = 26;
pub const ACTOR_EVENT: u32 = 27;
pub const MOB_EFFECT: u32 = 28;
pub const UPDATE_ATTRIBUTES: u32 = 29;
pub const INVENTORY_TRANSACTION: u32 = 30;
pub const MOB_EQUIPMENT: u32 = 31;
pub const MOB_ARMOUR_EQUIPMENT: u32 = 32;
pub const INTERACT: u32 = 33;
pub const BLOCK_PICK_REQUEST: u32 = 34;
pub const ACTOR_PICK_REQUEST: u32 = 35;
pub const PLAYER_ACTION: u32 = 36;
pub const ACTOR_FALL: u32 = 37;
pub const HURT_ARMOUR: u32 = 38;
pub const SET_ACTOR_DATA: u32 = 39;
pub const SET_ACTOR_MOTION: u32 = 40;
pub const SET_ACTOR_LINK: u32 = 41;
pub const SET_HEALTH: u32 = 42;
pub const SET_SPAWN_POSITION: u32 = 43;
pub const ANIMATE: u32 = 44;
pub const RESPAWN: u32 = 45;
pub const CONTAINER_OPEN: u32 = 46;
pub const CONTAINER_CLOSE: u32 = 47;
pub const PLAYER_HOT_BAR: u32 = 48;
pub const INVENTORY_CONTENT: u32 = 49;
pub const INVENTORY_SLOT: u32 = 50;
pub const CONTAINER_SET_DATA: u32 = 51;
pub const CRAFTING_DATA: u32 = 52;
pub const CRAFTING_EVENT: u32 = 53;
pub const GUI_DATA_PICK_ITEM: u32 = 54;
pub const ADVENTURE_SETTINGS: u32 = 55;
pub const BLOCK_ACTOR_DATA: u32 = 56;
pub const PLAYER_INPUT: u32 = 57;
pub const LEVEL_CHUNK: u32 = 58;
pub const SET_COMMANDS_ENABLED: u32 = 59;
pub const SET_DIFFICULTY: u32 = 60;
pub const CHANGE_DIMENSION: u32 = 61;
pub const SET_PLAYER_GAME_TYPE: u32 = 62;
pub const PLAYER_LIST: u32 = 63;
pub const SIMPLE_EVENT: u32 = 64;
pub const EVENT: u32 = 65;
pub const SPAWN_EXPERIENCE_ORB: u32 = 66;
pub const CLIENT_BOUND_MAP_ITEM_DATA: u32 = 67;
pub const MAP_INFO_REQUEST: u32 = 68;
pub const REQUEST_CHUNK_RADIUS: u32 = 69;
pub const CHUNK_RADIUS_UPDATED: u32 = 70;
pub const ITEM_FRAME_DROP_ITEM: u32 = 71;
pub const GAME_RULES_CHANGED: u32 = 72;
pub const CAMERA: u32 = 73;
pub const BOSS_EVENT: u32 = 74;
pub const SHOW_CREDITS: u32 = 75;
pub const AVAILABLE_COMMANDS: u32 = 76;
pub const COMMAND_REQUEST: u32 = 77;
pub const COMMAND_BLOCK_UPDATE: u32 = 78;
pub const COMMAND_OUTPUT: u32 = 79;
pub const UPDATE_TRADE: u32 = 80;
pub const UPDATE_EQUIP: u32 = 81;
pub const RESOURCE_PACK_DATA_INFO: u32 = 82;
pub const RESOURCE_PACK_CHUNK_DATA: u32 = 83;
pub const RESOURCE_PACK_CHUNK_REQUEST: u32 = 84;
pub const TRANSFER: u32 = 85;
pub const PLAY_SOUND: u32 = 86;
pub const STOP_SOUND: u32 = 87;
pub const SET_TITLE: u32 = 88;
pub const ADD_BEHAVIOUR_TREE: u32 = 89;
pub const STRUCTURE_BLOCK_UPDATE: u32 = 90;
pub const SHOW_STORE_OFFER: u32 = 91;
pub const PURCHASE_RECEIPT: u32 = 92;
pub const PLAYER_SKIN: u32 = 93;
pub const SUB_CLIENT_LOGIN: u32 = 94;
pub const AUTOMATION_CLIENT_CONNECT: u32 = 95;
pub const SET_LAST_HURT_BY: u32 = 96;
pub const BOOK_EDIT: u32 = 97;
pub const NPC_REQUEST: u32 = 98;
pub const PHOTO_TRANSFER: u32 = 99;
pub const MODAL_FORM_REQUEST: u32 = 100;
pub const MODAL_FORM_RESPONSE: u32 = 101;
pub const SERVER_SETTINGS_REQUEST: u32 = 102;
pub const SERVER_SETTINGS_RESPONSE: u32 = 103;
pub const SHOW_PROFILE: u32 = 104;
pub const SET_DEFAULT_GAME_TYPE: u32 = 105;
pub const REMOVE_OBJECTIVE: u32 = 106;
pub const SET_DISPLAY_OBJECTIVE: u32 = 107;
pub const SET_SCORE: u32 = 108;
pub const LAB_TABLE: u32 = 109;
pub const UPDATE_BLOCK_SYNCED: u32 = 110;
pub const MOVE_ACTOR_DELTA: u32 = 111;
pub const SET_SCOREBOARD_IDENTITY: u32 = 112;
pub const SET_LOCAL_PLAYER_AS_INITIALISED: u32 = 113;
pub const UPDATE_SOFT_ENUM: u32 = 114;
pub const NETWORK_STACK_LATENCY: u32 = 115;
pub const SCRIPT_CUSTOM_EVENT: u32 = 117;
pub const SPAWN_PARTICLE_EFFECT: u32 = 118;
pub const AVAILABLE_ACTOR_IDENTIFIERS: u32 = 119;
pub const LEVEL_SOUND_EVENT_V2: u32 = 120;
pub const NETWORK_CHUNK_PUBLISHER_UPDATE: u32 = 121;
pub const BIOME_DEFINITION_LIST: u32 = 122;
pub const LEVEL_SOUND_EVENT: u32 = 123;
pub const LEVEL_EVENT_GENERIC: u32 = 124;
pub const LECTERN_UPDATE: u32 = 125;
pub const ADD_ENTITY: u32 = 127;
pub const REMOVE_ENTITY: u32 = 128;
pub const CLIENT_CACHE_STATUS: u32 = 129;
pub const ON_SCREEN_TEXTURE_ANIMATION: u32 = 130;
pub const MAP_CREATE_LOCKED_COPY: u32 = 131;
pub const STRUCTURE_TEMPLATE_DATA_REQUEST: u32 = 132;
pub const STRUCTURE_TEMPLATE_DATA_RESPONSE: u32 = 133;
pub const UPDATE_BLOCK_PROPERTIES: u32 = 134;
pub const CLIENT_CACHE_BLOB_STATUS: u32 = 135;
pub const CLIENT_CACHE_MISS_RESPONSE: u32 = 136;
pub const EDUCATION_SETTINGS: u32 = 137;
pub const EMOTE: u32 = 138;
pub const MULTI_PLAYER_SETTINGS: u32 = 139;
pub const SETTINGS_COMMAND: u32 = 140;
pub const ANVIL_DAMAGE: u32 = 141;
pub const COMPLETED_USING_ITEM: u32 = 142;
pub const NETWORK_SETTINGS: u32 = 143;
pub const PLAYER_AUTH_INPUT: u32 = 144;
pub const CREATIVE_CONTENT: u32 = 145;
pub const PLAYER_ENCHANT_OPTIONS: u32 = 146;
pub const ITEM_STACK_REQUEST: u32 = 147;
pub const ITEM_STACK_RESPONSE: u32 = 148;
pub const PLAYER_ARMOUR_DAMAGE: u32 = 149;
pub const CODE_BUILDER: u32 = 150;
pub const UPDATE_PLAYER_GAME_TYPE: u32 = 151;
pub const EMOTE_LIST: u32 = 152;
pub const POSITION_TRACKING_DB_SERVER_BROADCAST: u32 = 153;
pub const POSITION_TRACKING_DB_CLIENT_REQUEST: u32 = 154;
pub const DEBUG_INFO: u32 = 155;
pub const PACKET_VIOLATION_WARNING: u32 = 156;
