//! Ceilings applied to length prefixes before anything is allocated.

/// Limit for collections that stay small in practice, such as the entity
/// links attached to a single entity.
pub const LOWER_LIMIT: u32 = 512;

/// Limit for collections that may genuinely grow large, such as the block
/// identifier lists on an item stack.
pub const HIGHER_LIMIT: u32 = 64 * 1024;

/// Maximum nesting depth of an NBT tree.
pub const NBT_DEPTH_LIMIT: usize = 512;

/// Ceiling on any single NBT string, list or array length. Bounds the
/// allocation a hostile length prefix can demand.
pub const NBT_LENGTH_LIMIT: u32 = 16 * 1024 * 1024;
