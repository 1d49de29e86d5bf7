use uuid::Uuid;

use conduit_common::error::{ProtocolError, ProtocolResult};
use conduit_common::limits::LOWER_LIMIT;

use crate::buffer::PacketBuffer;
use crate::item::{ItemStack, ItemType};

pub const RECIPE_SHAPELESS: i32 = 0;
pub const RECIPE_SHAPED: i32 = 1;
pub const RECIPE_FURNACE: i32 = 2;
pub const RECIPE_FURNACE_DATA: i32 = 3;
pub const RECIPE_MULTI: i32 = 4;
pub const RECIPE_SHULKER_BOX: i32 = 5;
pub const RECIPE_SHAPELESS_CHEMISTRY: i32 = 6;
pub const RECIPE_SHAPED_CHEMISTRY: i32 = 7;

/// A crafting recipe in one of the shapes the crafting data packet carries.
/// The field list is pinned against the captured protocol revision.
#[derive(Debug, Clone, PartialEq)]
pub enum Recipe {
    Shapeless(ShapelessRecipe),
    Shaped(ShapedRecipe),
    Furnace(FurnaceRecipe),
    FurnaceData(FurnaceRecipe),
    Multi(MultiRecipe),
    ShulkerBox(ShapelessRecipe),
    ShapelessChemistry(ShapelessRecipe),
    ShapedChemistry(ShapedRecipe),
}

/// A recipe with unordered inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapelessRecipe {
    /// Unique ID of the recipe, such as 'minecraft:torch'.
    pub recipe_id: String,
    /// Ingredients in their reduced recipe form.
    pub input: Vec<ItemStack>,
    pub output: Vec<ItemStack>,
    pub uuid: Uuid,
    /// The block the recipe is crafted at, such as 'crafting_table'.
    pub block: String,
    pub priority: i32,
    /// Network ID the client submits back when crafting this recipe.
    pub recipe_network_id: u32,
}

/// A recipe whose inputs form a width x height grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapedRecipe {
    pub recipe_id: String,
    pub width: i32,
    pub height: i32,
    /// Exactly width * height ingredients, row by row.
    pub input: Vec<ItemStack>,
    pub output: Vec<ItemStack>,
    pub uuid: Uuid,
    pub block: String,
    pub priority: i32,
    pub recipe_network_id: u32,
}

/// A smelting recipe. The metadata of the input only travels for the
/// data variant of the recipe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FurnaceRecipe {
    pub input: ItemType,
    pub output: ItemStack,
    pub block: String,
}

/// A special recipe resolved entirely client-side, such as map cloning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiRecipe {
    pub uuid: Uuid,
    pub recipe_network_id: u32,
}

/// A potion combined with a reagent into another potion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PotionRecipe {
    pub input_potion_id: i32,
    pub input_potion_metadata: i32,
    pub reagent_item_id: i32,
    pub reagent_item_metadata: i32,
    pub output_potion_id: i32,
    pub output_potion_metadata: i32,
}

/// A potion changing container, such as a splash potion made with gunpowder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PotionContainerChangeRecipe {
    pub input_item_id: i32,
    pub reagent_item_id: i32,
    pub output_item_id: i32,
}

impl Recipe {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<Recipe> {
        let recipe_type = buffer.read_varint32()?;
        match recipe_type {
            RECIPE_SHAPELESS => Ok(Recipe::Shapeless(ShapelessRecipe::read(buffer)?)),
            RECIPE_SHAPED => Ok(Recipe::Shaped(ShapedRecipe::read(buffer)?)),
            RECIPE_FURNACE => Ok(Recipe::Furnace(FurnaceRecipe::read(buffer, false)?)),
            RECIPE_FURNACE_DATA => Ok(Recipe::FurnaceData(FurnaceRecipe::read(buffer, true)?)),
            RECIPE_MULTI => Ok(Recipe::Multi(MultiRecipe::read(buffer)?)),
            RECIPE_SHULKER_BOX => Ok(Recipe::ShulkerBox(ShapelessRecipe::read(buffer)?)),
            RECIPE_SHAPELESS_CHEMISTRY => {
                Ok(Recipe::ShapelessChemistry(ShapelessRecipe::read(buffer)?))
            }
            RECIPE_SHAPED_CHEMISTRY => Ok(Recipe::ShapedChemistry(ShapedRecipe::read(buffer)?)),
            other => Err(ProtocolError::malformed(
                "recipe",
                format!("unknown recipe type {}", other),
            )),
        }
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        match self {
            Recipe::Shapeless(recipe) => {
                buffer.write_varint32(RECIPE_SHAPELESS);
                recipe.write(buffer);
            }
            Recipe::Shaped(recipe) => {
                buffer.write_varint32(RECIPE_SHAPED);
                recipe.write(buffer);
            }
            Recipe::Furnace(recipe) => {
                buffer.write_varint32(RECIPE_FURNACE);
                recipe.write(buffer, false);
            }
            Recipe::FurnaceData(recipe) => {
                buffer.write_varint32(RECIPE_FURNACE_DATA);
                recipe.write(buffer, true);
            }
            Recipe::Multi(recipe) => {
                buffer.write_varint32(RECIPE_MULTI);
                recipe.write(buffer);
            }
            Recipe::ShulkerBox(recipe) => {
                buffer.write_varint32(RECIPE_SHULKER_BOX);
                recipe.write(buffer);
            }
            Recipe::ShapelessChemistry(recipe) => {
                buffer.write_varint32(RECIPE_SHAPELESS_CHEMISTRY);
                recipe.write(buffer);
            }
            Recipe::ShapedChemistry(recipe) => {
                buffer.write_varint32(RECIPE_SHAPED_CHEMISTRY);
                recipe.write(buffer);
            }
        }
    }
}

impl ShapelessRecipe {
    fn read(buffer: &mut PacketBuffer) -> ProtocolResult<ShapelessRecipe> {
        let recipe_id = buffer.read_string()?;
        let input_count = buffer.read_varuint_len(LOWER_LIMIT, "recipe input")?;
        let mut input = Vec::with_capacity(input_count);
        for _ in 0..input_count {
            input.push(ItemStack::read_ingredient(buffer)?);
        }
        let output_count = buffer.read_varuint_len(LOWER_LIMIT, "recipe output")?;
        let mut output = Vec::with_capacity(output_count);
        for _ in 0..output_count {
            output.push(ItemStack::read(buffer)?);
        }
        Ok(ShapelessRecipe {
            recipe_id,
            input,
            output,
            uuid: buffer.read_uuid()?,
            block: buffer.read_string()?,
            priority: buffer.read_varint32()?,
            recipe_network_id: buffer.read_varuint32()?,
        })
    }

    fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_string(&self.recipe_id);
        buffer.write_varuint32(self.input.len() as u32);
        for stack in &self.input {
            stack.write_ingredient(buffer);
        }
        buffer.write_varuint32(self.output.len() as u32);
        for stack in &self.output {
            stack.write(buffer);
        }
        buffer.write_uuid(self.uuid);
        buffer.write_string(&self.block);
        buffer.write_varint32(self.priority);
        buffer.write_varuint32(self.recipe_network_id);
    }
}

impl ShapedRecipe {
    fn read(buffer: &mut PacketBuffer) -> ProtocolResult<ShapedRecipe> {
        let recipe_id = buffer.read_string()?;
        let width = buffer.read_varint32()?;
        let height = buffer.read_varint32()?;
        if width < 0 || height < 0 {
            return Err(ProtocolError::negative("shaped recipe grid", width.min(height)));
        }
        let cells = width as u64 * height as u64;
        if cells > u64::from(LOWER_LIMIT) {
            return Err(ProtocolError::limit(
                "shaped recipe grid",
                LOWER_LIMIT,
                cells.min(u64::from(u32::MAX)) as u32,
            ));
        }
        let mut input = Vec::with_capacity(cells as usize);
        for _ in 0..cells {
            input.push(ItemStack::read_ingredient(buffer)?);
        }
        let output_count = buffer.read_varuint_len(LOWER_LIMIT, "recipe output")?;
        let mut output = Vec::with_capacity(output_count);
        for _ in 0..output_count {
            output.push(ItemStack::read(buffer)?);
        }
        Ok(ShapedRecipe {
            recipe_id,
            width,
            height,
            input,
            output,
            uuid: buffer.read_uuid()?,
            block: buffer.read_string()?,
            priority: buffer.read_varint32()?,
            recipe_network_id: buffer.read_varuint32()?,
        })
    }

    fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_string(&self.recipe_id);
        buffer.write_varint32(self.width);
        buffer.write_varint32(self.height);
        for stack in &self.input {
            stack.write_ingredient(buffer);
        }
        buffer.write_varuint32(self.output.len() as u32);
        for stack in &self.output {
            stack.write(buffer);
        }
        buffer.write_uuid(self.uuid);
        buffer.write_string(&self.block);
        buffer.write_varint32(self.priority);
        buffer.write_varuint32(self.recipe_network_id);
    }
}

impl FurnaceRecipe {
    fn read(buffer: &mut PacketBuffer, with_metadata: bool) -> ProtocolResult<FurnaceRecipe> {
        let mut input = ItemType {
            network_id: buffer.read_varint32()?,
            metadata: 0,
        };
        if with_metadata {
            input.metadata = buffer.read_varint32()? as i16;
        }
        Ok(FurnaceRecipe {
            input,
            output: ItemStack::read(buffer)?,
            block: buffer.read_string()?,
        })
    }

    fn write(&self, buffer: &mut PacketBuffer, with_metadata: bool) {
        buffer.write_varint32(self.input.network_id);
        if with_metadata {
            buffer.write_varint32(self.input.metadata as i32);
        }
        self.output.write(buffer);
        buffer.write_string(&self.block);
    }
}

impl MultiRecipe {
    fn read(buffer: &mut PacketBuffer) -> ProtocolResult<MultiRecipe> {
        Ok(MultiRecipe {
            uuid: buffer.read_uuid()?,
            recipe_network_id: buffer.read_varuint32()?,
        })
    }

    fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_uuid(self.uuid);
        buffer.write_varuint32(self.recipe_network_id);
    }
}

impl PotionRecipe {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<PotionRecipe> {
        Ok(PotionRecipe {
            input_potion_id: buffer.read_varint32()?,
            input_potion_metadata: buffer.read_varint32()?,
            reagent_item_id: buffer.read_varint32()?,
            reagent_item_metadata: buffer.read_varint32()?,
            output_potion_id: buffer.read_varint32()?,
            output_potion_metadata: buffer.read_varint32()?,
        })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_varint32(self.input_potion_id);
        buffer.write_varint32(self.input_potion_metadata);
        buffer.write_varint32(self.reagent_item_id);
        buffer.write_varint32(self.reagent_item_metadata);
        buffer.write_varint32(self.output_potion_id);
        buffer.write_varint32(self.output_potion_metadata);
    }
}

impl PotionContainerChangeRecipe {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<PotionContainerChangeRecipe> {
        Ok(PotionContainerChangeRecipe {
            input_item_id: buffer.read_varint32()?,
            reagent_item_id: buffer.read_varint32()?,
            output_item_id: buffer.read_varint32()?,
        })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_varint32(self.input_item_id);
        buffer.write_varint32(self.reagent_item_id);
        buffer.write_varint32(self.output_item_id);
    }
}
