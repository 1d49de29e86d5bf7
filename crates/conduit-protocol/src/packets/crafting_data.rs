use conduit_common::error::ProtocolResult;
use conduit_common::limits::HIGHER_LIMIT;

use crate::buffer::PacketBuffer;
use crate::id;
use crate::packet::Packet;
use crate::recipe::{PotionContainerChangeRecipe, PotionRecipe, Recipe};

/// Sends the full list of recipes the client may craft with, usually once
/// shortly after joining.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CraftingData {
    pub recipes: Vec<Recipe>,
    pub potion_recipes: Vec<PotionRecipe>,
    pub potion_container_change_recipes: Vec<PotionContainerChangeRecipe>,
    /// Whether recipes the client already has should be cleared first.
    pub clear_recipes: bool,
}

impl Packet for CraftingData {
    fn id(&self) -> u32 {
        id::CRAFTING_DATA
    }

    fn name(&self) -> &'static str {
        "CraftingData"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varuint32(self.recipes.len() as u32);
        for recipe in &self.recipes {
            recipe.write(buffer);
        }
        buffer.write_varuint32(self.potion_recipes.len() as u32);
        for recipe in &self.potion_recipes {
            recipe.write(buffer);
        }
        buffer.write_varuint32(self.potion_container_change_recipes.len() as u32);
        for recipe in &self.potion_container_change_recipes {
            recipe.write(buffer);
        }
        buffer.write_bool(self.clear_recipes);
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        let count = buffer.read_varuint_len(HIGHER_LIMIT, "crafting recipe")?;
        self.recipes = Vec::with_capacity(count);
        for _ in 0..count {
            self.recipes.push(Recipe::read(buffer)?);
        }
        let count = buffer.read_varuint_len(HIGHER_LIMIT, "potion recipe")?;
        self.potion_recipes = Vec::with_capacity(count);
        for _ in 0..count {
            self.potion_recipes.push(PotionRecipe::read(buffer)?);
        }
        let count = buffer.read_varuint_len(HIGHER_LIMIT, "potion container recipe")?;
        self.potion_container_change_recipes = Vec::with_capacity(count);
        for _ in 0..count {
            self.potion_container_change_recipes
                .push(PotionContainerChangeRecipe::read(buffer)?);
        }
        self.clear_recipes = buffer.read_bool()?;
        Ok(())
    }
}
