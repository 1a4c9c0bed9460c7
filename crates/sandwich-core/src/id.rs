use slotmap::new_key_type;

new_key_type! {
    /// Identifies an ingredient in the pantry.
    pub struct IngredientId;

    /// Identifies a recipe in the cookbook.
    pub struct RecipeId;
}

/// Any node of the composition graph. Back-references are keyed by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodId {
    Ingredient(IngredientId),
    Recipe(RecipeId),
}

impl From<IngredientId> for FoodId {
    fn from(id: IngredientId) -> Self {
        FoodId::Ingredient(id)
    }
}

impl From<RecipeId> for FoodId {
    fn from(id: RecipeId) -> Self {
        FoodId::Recipe(id)
    }
}
