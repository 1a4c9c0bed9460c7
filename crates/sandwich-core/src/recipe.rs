use std::collections::HashSet;

use crate::fixed::Cost;
use crate::id::{IngredientId, RecipeId};

/// Ingredients to skip during an availability check or a make.
///
/// Substitutions and derived recipes use this to leave ingredients out
/// without touching the recipe that lists them.
pub type ExclusionSet = HashSet<IngredientId>;

/// A named recipe. Recipes refer to pantry ingredients by handle and never
/// own them.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: String,
    /// Flat markup added on top of the ingredient cost.
    pub premium: Cost,
    pub kind: RecipeKind,
}

/// The two recipe variants. The set is closed.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeKind {
    /// A plain list of ingredients.
    Simple { ingredients: Vec<IngredientId> },
    /// Builds on `base`, adding `added` and permanently leaving out `removed`.
    Complex {
        base: RecipeId,
        added: Vec<IngredientId>,
        /// Deduplicated at registration; order kept for display.
        removed: Vec<IngredientId>,
    },
}

impl Recipe {
    pub fn is_complex(&self) -> bool {
        matches!(self.kind, RecipeKind::Complex { .. })
    }

    /// The ingredients listed at this level: all of them for a simple
    /// recipe, only the added ones for a complex recipe.
    pub fn own_ingredients(&self) -> &[IngredientId] {
        match &self.kind {
            RecipeKind::Simple { ingredients } => ingredients,
            RecipeKind::Complex { added, .. } => added,
        }
    }

    /// Ingredients this recipe permanently leaves out. Empty for simple recipes.
    pub fn removed(&self) -> &[IngredientId] {
        match &self.kind {
            RecipeKind::Simple { .. } => &[],
            RecipeKind::Complex { removed, .. } => removed,
        }
    }

    pub fn base(&self) -> Option<RecipeId> {
        match &self.kind {
            RecipeKind::Simple { .. } => None,
            RecipeKind::Complex { base, .. } => Some(*base),
        }
    }
}
